// tests/session_tests.rs
//
// Drives the interactive session with scripted input and inspects the transcript.

use std::io::Cursor;

use polycalc::cli::Session;
use polycalc::format::RenderOptions;

fn run_script(script: &str) -> String {
    let mut output = Vec::new();
    let mut session = Session::new(Cursor::new(script.as_bytes()), &mut output, RenderOptions::plain());
    session.run().expect("session I/O on in-memory buffers should not fail");
    String::from_utf8(output).expect("transcript should be valid UTF-8")
}

#[test]
fn test_add_then_quit() {
    let transcript = run_script("-5 2 3\n1 1\n1\n6\n");

    assert!(transcript.contains("POLYNOMIAL CALCULATOR"));
    assert!(transcript.contains(" P1(x) │ 3x² + 2x - 5"));
    assert!(transcript.contains(" P2(x) │ x + 1"));
    assert!(transcript.contains("┌─[ SUM ]"));
    assert!(transcript.contains("│ (3x² + 2x - 5) + (x + 1)"));
    assert!(transcript.contains("│ = 3x² + 3x - 4"));
    assert!(transcript.contains("Goodbye!"));
}

#[test]
fn test_division_shows_quotient_and_remainder() {
    let transcript = run_script("1 0 1\n1 1\n4\n6\n");

    assert!(transcript.contains("┌─[ DIVISION ]"));
    assert!(transcript.contains("│ Quotient:  x - 1"));
    assert!(transcript.contains("│ Remainder: 2"));
}

#[test]
fn test_division_by_zero_keeps_session_alive() {
    let transcript = run_script("1\n0 0\n4\n3\n6\n");

    assert!(transcript.contains("cannot divide by the zero polynomial"));
    // The session carried on and ran the multiplication afterwards.
    assert!(transcript.contains("┌─[ PRODUCT ]"));
    assert!(transcript.contains("│ = 0"));
    assert!(transcript.contains("Goodbye!"));
}

#[test]
fn test_invalid_menu_choice_reprompts() {
    let transcript = run_script("1\n2\n9\n\n2\n6\n");

    assert_eq!(transcript.matches("Invalid option").count(), 2);
    assert!(transcript.contains("┌─[ DIFFERENCE ]"));
    assert!(transcript.contains("│ = -1"));
}

#[test]
fn test_invalid_coefficients_reprompt() {
    let transcript = run_script("\nabc 1\n1 2\n3\n6\n");

    assert!(transcript.contains("Empty input. Try again."));
    assert!(transcript.contains("Error: enter only numbers separated by spaces."));
    assert!(transcript.contains(" P1(x) │ 2x + 1"));
    assert!(transcript.contains(" P2(x) │ 3"));
}

#[test]
fn test_reenter_replaces_operands() {
    let transcript = run_script("1\n1\n5\n2\n3\n3\n6\n");

    assert!(transcript.contains("Enter new polynomial 1 (P1)"));
    assert!(transcript.contains("│ (2) × (3)"));
    assert!(transcript.contains("│ = 6"));
}

#[test]
fn test_end_of_input_ends_session() {
    let transcript = run_script("1 1\n");

    assert!(transcript.contains("Enter polynomial 2 (P2)"));
    assert!(!transcript.contains("Goodbye!"));
}

#[test]
fn test_plain_session_has_no_escapes() {
    let transcript = run_script("-5 2 3\n1 1\n3\n6\n");
    assert!(!transcript.contains('\x1b'));
}

#[test]
fn test_colored_session_uses_escapes() {
    let mut output = Vec::new();
    let mut session = Session::new(Cursor::new("1\n1\n6\n".as_bytes()), &mut output, RenderOptions::colored());
    session.run().unwrap();
    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains('\x1b'));
}

#[test]
fn test_blank_coefficient_line_is_zero_polynomial() {
    let transcript = run_script("   \n1 1\n3\n6\n");

    assert!(!transcript.contains("Empty input"));
    assert!(transcript.contains(" P1(x) │ 0"));
    assert!(transcript.contains("│ = 0"));
}

#[test]
fn test_padded_menu_choice_is_rejected() {
    let transcript = run_script("1\n2\n 1 \n1\n6\n");

    assert_eq!(transcript.matches("Invalid option").count(), 1);
    assert!(transcript.contains("│ = 3"));
}
