// src/format/superscript.rs

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Writes `n` with Unicode superscript digits, e.g. `12` becomes `¹²`.
pub fn superscript(n: usize) -> String {
    n.to_string()
        .chars()
        .filter_map(|digit| digit.to_digit(10))
        .map(|digit| SUPERSCRIPT_DIGITS[digit as usize])
        .collect()
}
