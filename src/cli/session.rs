// src/cli/session.rs
//
// Menu-driven calculator loop. Input and output are generic so the same
// session runs on stdin/stdout or on in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use log::debug;
use owo_colors::Style;

use crate::cli::operation::{Operation, Outcome};
use crate::format::{render, RenderOptions};
use crate::input::{parse_coefficients, strip_line_ending, InputError};
use crate::polynomial::Polynomial;

const BOX_WIDTH: usize = 38;

/// Entry picked from the six-option menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Apply(Operation),
    ReEnter,
    Quit,
}

impl MenuChoice {
    /// Matches the line exactly once its line ending is removed; `" 4 "` is not an option.
    pub fn parse(input: &str) -> Option<Self> {
        match strip_line_ending(input) {
            "1" => Some(MenuChoice::Apply(Operation::Add)),
            "2" => Some(MenuChoice::Apply(Operation::Subtract)),
            "3" => Some(MenuChoice::Apply(Operation::Multiply)),
            "4" => Some(MenuChoice::Apply(Operation::Divide)),
            "5" => Some(MenuChoice::ReEnter),
            "6" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

fn header_style() -> Style {
    Style::new().magenta().bold()
}

fn frame_style() -> Style {
    Style::new().green()
}

fn error_style() -> Style {
    Style::new().red()
}

fn prompt_style() -> Style {
    Style::new().cyan()
}

pub struct Session<R, W> {
    input: R,
    output: W,
    options: RenderOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: RenderOptions) -> Self {
        Session {
            input,
            output,
            options,
        }
    }

    /// Runs the calculator until the user quits or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        self.banner()?;

        let (mut p1, mut p2) = match self.read_operands("")? {
            Some(operands) => operands,
            None => return Ok(()),
        };

        loop {
            self.show_operands(&p1, &p2)?;

            let choice = match self.read_choice()? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            debug!("menu choice: {:?}", choice);

            match choice {
                MenuChoice::Apply(operation) => self.show_outcome(operation, &p1, &p2)?,
                MenuChoice::ReEnter => match self.read_operands("new ")? {
                    Some((new_p1, new_p2)) => {
                        p1 = new_p1;
                        p2 = new_p2;
                    }
                    None => return Ok(()),
                },
                MenuChoice::Quit => {
                    writeln!(self.output)?;
                    writeln!(self.output, "{}", self.options.paint("Leaving the calculator. Goodbye!", prompt_style()))?;
                    debug!("session finished");
                    return Ok(());
                }
            }
        }
    }

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn banner(&mut self) -> io::Result<()> {
        let rule = "═".repeat(42);
        writeln!(self.output, "{}", self.options.paint(&format!("╔{}╗", rule), header_style()))?;
        writeln!(self.output, "{}", self.options.paint(&format!("║{:^42}║", "POLYNOMIAL CALCULATOR"), header_style()))?;
        writeln!(self.output, "{}", self.options.paint(&format!("╚{}╝", rule), header_style()))
    }

    fn read_operands(&mut self, qualifier: &str) -> io::Result<Option<(Polynomial, Polynomial)>> {
        let p1 = match self.read_polynomial(&format!("Enter {}polynomial 1 (P1)", qualifier))? {
            Some(p) => p,
            None => return Ok(None),
        };
        let p2 = match self.read_polynomial(&format!("Enter {}polynomial 2 (P2)", qualifier))? {
            Some(p) => p,
            None => return Ok(None),
        };
        Ok(Some((p1, p2)))
    }

    fn read_polynomial(&mut self, title: &str) -> io::Result<Option<Polynomial>> {
        let rule = "═".repeat(title.chars().count() + 2);
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.options.paint(&format!("╔{}╗", rule), header_style()))?;
        writeln!(self.output, "{}", self.options.paint(&format!("║ {} ║", title), header_style()))?;
        writeln!(self.output, "{}", self.options.paint(&format!("╚{}╝", rule), header_style()))?;
        writeln!(
            self.output,
            "{} from the constant term (x⁰) up to the highest power.",
            self.options.paint("NOTE:", Style::new().yellow())
        )?;
        writeln!(
            self.output,
            "Example: for '3x² + 2x - 5' type {}",
            self.options.paint("-5 2 3", prompt_style())
        )?;

        loop {
            write!(self.output, "{} ", self.options.paint("Coefficients »", prompt_style()))?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            match parse_coefficients(&line) {
                Ok(polynomial) => return Ok(Some(polynomial)),
                Err(InputError::Empty) => {
                    writeln!(self.output, "{}", self.options.paint("Empty input. Try again.", error_style()))?;
                }
                Err(InputError::InvalidNumber(token)) => {
                    debug!("rejected coefficient token {:?}", token);
                    writeln!(
                        self.output,
                        "{}",
                        self.options.paint(
                            "Error: enter only numbers separated by spaces.",
                            error_style()
                        )
                    )?;
                }
            }
        }
    }

    fn show_operands(&mut self, p1: &Polynomial, p2: &Polynomial) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            self.options.paint(&format!("╞{} CURRENT POLYNOMIALS {}╡", "═".repeat(10), "═".repeat(11)), header_style())
        )?;
        writeln!(self.output, " P1(x) │ {}", render(p1, &self.options))?;
        writeln!(self.output, " P2(x) │ {}", render(p2, &self.options))?;
        writeln!(self.output, "{}", self.options.paint(&format!("╞{}╡", "═".repeat(42)), header_style()))
    }

    fn read_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.options.paint("--- Which operation? ---", Style::new().bold()))?;
        writeln!(self.output, " 1. Add        (P1 + P2)")?;
        writeln!(self.output, " 2. Subtract   (P1 - P2)")?;
        writeln!(self.output, " 3. Multiply   (P1 × P2)")?;
        writeln!(self.output, " 4. Divide     (P1 ÷ P2)")?;
        writeln!(self.output, " 5. Enter new polynomials")?;
        writeln!(self.output, " 6. Quit")?;

        loop {
            writeln!(self.output)?;
            write!(self.output, "{} ", self.options.paint("Choose an option (1-6) »", Style::new().bold()))?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            match MenuChoice::parse(&line) {
                Some(choice) => return Ok(Some(choice)),
                None => {
                    writeln!(
                        self.output,
                        "{}",
                        self.options.paint("Invalid option. Enter a number from 1 to 6.", error_style())
                    )?;
                }
            }
        }
    }

    fn show_outcome(&mut self, operation: Operation, p1: &Polynomial, p2: &Polynomial) -> io::Result<()> {
        let title = operation.title();
        let side = self.options.paint("│", frame_style());
        let operands = format!(
            "({}) {} ({})",
            render(p1, &self.options),
            self.options.paint(operation.symbol(), Style::new().bold()),
            render(p2, &self.options)
        );

        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            self.options.paint(
                &format!("┌─[ {} ]{}┐", title, "─".repeat(32usize.saturating_sub(title.len()))),
                frame_style()
            )
        )?;

        match operation.apply(p1, p2) {
            Ok(Outcome::Value { result }) => {
                writeln!(self.output, "{} {}", side, operands)?;
                writeln!(self.output, "{} = {}", side, render(&result, &self.options))?;
            }
            Ok(Outcome::Division { quotient, remainder }) => {
                writeln!(self.output, "{} {}", side, operands)?;
                writeln!(self.output, "{} Quotient:  {}", side, render(&quotient, &self.options))?;
                writeln!(self.output, "{} Remainder: {}", side, render(&remainder, &self.options))?;
            }
            Err(e) => {
                debug!("{} rejected: {}", title, e);
                writeln!(
                    self.output,
                    "{} {}",
                    side,
                    self.options.paint("Error: cannot divide by the zero polynomial (0).", error_style())
                )?;
            }
        }

        writeln!(self.output, "{}", self.options.paint(&format!("└{}┘", "─".repeat(BOX_WIDTH)), frame_style()))
    }
}
