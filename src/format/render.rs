// src/format/render.rs

use std::fmt::{Display, Formatter, Result};

use num::Zero;
use owo_colors::{OwoColorize, Style};
use serde::{Deserialize, Serialize};

use crate::format::number::format_general;
use crate::format::superscript::superscript;
use crate::polynomial::Polynomial;

/// Rendering capabilities for polynomial output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Emit ANSI color escapes
    pub color: bool,

    /// Write exponents as Unicode superscripts (`x²`) instead of `x^2`
    pub superscript: bool,
}

impl RenderOptions {
    /// No escapes, superscript exponents.
    pub fn plain() -> Self {
        RenderOptions {
            color: false,
            superscript: true,
        }
    }

    pub fn colored() -> Self {
        RenderOptions {
            color: true,
            superscript: true,
        }
    }

    /// Applies `style` to `text` when color is enabled, otherwise returns it unchanged.
    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn power(&self, power: usize) -> String {
        match power {
            0 => String::new(),
            1 => "x".to_string(),
            n if self.superscript => format!("x{}", superscript(n)),
            n => format!("x^{}", n),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::plain()
    }
}

pub(crate) fn coefficient_style() -> Style {
    Style::new().cyan()
}

pub(crate) fn variable_style() -> Style {
    Style::new().green()
}

pub(crate) fn sign_style() -> Style {
    Style::new().bold()
}

/// Renders `polynomial` from its highest power down, e.g. `3x² + 2x - 5`.
///
/// Zero terms are skipped and a coefficient of exactly one is omitted except
/// on the constant term. Any coefficient that is not positive (including NaN)
/// is written with a minus sign.
pub fn render(polynomial: &Polynomial, options: &RenderOptions) -> String {
    if polynomial.is_zero() {
        return options.paint("0", coefficient_style());
    }

    let mut output = String::new();
    for (power, &coefficient) in polynomial.coefficients().iter().enumerate().rev() {
        if coefficient.is_zero() {
            continue;
        }

        let negative = !(coefficient > 0.0);
        let magnitude = coefficient.abs();

        let sign = match (output.is_empty(), negative) {
            (true, false) => String::new(),
            (true, true) => options.paint("-", sign_style()),
            (false, false) => format!(" {} ", options.paint("+", sign_style())),
            (false, true) => format!(" {} ", options.paint("-", sign_style())),
        };
        output.push_str(&sign);

        if magnitude != 1.0 || power == 0 {
            output.push_str(&options.paint(&format_general(magnitude), coefficient_style()));
        }
        if power > 0 {
            output.push_str(&options.paint(&options.power(power), variable_style()));
        }
    }
    output
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", render(self, &RenderOptions::plain()))
    }
}
