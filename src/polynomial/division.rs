// src/polynomial/division.rs

use log::{debug, warn};
use num::Zero;

use crate::polynomial::error::PolynomialError;
use crate::polynomial::polynomial::{trim_trailing_zeros, Polynomial};

fn is_zero_buffer(coefficients: &[f64]) -> bool {
    coefficients.len() == 1 && coefficients[0].is_zero()
}

impl Polynomial {
    /// Polynomial long division.
    ///
    /// Returns `(quotient, remainder)` with `self = quotient * divisor + remainder`
    /// and `degree(remainder) < degree(divisor)`.
    ///
    /// Termination relies on the leading term of the running remainder
    /// cancelling exactly. When rounding leaves a residual, the step repeats
    /// on the same power with a tiny factor, overwriting that quotient slot,
    /// and a warning is logged.
    ///
    /// Coefficients that overflow to `inf`/`NaN` never cancel, so such inputs
    /// (e.g. `[1e308, 1e308]` by `[1, 1e-308]`) loop forever.
    pub fn divmod(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial), PolynomialError> {
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZeroPolynomial);
        }

        let mut num = self.coefficients().to_vec();
        let den = divisor.coefficients();
        let mut deg_num = num.len() - 1;
        let deg_den = den.len() - 1;

        if deg_num < deg_den {
            return Ok((Polynomial::zero(), self.clone()));
        }

        let mut quotient = vec![0.0; deg_num - deg_den + 1];
        let lead_den = den[deg_den];
        let mut steps = 0usize;

        while deg_num >= deg_den && !is_zero_buffer(&num) {
            let d = num[deg_num] / lead_den;
            let pos = deg_num - deg_den;
            quotient[pos] = d;

            for (i, coefficient) in den.iter().enumerate() {
                if let Some(slot) = num.get_mut(i + pos) {
                    *slot -= d * coefficient;
                }
            }

            if !num[deg_num].is_zero() {
                warn!(
                    "leading term of x^{} did not cancel exactly (residual {:e})",
                    deg_num, num[deg_num]
                );
            }

            trim_trailing_zeros(&mut num);
            deg_num = num.len() - 1;
            steps += 1;
        }

        debug!(
            "divmod: dividend length {}, divisor length {}, {} elimination steps",
            self.coefficients().len(),
            den.len(),
            steps
        );

        Ok((Polynomial::new(quotient), Polynomial::new(num)))
    }

    /// Quotient half of [`Polynomial::divmod`].
    pub fn quotient(&self, divisor: &Polynomial) -> Result<Polynomial, PolynomialError> {
        self.divmod(divisor).map(|(quotient, _)| quotient)
    }

    /// Remainder half of [`Polynomial::divmod`].
    pub fn remainder(&self, divisor: &Polynomial) -> Result<Polynomial, PolynomialError> {
        self.divmod(divisor).map(|(_, remainder)| remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::degree::Degree;

    #[test]
    fn test_exact_division() {
        // (x^2 - 1) / (x - 1) = x + 1
        let a = Polynomial::new([-1, 0, 1]);
        let b = Polynomial::new([-1, 1]);
        let (q, r) = a.divmod(&b).unwrap();
        assert_eq!(q, Polynomial::new([1, 1]));
        assert_eq!(r, Polynomial::zero());
    }

    #[test]
    fn test_division_with_remainder() {
        // (x^2 + 1) / (x + 1) = (x - 1) rem 2
        let a = Polynomial::new([1, 0, 1]);
        let b = Polynomial::new([1, 1]);
        let (q, r) = a.divmod(&b).unwrap();
        assert_eq!(q, Polynomial::new([-1, 1]));
        assert_eq!(r, Polynomial::new([2]));
    }

    #[test]
    fn test_division_by_zero_polynomial() {
        let a = Polynomial::new([1]);
        let err = a.divmod(&Polynomial::new([0, 0])).unwrap_err();
        assert_eq!(err, PolynomialError::DivisionByZeroPolynomial);
        assert!(a.quotient(&Polynomial::zero()).is_err());
        assert!(a.remainder(&Polynomial::zero()).is_err());
    }

    #[test]
    fn test_zero_dividend_by_zero_divisor_still_fails() {
        assert!(Polynomial::zero().divmod(&Polynomial::zero()).is_err());
    }

    #[test]
    fn test_degree_underflow_returns_dividend() {
        let a = Polynomial::new([3, 2]);
        let b = Polynomial::new([1, 0, 1]);
        let (q, r) = a.divmod(&b).unwrap();
        assert_eq!(q, Polynomial::zero());
        assert_eq!(r, a);
    }

    #[test]
    fn test_zero_dividend() {
        let (q, r) = Polynomial::zero().divmod(&Polynomial::new([5])).unwrap();
        assert_eq!(q, Polynomial::zero());
        assert_eq!(r, Polynomial::zero());
    }

    #[test]
    fn test_division_by_constant() {
        let a = Polynomial::new([2, 4, 6]);
        let (q, r) = a.divmod(&Polynomial::new([2])).unwrap();
        assert_eq!(q, Polynomial::new([1, 2, 3]));
        assert_eq!(r.degree(), Degree::NegInfinity);
    }

    #[test]
    fn test_skipped_powers_leave_zero_quotient_terms() {
        // x^3 / x = x^2, the x^1 and x^0 quotient slots are never written.
        let a = Polynomial::new([0, 0, 0, 1]);
        let b = Polynomial::new([0, 1]);
        let (q, r) = a.divmod(&b).unwrap();
        assert_eq!(q.coefficients(), &[0.0, 0.0, 1.0]);
        assert_eq!(r, Polynomial::zero());
    }

    #[test]
    fn test_quotient_and_remainder_match_divmod() {
        let a = Polynomial::new([5, -3, 0, 2]);
        let b = Polynomial::new([1, 1]);
        let (q, r) = a.divmod(&b).unwrap();
        assert_eq!(a.quotient(&b).unwrap(), q);
        assert_eq!(a.remainder(&b).unwrap(), r);
    }

    #[test]
    fn test_reconstruction() {
        // 2x^3 - 3x + 5 = (x + 1)(2x^2 - 2x - 1) + 6
        let a = Polynomial::new([5, -3, 0, 2]);
        let b = Polynomial::new([1, 1]);
        let (q, r) = a.divmod(&b).unwrap();
        assert_eq!(q, Polynomial::new([-1, -2, 2]));
        assert_eq!(r, Polynomial::new([6]));
        assert_eq!(&(&q * &b) + &r, a);
    }

    #[test]
    fn test_rounding_residual_overwrites_quotient_slot() {
        // 0.7 - (0.7 / 0.3) * 0.3 is not exactly zero, so a second step runs on
        // the same power and replaces the first quotient term with the residual's.
        let (q, r) = Polynomial::new([0.7]).divmod(&Polynomial::new([0.3])).unwrap();
        assert_eq!(q.coefficients(), &[-3.7007434154171886e-16]);
        assert_eq!(r, Polynomial::zero());
    }

    #[test]
    fn test_rounding_residual_with_linear_divisor() {
        let (q, r) = Polynomial::new([1.0, 3.3])
            .divmod(&Polynomial::new([1.0, 0.1]))
            .unwrap();
        assert_eq!(q.coefficients(), &[4.440892098500626e-15]);
        assert_eq!(r.coefficients(), &[-31.999999999999996]);
    }

    #[test]
    fn test_dividend_is_not_mutated() {
        let a = Polynomial::new([1, 0, 1]);
        let b = Polynomial::new([1, 1]);
        let _ = a.divmod(&b).unwrap();
        assert_eq!(a.coefficients(), &[1.0, 0.0, 1.0]);
    }
}
