// src/polynomial/arithmetic.rs

use std::ops::{Add, Mul, Sub};

use crate::polynomial::degree::Degree;
use crate::polynomial::polynomial::Polynomial;

/// Applies `op` to each pair of coefficients, padding the shorter operand with zeros.
fn zip_padded(left: &Polynomial, right: &Polynomial, op: impl Fn(f64, f64) -> f64) -> Polynomial {
    let len = left.coefficients().len().max(right.coefficients().len());
    let coefficients: Vec<f64> = (0..len)
        .map(|i| op(left.coefficient(i), right.coefficient(i)))
        .collect();
    Polynomial::new(coefficients)
}

impl<'a, 'b> Add<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, other: &'b Polynomial) -> Polynomial {
        zip_padded(self, other, |a, b| a + b)
    }
}

impl<'a, 'b> Sub<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &'b Polynomial) -> Polynomial {
        zip_padded(self, other, |a, b| a - b)
    }
}

impl<'a, 'b> Mul<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &'b Polynomial) -> Polynomial {
        let (left, right) = match (self.degree(), other.degree()) {
            (Degree::Finite(left), Degree::Finite(right)) => (left, right),
            _ => return Polynomial::zero(),
        };

        let mut coefficients = vec![0.0; left + right + 1];
        for (i, a) in self.coefficients().iter().enumerate() {
            for (j, b) in other.coefficients().iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }
        Polynomial::new(coefficients)
    }
}

macro_rules! forward_owned_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, other: Polynomial) -> Polynomial {
                $imp::$method(&self, &other)
            }
        }

        impl<'a> $imp<&'a Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, other: &'a Polynomial) -> Polynomial {
                $imp::$method(&self, other)
            }
        }

        impl<'a> $imp<Polynomial> for &'a Polynomial {
            type Output = Polynomial;

            fn $method(self, other: Polynomial) -> Polynomial {
                $imp::$method(self, &other)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_pads_shorter_operand() {
        let a = Polynomial::new([-5, 2, 3]);
        let b = Polynomial::new([1, 1]);
        assert_eq!(&a + &b, Polynomial::new([-4, 3, 3]));
    }

    #[test]
    fn test_add_renormalizes_cancelled_leading_terms() {
        let a = Polynomial::new([1, 2, 3]);
        let b = Polynomial::new([1, 1, -3]);
        let sum = a + b;
        assert_eq!(sum.coefficients(), &[2.0, 3.0]);
        assert_eq!(sum.degree(), Degree::Finite(1));
    }

    #[test]
    fn test_sub_is_not_commutative() {
        let a = Polynomial::new([3, 1]);
        let b = Polynomial::new([1]);
        assert_eq!(&a - &b, Polynomial::new([2, 1]));
        assert_eq!(&b - &a, Polynomial::new([-2, -1]));
    }

    #[test]
    fn test_sub_self_is_zero() {
        let p = Polynomial::new([1.5, -2.0, 7.25]);
        assert_eq!(&p - &p, Polynomial::zero());
    }

    #[test]
    fn test_mul_convolution() {
        let a = Polynomial::new([1, 1]);
        let b = Polynomial::new([1, -1]);
        assert_eq!(&a * &b, Polynomial::new([1, 0, -1]));
    }

    #[test]
    fn test_mul_by_zero_short_circuits() {
        let a = Polynomial::new([1, 2, 3]);
        assert_eq!(&a * &Polynomial::zero(), Polynomial::zero());
        assert_eq!(Polynomial::zero() * a, Polynomial::zero());
    }

    #[test]
    fn test_mul_constants() {
        let a = Polynomial::new([3]);
        let b = Polynomial::new([0, 0, 2]);
        assert_eq!(a * b, Polynomial::new([0, 0, 6]));
    }

    #[test]
    fn test_operands_are_not_mutated() {
        let a = Polynomial::new([1, 2]);
        let b = Polynomial::new([3, 4]);
        let _ = &a + &b;
        let _ = &a * &b;
        assert_eq!(a.coefficients(), &[1.0, 2.0]);
        assert_eq!(b.coefficients(), &[3.0, 4.0]);
    }
}
