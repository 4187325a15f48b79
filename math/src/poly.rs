//! Dense polynomials with unbounded integer coefficients.
//!
//! Only what share generation and verification need: construction and
//! evaluation. Interpolation lives in [`crate::lagrange`].

use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// A polynomial `c_0 + c_1 x + ... + c_d x^d` over the integers.
///
/// Coefficients are stored lowest degree first; trailing zeros are trimmed so
/// two equal polynomials always compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntegerPolynomial {
    coefficients: Vec<BigInt>,
}

impl IntegerPolynomial {
    pub fn new(mut coefficients: Vec<BigInt>) -> Self {
        while coefficients.last().is_some_and(Zero::is_zero) {
            coefficients.pop();
        }
        IntegerPolynomial { coefficients }
    }

    pub fn zero() -> Self {
        IntegerPolynomial::default()
    }

    /// Build a polynomial whose constant term is `secret`, followed by the
    /// higher-degree coefficients in `rest`.
    pub fn with_constant_term(
        secret: BigInt,
        rest: impl IntoIterator<Item = BigInt>,
    ) -> Self {
        Self::new(std::iter::once(secret).chain(rest).collect())
    }

    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Degree of the polynomial, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The value at `x = 0`.
    pub fn constant_term(&self) -> BigInt {
        self.coefficients.first().cloned().unwrap_or_default()
    }

    /// Evaluate at `x` with Horner's rule.
    pub fn evaluate(&self, x: i64) -> BigInt {
        let x = BigInt::from(x);
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, coeff| acc * &x + coeff)
    }
}

impl From<Vec<BigInt>> for IntegerPolynomial {
    fn from(coefficients: Vec<BigInt>) -> Self {
        IntegerPolynomial::new(coefficients)
    }
}

impl From<Vec<i64>> for IntegerPolynomial {
    fn from(coefficients: Vec<i64>) -> Self {
        IntegerPolynomial::new(
            coefficients.into_iter().map(BigInt::from).collect(),
        )
    }
}

impl fmt::Display for IntegerPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self
            .coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .peekable();

        if terms.peek().is_none() {
            return write!(f, "0");
        }

        for (index, (power, coeff)) in terms.enumerate() {
            let sign = if coeff.is_negative() { "-" } else { "+" };
            match index {
                0 if coeff.is_negative() => write!(f, "-")?,
                0 => {}
                _ => write!(f, " {sign} ")?,
            }
            let magnitude = coeff.abs();
            match power {
                0 => write!(f, "{magnitude}")?,
                1 => write!(f, "{magnitude}x")?,
                _ => write!(f, "{magnitude}x^{power}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly;

    #[test]
    fn trailing_zeros_are_trimmed() {
        let p: IntegerPolynomial = vec![1i64, 2, 0, 0].into();
        assert_eq!(p.coefficients().len(), 2);
        assert_eq!(p.degree(), Some(1));
        assert_eq!(p, poly![1, 2]);
    }

    #[test]
    fn zero_polynomial_has_no_degree() {
        let p = IntegerPolynomial::new(vec![BigInt::zero(); 3]);
        assert!(p.is_zero());
        assert_eq!(p.degree(), None);
        assert_eq!(p.evaluate(17), BigInt::zero());
        assert_eq!(p.constant_term(), BigInt::zero());
    }

    #[test]
    fn horner_evaluation_matches_manual_expansion() {
        // 5 + 3x + 2x^2 + 4x^3 at x = 7
        let p = poly![5, 3, 2, 4];
        let manual = 5 + 7 * (3 + 7 * (2 + 7 * 4));
        assert_eq!(p.evaluate(7), BigInt::from(manual));
        assert_eq!(p.evaluate(0), BigInt::from(5));
        assert_eq!(p.evaluate(-1), BigInt::from(5 - 3 + 2 - 4));
    }

    #[test]
    fn evaluation_does_not_overflow() {
        let p = poly![0, 0, 1];
        let expected = BigInt::from(i64::MAX) * BigInt::from(i64::MAX);
        assert_eq!(p.evaluate(i64::MAX), expected);
    }

    #[test]
    fn constant_term_is_the_secret() {
        let secret = BigInt::from(10).pow(40);
        let p = IntegerPolynomial::with_constant_term(
            secret.clone(),
            [BigInt::from(3), BigInt::from(-8)],
        );
        assert_eq!(p.constant_term(), secret);
        assert_eq!(p.evaluate(0), secret);
        assert_eq!(p.degree(), Some(2));
    }

    #[test]
    fn display_renders_signed_terms() {
        assert_eq!(poly![2, 0, 1].to_string(), "2 + 1x^2");
        assert_eq!(poly![-2, 3, -1].to_string(), "-2 + 3x - 1x^2");
        assert_eq!(poly![0, -5].to_string(), "-5x");
        assert_eq!(IntegerPolynomial::zero().to_string(), "0");
    }
}
