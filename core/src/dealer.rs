//! Share generation for fixtures, benchmarks and demos.

use math::point::Point;
use math::poly::IntegerPolynomial;
use num_bigint::BigInt;
use rand::Rng;

use crate::error::{RecoveryError, RecoveryResult};
use crate::instance::Instance;

/// Largest offset [`corrupt`] adds to a share.
pub const MAX_CORRUPTION: u64 = 1_000_000;

/// Hands out shares of a secret on a random polynomial of degree `k - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dealer {
    threshold: usize,
    polynomial: IntegerPolynomial,
}

impl Dealer {
    /// Draw `threshold - 1` positive random coefficients behind `secret`.
    pub fn new<R: Rng + ?Sized>(
        secret: BigInt,
        threshold: usize,
        rng: &mut R,
    ) -> RecoveryResult<Self> {
        if threshold == 0 {
            return Err(RecoveryError::InvalidThreshold(threshold));
        }

        let rest: Vec<BigInt> = (1..threshold)
            .map(|_| BigInt::from(rng.random_range(1..=u64::MAX)))
            .collect();
        Ok(Dealer {
            threshold,
            polynomial: IntegerPolynomial::with_constant_term(secret, rest),
        })
    }

    /// Deal from a fixed polynomial; the threshold is its coefficient count.
    pub fn from_polynomial(polynomial: IntegerPolynomial) -> Self {
        Dealer {
            threshold: polynomial.coefficients().len().max(1),
            polynomial,
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn polynomial(&self) -> &IntegerPolynomial {
        &self.polynomial
    }

    pub fn secret(&self) -> BigInt {
        self.polynomial.constant_term()
    }

    /// One share per x-coordinate.
    pub fn deal(&self, xs: impl IntoIterator<Item = i64>) -> Vec<Point> {
        xs.into_iter()
            .map(|x| Point::new(x, self.polynomial.evaluate(x)))
            .collect()
    }

    /// An instance with shares at `x = 1..=count`.
    pub fn deal_instance(&self, count: usize) -> Instance {
        let points = self.deal(1..=count as i64);
        Instance::new(self.threshold, points).with_declared_count(count)
    }
}

/// Push the shares at `indices` off the polynomial by a random non-zero
/// amount. Out-of-range indices are ignored.
pub fn corrupt<R: Rng + ?Sized>(
    points: &mut [Point],
    indices: &[usize],
    rng: &mut R,
) {
    for &index in indices {
        if let Some(point) = points.get_mut(index) {
            point.y += rng.random_range(1..=MAX_CORRUPTION);
        }
    }
}
