//! Exact Lagrange interpolation over unbounded integers.
//!
//! Every basis term is carried as a numerator/denominator pair and folded into
//! a single running fraction, so the only division happens once, at the very
//! end. Nothing is ever rounded to a fixed-width or floating-point value.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::InterpolationError;
use crate::traits::Sample;

/// How the final `numerator / denominator` division is carried out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DivisionMode {
    /// Truncate toward zero without checking the remainder. Callers promise
    /// the samples come from a polynomial with integer coefficients.
    #[default]
    Truncating,
    /// Reject a non-zero remainder with [`InterpolationError::InexactResult`].
    Exact,
}

/// Precomputed Lagrange basis for a fixed set of samples.
///
/// The basis denominators `Π_{i≠j}(x_j − x_i)` depend only on the sample
/// x-coordinates, so they are computed once and reused for every target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LagrangeBasis {
    xs: Vec<i64>,
    ys: Vec<BigInt>,
    denominators: Vec<BigInt>,
}

impl LagrangeBasis {
    /// Build the basis, rejecting empty input and repeated x-coordinates.
    pub fn new<S: Sample>(points: &[S]) -> Result<Self, InterpolationError> {
        if points.is_empty() {
            return Err(InterpolationError::EmptyBasis);
        }

        let xs: Vec<i64> = points.iter().map(Sample::x).collect();
        let ys: Vec<BigInt> = points.iter().map(|p| p.y().clone()).collect();

        let denominators = xs
            .iter()
            .enumerate()
            .map(|(j, &x_j)| {
                let den = xs
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != j)
                    .fold(BigInt::one(), |acc, (_, &x_i)| {
                        acc * (BigInt::from(x_j) - x_i)
                    });
                if den.is_zero() {
                    Err(InterpolationError::DegenerateBasis { x: x_j })
                } else {
                    Ok(den)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LagrangeBasis {
            xs,
            ys,
            denominators,
        })
    }

    /// Number of samples defining the basis (degree + 1).
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The sample x-coordinates, in input order.
    pub fn xs(&self) -> &[i64] {
        &self.xs
    }

    /// Evaluate the interpolating polynomial at `target_x` with truncating
    /// division.
    pub fn evaluate(
        &self,
        target_x: i64,
    ) -> Result<BigInt, InterpolationError> {
        self.evaluate_with(target_x, DivisionMode::Truncating)
    }

    /// Evaluate at `target_x` using the given division mode.
    pub fn evaluate_with(
        &self,
        target_x: i64,
        mode: DivisionMode,
    ) -> Result<BigInt, InterpolationError> {
        let target = BigInt::from(target_x);
        let mut acc_num = BigInt::zero();
        let mut acc_den = BigInt::one();

        for (j, (y_j, den_j)) in
            self.ys.iter().zip(&self.denominators).enumerate()
        {
            let num_j = self
                .xs
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != j)
                .fold(y_j.clone(), |acc, (_, &x_i)| acc * (&target - x_i));

            acc_num = acc_num * den_j + num_j * &acc_den;
            acc_den *= den_j;
        }

        finish_division(acc_num, acc_den, mode)
    }

    /// The polynomial's value at `x = 0`.
    pub fn constant_term(
        &self,
        mode: DivisionMode,
    ) -> Result<BigInt, InterpolationError> {
        self.evaluate_with(0, mode)
    }
}

fn finish_division(
    numerator: BigInt,
    denominator: BigInt,
    mode: DivisionMode,
) -> Result<BigInt, InterpolationError> {
    if mode == DivisionMode::Exact && !(&numerator % &denominator).is_zero() {
        return Err(InterpolationError::InexactResult {
            numerator,
            denominator,
        });
    }
    Ok(numerator / denominator)
}

/// Evaluate the unique polynomial of degree `< points.len()` through `points`
/// at `target_x`.
///
/// ```
/// use math::lagrange::evaluate;
/// use num_bigint::BigInt;
///
/// // y = 3x + 2
/// let points = [(1i64, BigInt::from(5)), (2, BigInt::from(8))];
/// assert_eq!(evaluate(&points, 0).unwrap(), BigInt::from(2));
/// assert_eq!(evaluate(&points, 10).unwrap(), BigInt::from(32));
/// ```
pub fn evaluate<S: Sample>(
    points: &[S],
    target_x: i64,
) -> Result<BigInt, InterpolationError> {
    evaluate_with(points, target_x, DivisionMode::Truncating)
}

/// [`evaluate`] with an explicit division mode.
pub fn evaluate_with<S: Sample>(
    points: &[S],
    target_x: i64,
    mode: DivisionMode,
) -> Result<BigInt, InterpolationError> {
    LagrangeBasis::new(points)?.evaluate_with(target_x, mode)
}

/// Lagrange interpolate over `points` and return f(0).
pub fn interpolate_constant_at_zero<S: Sample>(
    points: &[S],
) -> Result<BigInt, InterpolationError> {
    evaluate(points, 0)
}
