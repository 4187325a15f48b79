use num_bigint::BigInt;
use thiserror::Error;

pub mod radix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("base {0} is outside the supported range 2..=36")]
        UnsupportedBase(u32),
        #[error("digit string is empty")]
        Empty,
        #[error(
            "malformed digit {digit:?} at position {position} for base {base}"
        )]
        MalformedDigit {
            digit: char,
            position: usize,
            base: u32,
        },
    }
}

pub use radix::Error as RadixError;

/// Errors raised while evaluating an interpolating polynomial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InterpolationError {
    #[error("cannot interpolate through an empty point set")]
    EmptyBasis,
    #[error(
        "degenerate Lagrange basis at x = {x}: x-coordinates must be distinct"
    )]
    DegenerateBasis { x: i64 },
    #[error("interpolated value {numerator}/{denominator} is not an integer")]
    InexactResult {
        numerator: BigInt,
        denominator: BigInt,
    },
}
