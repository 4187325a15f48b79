pub use crate::{big, points, poly};
pub use crate::{
    error::{InterpolationError, RadixError},
    lagrange::{DivisionMode, LagrangeBasis},
    point::Point,
    poly::IntegerPolynomial,
    traits::Sample,
};
pub use num_bigint::BigInt;
