use std::fmt;

use num_bigint::BigInt;

use crate::traits::Sample;

/// A single share: an x-coordinate and the polynomial's claimed value there.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: i64, y: impl Into<BigInt>) -> Self {
        Point { x, y: y.into() }
    }
}

impl Sample for Point {
    fn x(&self) -> i64 {
        self.x
    }

    fn y(&self) -> &BigInt {
        &self.y
    }
}

impl From<(i64, BigInt)> for Point {
    fn from((x, y): (i64, BigInt)) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
