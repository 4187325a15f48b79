use num_bigint::BigInt;

/// Abstract source of interpolation samples.
///
/// Anything exposing an integer x-coordinate and an unbounded y-value can be
/// fed to the Lagrange evaluator without first being copied into a `Point`.
pub trait Sample {
    /// The x-coordinate of this sample.
    fn x(&self) -> i64;

    /// The observed value at [`Sample::x`].
    fn y(&self) -> &BigInt;
}

impl Sample for (i64, BigInt) {
    fn x(&self) -> i64 {
        self.0
    }

    fn y(&self) -> &BigInt {
        &self.1
    }
}

impl<S: Sample + ?Sized> Sample for &S {
    fn x(&self) -> i64 {
        (**self).x()
    }

    fn y(&self) -> &BigInt {
        (**self).y()
    }
}
