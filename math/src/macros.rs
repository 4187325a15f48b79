//! Shared macros for constructing core math primitives.
//!
//! These macros delegate to the types they create, which keeps test fixtures
//! concise and avoids duplicating builder logic across the workspace.

/// Simplifies constructing [`BigInt`](num_bigint::BigInt)s.
///
/// See [`BigInt::from`](num_bigint::BigInt::from) for supported types.
///
/// ```
/// use math::prelude::*;
///
/// let a = big!(42);
/// assert_eq!(a, BigInt::from(42));
/// ```
#[macro_export]
macro_rules! big {
    ($value:expr) => {
        $crate::BigInt::from($value)
    };
}

/// Create a [`Vec`] of [`Point`](crate::point::Point)s from `(x, y)` pairs.
///
/// ```
/// use math::prelude::*;
///
/// let pts = points![(1, 5), (2, 8)];
/// assert_eq!(pts, vec![Point::new(1, 5), Point::new(2, 8)]);
/// ```
#[macro_export]
macro_rules! points {
    () => {
        ::std::vec::Vec::<$crate::point::Point>::new()
    };
    ($(($x:expr, $y:expr)),+ $(,)?) => {
        vec![$($crate::point::Point::new($x, $crate::big!($y))),+]
    };
}

/// Construct an [`IntegerPolynomial`](crate::poly::IntegerPolynomial) from
/// coefficients, lowest degree first.
///
/// ```
/// use math::prelude::*;
///
/// let p = poly![2, 0, 1];
/// assert_eq!(p.evaluate(3), big!(11));
/// ```
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::poly::IntegerPolynomial::zero()
    }};
    ($($coeff:expr),+ $(,)?) => {{
        $crate::poly::IntegerPolynomial::new(vec![$($crate::big!($coeff)),+])
    }};
}
