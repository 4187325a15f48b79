pub mod error;
pub mod lagrange;
pub mod macros;
pub mod point;
pub mod poly;
pub mod prelude;
pub mod radix;
pub mod traits;

pub use num_bigint::BigInt;
