//! Decoding of digit strings written in bases 2 through 36.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::RadixError;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;
/// Largest supported base (`0-9` followed by `a-z`).
pub const MAX_BASE: u32 = 36;

/// Numeric value of a single digit character, letters case-insensitive.
///
/// Returns `None` for anything that is not `0-9`, `a-z` or `A-Z`.
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Decode `digits` in `base` into an unbounded integer.
///
/// Digits are consumed from the least significant end, accumulating
/// `digit * base^position` without ever narrowing to a machine integer.
///
/// ```
/// use math::radix::decode;
/// use num_bigint::BigInt;
///
/// assert_eq!(decode("ff", 16).unwrap(), BigInt::from(255));
/// assert_eq!(decode("111", 2).unwrap(), BigInt::from(7));
/// ```
pub fn decode(digits: &str, base: u32) -> Result<BigInt, RadixError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RadixError::UnsupportedBase(base));
    }
    if digits.is_empty() {
        return Err(RadixError::Empty);
    }

    let len = digits.chars().count();
    let big_base = BigInt::from(base);
    let mut result = BigInt::zero();
    let mut power = BigInt::one();

    for (offset, c) in digits.chars().rev().enumerate() {
        let digit = digit_value(c).filter(|&d| d < base).ok_or_else(|| {
            // positions are reported left to right, as written
            RadixError::MalformedDigit {
                digit: c,
                position: len - 1 - offset,
                base,
            }
        })?;
        result += &power * digit;
        power *= &big_base;
    }

    Ok(result)
}
