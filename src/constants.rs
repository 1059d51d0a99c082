use crate::HugeNum;

/// Largest exponent difference two operands may have before the smaller one
/// is dropped during addition or subtraction.
pub const MAX_MAGNITUDE: i32 = 12;

/// One step of engineering notation, `10^3`.
pub const TEN_CUBED: f64 = 1e3;

/// Largest exponent with a name in the magnitude table.
pub const MAX_NAMED_EXPONENT: i32 = 333;

pub(crate) const ZERO: HugeNum = HugeNum::from_parts(0.0, 0);
pub(crate) const ONE: HugeNum = HugeNum::from_parts(1.0, 0);

/// Largest exponent a normalized number can carry, the biggest multiple of
/// three that fits in an `i32`.
pub const MAX_EXPONENT: i32 = i32::MAX - i32::MAX % 3;

/// Smallest exponent a normalized number can carry. Anything smaller flushes to zero.
pub const MIN_EXPONENT: i32 = -MAX_EXPONENT;

/// Largest `f64` below [`TEN_CUBED`].
pub const MAX_MANTISSA: f64 = f64::from_bits(TEN_CUBED.to_bits() - 1);

pub(crate) const MAX: HugeNum = HugeNum::from_parts(MAX_MANTISSA, MAX_EXPONENT);
pub(crate) const MIN: HugeNum = HugeNum::from_parts(-MAX_MANTISSA, MAX_EXPONENT);
