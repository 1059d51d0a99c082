#![no_std]
//! Huge numbers in engineering notation.
//!
//! A [`HugeNum`] is a floating point mantissa in `[1, 1000)` paired with an
//! exponent that is always a multiple of three, so every value lines up with a
//! short-scale name: thousand, million, billion, all the way to
//! decicentillion (`10^333`).
//!
//! ```
//! use hugenum::HugeNum;
//!
//! let mut gold = HugeNum::new(750.0, 6);
//! gold += HugeNum::new(500.0, 6);
//! assert_eq!(gold.to_string(), "1.25 billion");
//! ```
#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either libm or the standard library must be included to use hugenum");

#[cfg(any(feature = "std", docsrs))]
extern crate std;

use core::{
    cmp::Ordering,
    fmt,
    iter::{Product, Sum},
    ops::*,
    str::FromStr,
};

use num_traits::{ConstOne, ConstZero, One, ToPrimitive, Zero};

mod shims;
use shims::*;

mod constants;
pub use constants::{
    MAX_EXPONENT, MAX_MAGNITUDE, MAX_MANTISSA, MAX_NAMED_EXPONENT, MIN_EXPONENT, TEN_CUBED,
};

mod names;
pub use names::{exponent_for_name, exponent_name, EXPONENT_NAMES};

mod parsing;
pub use parsing::FromStrError;

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)] // Normalized parts are unique, so derived equality is exact
/// A number `mantissa × 10^exponent` kept in engineering notation.
pub struct HugeNum {
    mantissa: f64,
    exponent: i32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
/// A scalar rejected by [`HugeNum::try_multiply_factor`] or [`HugeNum::try_divide`].
pub enum ScaleError {
    /// The factor was negative or NaN. Holds the rejected factor.
    NegativeFactor(f64),
    /// The divisor was zero, negative or NaN. Holds the rejected divisor.
    NonPositiveDivisor(f64),
}

impl HugeNum {
    pub const ZERO: Self = constants::ZERO;
    pub const ONE: Self = constants::ONE;
    /// The largest finite number, `MAX_MANTISSA × 10^MAX_EXPONENT`.
    pub const MAX: Self = constants::MAX;
    /// The most negative finite number.
    pub const MIN: Self = constants::MIN;

    /// Constructs a number from a raw mantissa and exponent, normalizing it.
    ///
    /// Neither part needs to be canonical: `HugeNum::new(1500.0, 1)` is `15 thousand`.
    /// Results past [`HugeNum::MAX`] saturate, results below `10^MIN_EXPONENT` become zero.
    pub fn new(mantissa: f64, exponent: i32) -> Self {
        Self::settle(mantissa, exponent.into())
    }

    #[inline]
    /// Constructs a number from its parts without normalizing.
    ///
    /// # Note
    /// The pair must already be canonical: `1 <= |mantissa| < 1000` and a multiple
    /// of three for the exponent, or `(0.0, 0)`.
    /// Anything else gives incorrect (although not undefined) behavior.
    pub const fn from_parts(mantissa: f64, exponent: i32) -> Self {
        Self { mantissa, exponent }
    }

    #[inline]
    pub const fn into_parts(self) -> (f64, i32) {
        (self.mantissa, self.exponent)
    }

    #[inline]
    pub const fn mantissa(&self) -> f64 {
        self.mantissa
    }

    #[inline]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Normalizes `mantissa × 10^exponent` against a widened exponent,
    /// saturating at [`HugeNum::MAX`] in magnitude.
    fn settle(mantissa: f64, exponent: i64) -> Self {
        Self::checked_settle(mantissa, exponent)
            .unwrap_or(if mantissa < 0.0 { Self::MIN } else { Self::MAX })
    }

    /// Normalizes `mantissa × 10^exponent`, or `None` if the exponent ends up
    /// past [`MAX_EXPONENT`]. Exponents below [`MIN_EXPONENT`] flush to zero.
    pub(crate) fn checked_settle(mantissa: f64, mut exponent: i64) -> Option<Self> {
        if mantissa == 0.0 {
            // Also folds -0 into 0
            return Some(Self::ZERO);
        }
        if !mantissa.is_finite() {
            let exponent = exponent.clamp(MIN_EXPONENT.into(), MAX_EXPONENT.into()) as i32;
            return Some(Self { mantissa, exponent });
        }
        // No finite f64 moves the exponent by more than this while normalizing.
        const SLACK: i64 = 400;
        if exponent > i64::from(MAX_EXPONENT) + SLACK { return None; }
        if exponent < i64::from(MIN_EXPONENT) - SLACK { return Some(Self::ZERO); }

        let sign = if mantissa < 0.0 { -1.0 } else { 1.0 };
        let mut magnitude = abs(mantissa);

        while magnitude >= TEN_CUBED {
            magnitude /= TEN_CUBED;
            exponent += 3;
        }
        while magnitude < 1.0 {
            magnitude *= TEN_CUBED;
            exponent -= 3;
        }

        // The magnitude is below 1000 here, so the shift can't overflow and
        // needs at most one more step down.
        let remainder = exponent.rem_euclid(3);
        if remainder != 0 {
            magnitude *= pow10(remainder as i32);
            exponent -= remainder;
        }
        while magnitude >= TEN_CUBED {
            magnitude /= TEN_CUBED;
            exponent += 3;
        }

        if exponent > i64::from(MAX_EXPONENT) { return None; }
        if exponent < i64::from(MIN_EXPONENT) { return Some(Self::ZERO); }
        Some(Self { mantissa: magnitude * sign, exponent: exponent as i32 })
    }

    /// Rescales this number onto `exponent`, which must not be below its own.
    /// Anything more than [`MAX_MAGNITUDE`] orders of magnitude down vanishes.
    fn align(&mut self, exponent: i32) {
        let diff = i64::from(exponent) - i64::from(self.exponent);
        if diff <= 0 { return; }
        if diff <= i64::from(MAX_MAGNITUDE) {
            self.mantissa /= pow10(diff as i32);
        } else {
            self.mantissa = 0.0;
        }
        self.exponent = exponent;
    }

    /// Aligns the smaller-exponent side of `self` and `other` onto the larger one,
    /// returning `other`'s mantissa at the shared exponent.
    fn align_with(&mut self, mut other: Self) -> f64 {
        if other.exponent < self.exponent {
            other.align(self.exponent);
        } else {
            self.align(other.exponent);
        }
        other.mantissa
    }

    /// Multiplies by a non-negative scalar.
    ///
    /// Negative and NaN factors are ignored, leaving the number unchanged.
    /// Use [`HugeNum::try_multiply_factor`] to find out about it.
    pub fn multiply_factor(&mut self, factor: f64) {
        let _ = self.try_multiply_factor(factor);
    }

    /// Multiplies by a non-negative scalar, or reports why it couldn't.
    ///
    /// # Errors
    /// Returns [`ScaleError::NegativeFactor`] for negative and NaN factors;
    /// the number is not touched.
    pub fn try_multiply_factor(&mut self, factor: f64) -> Result<(), ScaleError> {
        // Written so NaN fails the check too
        if !(factor >= 0.0) {
            return Err(ScaleError::NegativeFactor(factor));
        }
        *self *= Self::new(factor, 0);
        Ok(())
    }

    /// Divides by a strictly positive scalar.
    ///
    /// Zero, negative and NaN divisors are ignored, leaving the number unchanged.
    /// Use [`HugeNum::try_divide`] to find out about it.
    pub fn divide(&mut self, divisor: f64) {
        let _ = self.try_divide(divisor);
    }

    /// Divides by a strictly positive scalar, or reports why it couldn't.
    ///
    /// # Errors
    /// Returns [`ScaleError::NonPositiveDivisor`] for zero, negative and NaN
    /// divisors; the number is not touched.
    pub fn try_divide(&mut self, divisor: f64) -> Result<(), ScaleError> {
        if !(divisor > 0.0) {
            return Err(ScaleError::NonPositiveDivisor(divisor));
        }
        let divisor = Self::new(divisor, 0);
        *self = Self::settle(
            self.mantissa / divisor.mantissa,
            i64::from(self.exponent) - i64::from(divisor.exponent),
        );
        Ok(())
    }

    /// Multiplies by `10^n`. Exact for every `n`, including negative ones,
    /// as long as the result stays within [`MIN_EXPONENT`]..=[`MAX_EXPONENT`].
    pub fn pow_ten(&mut self, n: i32) {
        *self = Self::settle(self.mantissa, i64::from(self.exponent) + i64::from(n));
    }

    /// The short-scale name of this number's exponent, or `""` if it has none.
    #[inline]
    pub fn exponent_name(&self) -> &'static str {
        names::exponent_name(self.exponent)
    }

    #[inline]
    pub fn negate(&mut self) {
        if self.mantissa != 0.0 {
            self.mantissa = -self.mantissa;
        }
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self { mantissa: abs(self.mantissa), ..self }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.mantissa > 0.0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.mantissa < 0.0
    }

    #[inline]
    pub const fn is_finite(&self) -> bool {
        self.mantissa.is_finite()
    }

    /// Materializes the value as a plain `f64`, overflowing to infinity past `f64::MAX`.
    pub fn to_f64(&self) -> f64 {
        if self.mantissa == 0.0 || !self.mantissa.is_finite() { return self.mantissa; }
        // Split the scaling so exponents near the subnormal range don't
        // underflow to zero before the mantissa is applied.
        self.mantissa * pow10(self.exponent / 2) * pow10(self.exponent - self.exponent / 2)
    }
}

impl Default for HugeNum {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for HugeNum {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value, 0)
    }
}

impl From<HugeNum> for f64 {
    #[inline]
    fn from(value: HugeNum) -> Self {
        value.to_f64()
    }
}

impl ToPrimitive for HugeNum {
    fn to_f64(&self) -> Option<f64> {
        Some(self.to_f64())
    }

    fn to_i64(&self) -> Option<i64> {
        self.to_f64().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_negative() { return None; }
        self.to_f64().to_u64()
    }
}

impl Zero for HugeNum {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.is_zero()
    }

    fn set_zero(&mut self) {
        *self = Self::ZERO;
    }
}

impl ConstZero for HugeNum {
    const ZERO: Self = constants::ZERO;
}

impl One for HugeNum {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    fn set_one(&mut self) {
        *self = Self::ONE;
    }
}

impl ConstOne for HugeNum {
    const ONE: Self = constants::ONE;
}

impl PartialOrd for HugeNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.mantissa.is_nan() || other.mantissa.is_nan() { return None; }

        let sign = |num: &Self| num.mantissa.partial_cmp(&0.0);
        match sign(self)?.cmp(&sign(other)?) {
            Ordering::Equal => {},
            res => return Some(res),
        }
        if self.is_zero() { return Some(Ordering::Equal); }

        let res = match self.exponent.cmp(&other.exponent) {
            Ordering::Equal => abs(self.mantissa).partial_cmp(&abs(other.mantissa))?,
            res => res,
        };
        Some(if self.is_negative() { res.reverse() } else { res })
    }
}

impl Neg for HugeNum {
    type Output = HugeNum;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

macro_rules! forward_binop_impl {
    ($($impl_assign_name: ident: $assign_name: ident, $impl_name: ident: $name: ident);*) => {$(
        impl $impl_name for HugeNum {
            type Output = HugeNum;

            fn $name(mut self, rhs: Self) -> Self {
                self.$assign_name(rhs);
                self
            }
        }

        impl $impl_assign_name<&HugeNum> for HugeNum {
            fn $assign_name(&mut self, rhs: &HugeNum) {
                self.$assign_name(*rhs)
            }
        }

        impl $impl_name<&HugeNum> for HugeNum {
            type Output = HugeNum;

            fn $name(mut self, rhs: &HugeNum) -> Self {
                self.$assign_name(*rhs);
                self
            }
        }
    )*};
}

impl AddAssign for HugeNum {
    fn add_assign(&mut self, other: Self) {
        let other = self.align_with(other);
        *self = Self::settle(self.mantissa + other, self.exponent.into());
    }
}

impl SubAssign for HugeNum {
    fn sub_assign(&mut self, other: Self) {
        let other = self.align_with(other);
        *self = Self::settle(self.mantissa - other, self.exponent.into());
    }
}

impl MulAssign for HugeNum {
    fn mul_assign(&mut self, other: Self) {
        *self = Self::settle(
            self.mantissa * other.mantissa,
            i64::from(self.exponent) + i64::from(other.exponent),
        );
    }
}

forward_binop_impl! {
    AddAssign: add_assign, Add: add;
    SubAssign: sub_assign, Sub: sub;
    MulAssign: mul_assign, Mul: mul
}

impl Sum for HugeNum {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, num| acc + num)
    }
}

impl<'a> Sum<&'a HugeNum> for HugeNum {
    fn sum<I: Iterator<Item = &'a HugeNum>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for HugeNum {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, num| acc * num)
    }
}

impl<'a> Product<&'a HugeNum> for HugeNum {
    fn product<I: Iterator<Item = &'a HugeNum>>(iter: I) -> Self {
        iter.copied().product()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HugeNum {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "HugeNum")]
        struct Parts {
            mantissa: f64,
            exponent: i32,
        }

        let Parts { mantissa, exponent } = <Parts as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::new(mantissa, exponent))
    }
}

impl fmt::Display for HugeNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.exponent_name();
        if name.is_empty() {
            let precision = f.precision().unwrap_or(3);
            return write!(f, "{:.*}", precision, self.mantissa);
        }
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {name}", precision, self.mantissa),
            None => write!(f, "{} {name}", self.mantissa),
        }
    }
}

impl fmt::LowerExp for HugeNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}e{}", precision, self.mantissa, self.exponent),
            None => write!(f, "{}e{}", self.mantissa, self.exponent),
        }
    }
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeFactor(factor) =>
                write!(f, "can only multiply by non-negative factors (got {factor})"),
            Self::NonPositiveDivisor(divisor) =>
                write!(f, "can only divide by positive divisors (got {divisor})"),
        }
    }
}

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput(index) =>
                write!(f, "malformed input at character {index}"),
            Self::UnknownMagnitude(index) =>
                write!(f, "unknown magnitude name at character {index}"),
            Self::ExponentOverflow(index) =>
                write!(f, "exponent out of range at character {index}"),
        }
    }
}

#[cfg(any(feature = "std", feature = "error_in_core"))]
impl Error for ScaleError {}

#[cfg(any(feature = "std", feature = "error_in_core"))]
impl Error for FromStrError {}

impl FromStr for HugeNum {
    type Err = FromStrError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        parsing::parse_hugenum(&mut parsing::ParseHead::new(string))
    }
}
