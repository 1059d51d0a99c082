#[cfg(any(docsrs, feature = "std"))]
pub use std::error::Error;

#[cfg(all(not(feature = "std"), feature = "error_in_core"))]
pub use core::error::Error;

use num_traits::Float;

/// `10^exp` through whichever float backend is enabled.
#[inline]
pub fn pow10(exp: i32) -> f64 {
    Float::powi(10.0_f64, exp)
}

#[inline]
pub fn abs(value: f64) -> f64 {
    Float::abs(value)
}
