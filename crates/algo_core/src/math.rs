//! Fixed-point helpers for resource and damage arithmetic.
//!
//! Resources arrive from the engine as decimals (e.g. 7.5 mobility points);
//! keeping them in fixed-point makes lane scoring and affordability exact
//! and reproducible across runs.

use fixed::types::I32F32;

/// Fixed-point number type for all planning math.
///
/// Uses 32 bits for integer part and 32 bits for fractional part.
pub type Fixed = I32F32;

/// How many whole units of `cost` fit into `available`.
///
/// A zero (or negative) cost never limits the count, so it yields
/// `u32::MAX`. Negative availability yields zero.
#[must_use]
pub fn whole_units(available: Fixed, cost: Fixed) -> u32 {
    if cost <= Fixed::ZERO {
        return u32::MAX;
    }
    if available <= Fixed::ZERO {
        return 0;
    }
    (available / cost).floor().saturating_to_num::<u32>()
}

/// Convert a wire decimal into [`Fixed`], saturating at the type bounds.
#[must_use]
pub fn fixed_from_f64(value: f64) -> Fixed {
    if value.is_nan() {
        return Fixed::ZERO;
    }
    Fixed::saturating_from_num(value)
}
