//! Tolerances for geometric comparisons
//!
//! Membership and parallelism tests never compare floats with `==`. Each
//! comparison goes through one of the helpers below so the whole core agrees
//! on what "equal" and "zero" mean.

/// Relative tolerance for coordinates, ratios and dot products.
pub const CONFUSION: f64 = 1.0e-9;

/// Returns true when `value` is indistinguishable from zero next to quantities of size `scale`.
#[inline]
pub fn is_negligible(value: f64, scale: f64) -> bool {
    value.abs() <= CONFUSION * scale
}

/// Returns true when `value` lies in the closed interval spanned by `a` and `b`.
#[inline]
pub fn in_closed_range(value: f64, a: f64, b: f64) -> bool {
    let (min, max) = if a > b { (b, a) } else { (a, b) };
    value >= min - tolerance(value, min) && value <= max + tolerance(value, max)
}

#[inline]
fn tolerance(a: f64, b: f64) -> f64 {
    CONFUSION * 1.0_f64.max(a.abs()).max(b.abs())
}
