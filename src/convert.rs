//! Conversions to and from plain Rust numeric types.
//!
//! Integer conversions split a value into a signed whole part and a signed fraction part at a
//! caller-chosen fractional scale, rounding half-to-even when the requested scale is coarser
//! than the value's own. Float conversions round-trip through the canonical text form rather
//! than reinterpreting bit patterns, so the result always matches what a human reading the
//! printed value would expect.

use crate::ctor;
use crate::decimal::Decimal;
use crate::error::{Error, Result};
use crate::fint;
use crate::format::canonical_text;
use crate::parse;

/// Splits `d` into `(whole, fraction, scale)` at its own natural scale. Exact: no rounding
/// is applied, since the fraction is read out at the scale the value already carries.
pub fn to_i64_parts(d: &Decimal) -> Result<(i64, i64, u8)> {
    let (whole, fraction) = split_at_scale(d, d.scale())?;
    Ok((whole, fraction, d.scale()))
}

/// Splits `d` into `(whole, fraction)` at `fraction_scale`, rounding half-to-even first if
/// `fraction_scale` is coarser than `d`'s own scale. A tie can carry into the whole part:
/// `0.5` becomes `(0, 5)` at `fraction_scale == 1` but `(0, 0)` — the `0.5` rounds down to even
/// — at `fraction_scale == 0`.
pub fn to_i64_parts_at_scale(d: &Decimal, fraction_scale: u8) -> Result<(i64, i64)> {
    let rescaled = ctor::rescale(d, fraction_scale.min(crate::decimal::MAX_SCALE));
    split_at_scale(&rescaled, rescaled.scale())
}

fn split_at_scale(d: &Decimal, scale: u8) -> Result<(i64, i64)> {
    let divisor = fint::POW10[scale as usize];
    let whole_mag = d.coefficient() / divisor;
    let frac_mag = d.coefficient() % divisor;
    let whole_mag: i64 = whole_mag.try_into().map_err(|_| Error::ConversionRange)?;
    let frac_mag: i64 = frac_mag.try_into().map_err(|_| Error::ConversionRange)?;
    let sign: i64 = if d.is_negative() { -1 } else { 1 };
    Ok((sign * whole_mag, sign * frac_mag))
}

/// Builds a `Decimal` from a whole part, a fraction part and the scale the fraction is given
/// at. `whole` and `fraction` must carry the same sign (or either may be zero); `fraction`'s
/// magnitude must be smaller than `10^scale`.
pub fn from_i64_parts(whole: i64, fraction: i64, scale: u8) -> Result<Decimal> {
    if scale > crate::decimal::MAX_SCALE {
        return Err(Error::ScaleRange);
    }
    let divisor = fint::POW10[scale as usize];
    if fraction.unsigned_abs() >= divisor {
        return Err(Error::ConversionRange);
    }
    let neg = whole < 0 || fraction < 0;
    let whole_mag = whole.unsigned_abs();
    let frac_mag = fraction.unsigned_abs();
    let scaled_whole = whole_mag.checked_mul(divisor).ok_or(Error::DecimalOverflow)?;
    let coef = scaled_whole.checked_add(frac_mag).ok_or(Error::DecimalOverflow)?;
    ctor::new_safe(neg, coef, scale)
}

/// Converts `d` to the nearest `f64`, via its canonical text form. Never fails: every
/// `Decimal` value has a finite canonical text representation that parses back as a float.
pub fn to_f64(d: &Decimal) -> f64 {
    canonical_text(d).parse().unwrap_or(f64::NAN)
}

/// Converts a finite `f64` to a `Decimal` via its default text rendering. Rejects `NaN` and
/// infinities, and anything whose text form doesn't fit the 19-digit envelope even after
/// rounding.
pub fn from_f64(x: f64) -> Result<Decimal> {
    if !x.is_finite() {
        return Err(Error::ConversionRange);
    }
    parse::parse(&format!("{x}"))
}
