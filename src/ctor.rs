//! Constructors and rescaling — the single choke point where the 19-digit envelope invariant
//! is enforced.

use crate::bint;
use crate::decimal::{Decimal, MAX_PREC, MAX_SCALE};
use crate::error::{Error, Result};
use crate::fint::{self, MAX_FINT};
use num_bigint::BigInt;

/// Builds a `Decimal` from already-valid parts, checking but not adjusting anything.
pub fn new_safe(neg: bool, coef: u64, scale: u8) -> Result<Decimal> {
    if coef > MAX_FINT {
        return Err(Error::DecimalOverflow);
    }
    if scale > MAX_SCALE {
        return Err(Error::ScaleRange);
    }
    Ok(Decimal::new_unchecked(neg, coef, scale))
}

/// Builds a `Decimal` from a FINT coefficient, padding up to `min_scale` when asked and when
/// the envelope has room for it.
pub fn new_from_fint(neg: bool, coef: u64, scale: u8, min_scale: u8) -> Result<Decimal> {
    if coef > MAX_FINT {
        return Err(Error::DecimalOverflow);
    }
    if min_scale > MAX_SCALE || scale > MAX_SCALE {
        return Err(Error::ScaleRange);
    }
    let target = scale.max(min_scale);
    if target == scale {
        return Ok(Decimal::new_unchecked(neg, coef, scale));
    }
    let diff = (target - scale) as u32;
    match fint::lsh(coef, diff) {
        Some(padded) => Ok(Decimal::new_unchecked(neg, padded, target)),
        None => Err(Error::ScaleRange),
    }
}

/// Builds a `Decimal` from a BINT coefficient, rounding half-to-even down into the envelope
/// and reducing `scale` in lockstep. Fails if the resulting scale would undercut `min_scale`.
pub fn new_from_bint(neg: bool, coef: &BigInt, scale: u8, min_scale: u8) -> Result<Decimal> {
    if min_scale > MAX_SCALE {
        return Err(Error::ScaleRange);
    }

    let mut c = coef.clone();
    let mut s = scale as i64;

    loop {
        let digits = bint::prec(&c) as i64;
        let over_scale = (s - MAX_SCALE as i64).max(0);
        let over_digits = (digits - MAX_PREC as i64).max(0);
        let mut shift = over_scale.max(over_digits);
        if shift <= 0 {
            break;
        }
        if shift > s {
            shift = s;
        }
        if shift <= 0 {
            // scale is already zero and the magnitude still overflows 19 digits: genuine
            // overflow, no further rounding can rescue it.
            return Err(Error::DecimalOverflow);
        }
        c = bint::rsh_half_even(&c, shift as u64);
        s -= shift;
    }

    if s < min_scale as i64 {
        return Err(Error::ScaleRange);
    }

    let digits = c.to_string();
    let coef: u64 = digits.parse().map_err(|_| Error::DecimalOverflow)?;
    new_safe(neg, coef, s as u8)
}

/// Rescales `d` to exactly `new_scale`, zero-padding up or half-to-even rounding down.
///
/// Never fails: padding that would overflow the 19-digit envelope is silently clamped to the
/// largest scale the envelope can still hold, and `new_scale` itself is clamped to
/// `[0, MAX_SCALE]`.
pub fn rescale(d: &Decimal, new_scale: u8) -> Decimal {
    let new_scale = new_scale.min(MAX_SCALE);
    if new_scale == d.scale {
        return *d;
    }
    if new_scale > d.scale {
        let mut diff = (new_scale - d.scale) as u32;
        // Find the largest feasible pad within the FINT envelope; clamp down on overflow.
        loop {
            if let Some(padded) = fint::lsh(d.coef, diff) {
                return Decimal::new_unchecked(d.neg, padded, d.scale + diff as u8);
            }
            if diff == 0 {
                return *d;
            }
            diff -= 1;
        }
    } else {
        let diff = (d.scale - new_scale) as u32;
        let rounded = fint::rsh_half_even(d.coef, diff);
        Decimal::new_unchecked(d.neg, rounded, new_scale)
    }
}

/// Pads `d` up to at least `min_scale`, never reducing its current scale. Equivalent to
/// `rescale(d, min_scale.max(d.scale))`.
pub fn pad(d: &Decimal, min_scale: u8) -> Decimal {
    rescale(d, min_scale.max(d.scale).min(MAX_SCALE))
}
