//! Comparison, sign operations, and clamping.

use crate::bint;
use crate::decimal::Decimal;
use crate::error::{Error, Result};
use crate::fint;
use core::cmp::Ordering;
use num_bigint::BigInt;

/// Ordering of the two values' magnitudes, ignoring sign. Aligns scales on the FINT path first,
/// falling back to BINT only if the up-shift needed to align them would overflow.
fn magnitude_ordering(a: &Decimal, b: &Decimal) -> Ordering {
    if a.scale == b.scale {
        return a.coef.cmp(&b.coef);
    }
    if a.scale < b.scale {
        let diff = (b.scale - a.scale) as u32;
        match fint::lsh(a.coef, diff) {
            Some(av) => av.cmp(&b.coef),
            None => {
                let av = BigInt::from(a.coef) * bint::pow10(diff as u64);
                av.cmp(&BigInt::from(b.coef))
            }
        }
    } else {
        let diff = (a.scale - b.scale) as u32;
        match fint::lsh(b.coef, diff) {
            Some(bv) => a.coef.cmp(&bv),
            None => {
                let bv = BigInt::from(b.coef) * bint::pow10(diff as u64);
                BigInt::from(a.coef).cmp(&bv)
            }
        }
    }
}

/// Numeric comparison: `-1`, `0` or `1`. Values with equal magnitude but different scales
/// (`1.2` vs `1.20`) compare equal here — use [`cmp_total`] when scale must break the tie.
pub fn compare(a: &Decimal, b: &Decimal) -> i32 {
    let ord = match (a.is_zero(), b.is_zero()) {
        (true, true) => Ordering::Equal,
        (true, false) => {
            if b.neg {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (false, true) => {
            if a.neg {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        (false, false) => {
            if a.neg != b.neg {
                if a.neg {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            } else {
                let mag = magnitude_ordering(a, b);
                if a.neg {
                    mag.reverse()
                } else {
                    mag
                }
            }
        }
    };
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// A total order over `Decimal` that treats distinct scales as distinct even when the
/// represented values are numerically equal: `1.2 < 1.20` here, though `compare` calls them
/// equal. Useful for deterministic sorting and for the crate's own round-trip tests.
pub fn cmp_total(a: &Decimal, b: &Decimal) -> Ordering {
    match compare(a, b) {
        c if c < 0 => Ordering::Less,
        c if c > 0 => Ordering::Greater,
        _ => a.scale.cmp(&b.scale),
    }
}

/// `-d`.
pub fn neg(d: &Decimal) -> Decimal {
    Decimal::new_unchecked(!d.neg, d.coef, d.scale)
}

/// `|d|`.
pub fn abs(d: &Decimal) -> Decimal {
    Decimal::new_unchecked(false, d.coef, d.scale)
}

/// Clamps `d` into `[min, max]`, returning the representation (including scale) of whichever
/// bound won, or `d` itself unchanged if it was already within range.
pub fn clamp(d: &Decimal, min: &Decimal, max: &Decimal) -> Result<Decimal> {
    if compare(min, max) > 0 {
        return Err(Error::ClampBounds);
    }
    if compare(d, min) < 0 {
        Ok(*min)
    } else if compare(d, max) > 0 {
        Ok(*max)
    } else {
        Ok(*d)
    }
}

/// The smaller of `a` and `b`, keeping that argument's own representation. Ties favour `a`.
pub fn min(a: &Decimal, b: &Decimal) -> Decimal {
    if compare(b, a) < 0 {
        *b
    } else {
        *a
    }
}

/// The larger of `a` and `b`, keeping that argument's own representation. Ties favour `a`.
pub fn max(a: &Decimal, b: &Decimal) -> Decimal {
    if compare(b, a) > 0 {
        *b
    } else {
        *a
    }
}
