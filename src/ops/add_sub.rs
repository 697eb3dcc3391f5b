//! Addition, subtraction and subtract-absolute.

use crate::bint;
use crate::cmp::abs;
use crate::ctor;
use crate::decimal::Decimal;
use crate::error::Result;
use crate::fint;
use core::cmp::Ordering;
use num_bigint::BigInt;
use num_traits::Signed;

fn aligned_fint(d: &Decimal, e: &Decimal, scale: u8) -> Option<(u64, u64)> {
    let da = fint::lsh(d.coef, (scale - d.scale) as u32)?;
    let ea = fint::lsh(e.coef, (scale - e.scale) as u32)?;
    Some((da, ea))
}

fn aligned_bint(d: &Decimal, e: &Decimal, scale: u8) -> (BigInt, BigInt) {
    let da = BigInt::from(d.coef) * bint::pow10((scale - d.scale) as u64);
    let ea = BigInt::from(e.coef) * bint::pow10((scale - e.scale) as u64);
    (da, ea)
}

/// `d + e`, rounding into the envelope at the natural (smallest lossless) scale.
pub fn add(d: &Decimal, e: &Decimal) -> Result<Decimal> {
    add_with_min_scale(d, e, 0)
}

/// `d + e`, padding the result's scale up to at least `min_scale` when possible.
pub fn add_exact(d: &Decimal, e: &Decimal, min_scale: u8) -> Result<Decimal> {
    add_with_min_scale(d, e, min_scale)
}

fn add_with_min_scale(d: &Decimal, e: &Decimal, min_scale: u8) -> Result<Decimal> {
    let scale = d.scale.max(e.scale);

    if let Some((da, ea)) = aligned_fint(d, e, scale) {
        let outcome = if d.neg == e.neg {
            fint::add(da, ea).map(|sum| (d.neg, sum))
        } else {
            match da.cmp(&ea) {
                Ordering::Equal => Some((false, 0)),
                Ordering::Greater => Some((d.neg, da - ea)),
                Ordering::Less => Some((e.neg, ea - da)),
            }
        };
        if let Some((neg, coef)) = outcome {
            return ctor::new_from_fint(neg, coef, scale, min_scale);
        }
    }

    let (da, ea) = aligned_bint(d, e, scale);
    let (neg, mag) = if d.neg == e.neg {
        (d.neg, da + ea)
    } else {
        let diff = &da - &ea;
        if diff.is_negative() {
            (e.neg, diff.abs())
        } else {
            (d.neg, diff)
        }
    };
    ctor::new_from_bint(neg, &mag, scale, min_scale)
}

/// `d - e`, rounding into the envelope at the natural scale.
pub fn sub(d: &Decimal, e: &Decimal) -> Result<Decimal> {
    sub_with_min_scale(d, e, 0)
}

/// `d - e`, padding the result's scale up to at least `min_scale` when possible.
pub fn sub_exact(d: &Decimal, e: &Decimal, min_scale: u8) -> Result<Decimal> {
    sub_with_min_scale(d, e, min_scale)
}

fn sub_with_min_scale(d: &Decimal, e: &Decimal, min_scale: u8) -> Result<Decimal> {
    let flipped = Decimal::new_unchecked(!e.neg, e.coef, e.scale);
    add_with_min_scale(d, &flipped, min_scale)
}

/// `|d - e|`. Always non-negative.
pub fn sub_abs(d: &Decimal, e: &Decimal) -> Result<Decimal> {
    sub(d, e).map(|r| abs(&r))
}

/// `|d - e|`, padding the result's scale up to at least `min_scale` when possible.
pub fn sub_abs_exact(d: &Decimal, e: &Decimal, min_scale: u8) -> Result<Decimal> {
    sub_exact(d, e, min_scale).map(|r| abs(&r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctor::new_safe;

    #[test]
    fn commutativity_and_identity() {
        let d = new_safe(false, 1234, 2).unwrap();
        let e = new_safe(true, 500, 1).unwrap();
        assert_eq!(
            crate::cmp::compare(&add(&d, &e).unwrap(), &add(&e, &d).unwrap()),
            0
        );
        let zero = new_safe(false, 0, 0).unwrap();
        assert_eq!(crate::cmp::compare(&add(&d, &zero).unwrap(), &d), 0);
    }

    #[test]
    fn subtraction_aligns_scales() {
        let d = new_safe(false, 10, 0).unwrap(); // 10
        let e = new_safe(false, 25, 1).unwrap(); // 2.5
        let r = sub(&d, &e).unwrap();
        assert_eq!((r.neg, r.coef, r.scale), (false, 75, 1)); // 7.5
    }

    #[test]
    fn sub_abs_is_never_negative() {
        let d = new_safe(false, 1, 0).unwrap();
        let e = new_safe(false, 5, 0).unwrap();
        let r = sub_abs(&d, &e).unwrap();
        assert!(!r.is_negative());
        assert_eq!(r.coef, 4);
    }

    #[test]
    fn overflow_falls_through_to_bint() {
        let d = new_safe(false, 9_999_999_999_999_999_999, 0).unwrap();
        let e = new_safe(false, 4, 1).unwrap(); // 0.4
        let r = add(&d, &e).unwrap();
        // rounds toward the envelope limit, per spec scenario 9
        assert_eq!((r.coef, r.scale), (9_999_999_999_999_999_999, 0));
    }
}
