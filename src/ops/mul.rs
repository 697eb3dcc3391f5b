//! Multiply, fused-multiply-add and fused-divide-add.

use crate::bint;
use crate::ctor;
use crate::decimal::{Decimal, MAX_SCALE};
use crate::error::Result;
use crate::fint;
use crate::ops::div;
use num_bigint::BigInt;

/// `d * e`, at the natural scale `d.scale + e.scale` (rounded into the envelope if that
/// overflows 19 digits or 19 scale positions).
pub fn mul(d: &Decimal, e: &Decimal) -> Result<Decimal> {
    mul_with_min_scale(d, e, 0)
}

/// `d * e`, padding the result's scale up to at least `min_scale` when possible.
pub fn mul_exact(d: &Decimal, e: &Decimal, min_scale: u8) -> Result<Decimal> {
    mul_with_min_scale(d, e, min_scale)
}

fn mul_with_min_scale(d: &Decimal, e: &Decimal, min_scale: u8) -> Result<Decimal> {
    let neg = d.neg != e.neg;
    let raw_scale = d.scale as u32 + e.scale as u32;

    if raw_scale <= MAX_SCALE as u32 {
        if let Some(coef) = fint::mul(d.coef, e.coef) {
            return ctor::new_from_fint(neg, coef, raw_scale as u8, min_scale);
        }
    }

    let coef = BigInt::from(d.coef) * BigInt::from(e.coef);
    ctor::new_from_bint(neg, &coef, raw_scale as u8, min_scale)
}

/// `d + e * f`. The product `e * f` is kept at full precision and added to `d` before any
/// rounding happens, so the combined result only rounds once.
pub fn fused_multiply_add(d: &Decimal, e: &Decimal, f: &Decimal) -> Result<Decimal> {
    fused_multiply_add_with_min_scale(d, e, f, 0)
}

/// `d + e * f`, padding the result's scale up to at least `min_scale` when possible.
pub fn fused_multiply_add_exact(
    d: &Decimal,
    e: &Decimal,
    f: &Decimal,
    min_scale: u8,
) -> Result<Decimal> {
    fused_multiply_add_with_min_scale(d, e, f, min_scale)
}

fn fused_multiply_add_with_min_scale(
    d: &Decimal,
    e: &Decimal,
    f: &Decimal,
    min_scale: u8,
) -> Result<Decimal> {
    let neg_p = e.neg != f.neg;
    let scale_p = e.scale as u32 + f.scale as u32;
    let product = BigInt::from(e.coef) * BigInt::from(f.coef);

    let scale = scale_p.max(d.scale as u32);
    let product_aligned = product * bint::pow10((scale - scale_p) as u64);
    let d_aligned = BigInt::from(d.coef) * bint::pow10((scale - d.scale as u32) as u64);

    let (neg, mag) = combine(d.neg, &d_aligned, neg_p, &product_aligned);
    ctor::new_from_bint(neg, &mag, scale as u8, min_scale)
}

/// `d + e / f`. The division is performed against a numerator that already has `d` folded in
/// (`d*f + e`, divided once by `f`), so only one rounding applies to the combined result.
pub fn fused_divide_add(d: &Decimal, e: &Decimal, f: &Decimal) -> Result<Decimal> {
    fused_divide_add_with_min_scale(d, e, f, 0)
}

/// `d + e / f`, padding the result's scale up to at least `min_scale` when possible.
pub fn fused_divide_add_exact(
    d: &Decimal,
    e: &Decimal,
    f: &Decimal,
    min_scale: u8,
) -> Result<Decimal> {
    fused_divide_add_with_min_scale(d, e, f, min_scale)
}

fn fused_divide_add_with_min_scale(
    d: &Decimal,
    e: &Decimal,
    f: &Decimal,
    min_scale: u8,
) -> Result<Decimal> {
    if f.is_zero() {
        return Err(crate::error::Error::DivisionByZero);
    }

    // numerator = d * f + e, kept as an exact BigInt at a common scale
    let neg_t = d.neg != f.neg;
    let scale_t = d.scale as u32 + f.scale as u32;
    let t = BigInt::from(d.coef) * BigInt::from(f.coef);

    let scale_n = scale_t.max(e.scale as u32);
    let t_aligned = t * bint::pow10((scale_n - scale_t) as u64);
    let e_aligned = BigInt::from(e.coef) * bint::pow10((scale_n - e.scale as u32) as u64);
    let (neg_n, numerator) = combine(neg_t, &t_aligned, e.neg, &e_aligned);

    div::divide_bigint_numerator(neg_n, &numerator, scale_n as u8, f, min_scale)
}

/// Combines two non-negative magnitudes under their own signs: same-sign adds, opposite-sign
/// subtracts with the result following the larger magnitude's sign.
pub(crate) fn combine(
    neg_a: bool,
    a: &BigInt,
    neg_b: bool,
    b: &BigInt,
) -> (bool, BigInt) {
    use num_traits::Zero;
    if neg_a == neg_b {
        (neg_a, a + b)
    } else {
        let diff = a - b;
        if diff.is_zero() {
            (false, diff)
        } else if diff.sign() == num_bigint::Sign::Minus {
            (neg_b, -diff)
        } else {
            (neg_a, diff)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctor::new_safe;

    #[test]
    fn multiply_identity_and_zero() {
        let d = new_safe(false, 1234, 2).unwrap();
        let one = new_safe(false, 1, 0).unwrap();
        let zero = new_safe(false, 0, 0).unwrap();
        assert_eq!(crate::cmp::compare(&mul(&d, &one).unwrap(), &d), 0);
        assert!(mul(&d, &zero).unwrap().is_zero());
    }

    #[test]
    fn multiply_combines_scale_and_sign() {
        let d = new_safe(true, 12, 1).unwrap(); // -1.2
        let e = new_safe(false, 5, 1).unwrap(); // 0.5
        let r = mul(&d, &e).unwrap();
        assert_eq!((r.is_negative(), r.coef, r.scale), (true, 60, 2)); // -0.60
    }

    #[test]
    fn fma_rounds_once() {
        let d = new_safe(false, 1, 0).unwrap();
        let e = new_safe(false, 1, 1).unwrap(); // 0.1
        let f = new_safe(false, 1, 1).unwrap(); // 0.1
        let r = fused_multiply_add(&d, &e, &f).unwrap();
        assert_eq!((r.coef, r.scale), (101, 2)); // 1.01
    }

    #[test]
    fn fda_folds_add_before_divide() {
        let d = new_safe(false, 1, 0).unwrap(); // 1
        let e = new_safe(false, 1, 0).unwrap(); // 1
        let f = new_safe(false, 2, 0).unwrap(); // 2
        let r = fused_divide_add(&d, &e, &f).unwrap(); // 1 + 1/2 = 1.5
        assert_eq!(crate::cmp::compare(&r, &new_safe(false, 15, 1).unwrap()), 0);
    }
}
