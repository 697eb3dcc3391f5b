//! Natural exponential via argument reduction and a Maclaurin series.

use crate::bint;
use crate::cmp;
use crate::consts;
use crate::ctor;
use crate::decimal::{Decimal, MAX_SCALE};
use crate::error::{Error, Result};
use crate::ops::fixed::{divround, fp_mul, ln2_fixed, one_fixed, WORKING_SCALE};
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

/// Terms beyond this are guaranteed to underflow to nothing at the working precision (the
/// Maclaurin series' reduced argument never exceeds `ln(2)/2`).
const MAX_TERMS: u32 = 60;

/// The largest `x` for which `exp(x)` still fits the 19-digit envelope.
const OVERFLOW_LIMIT: Decimal = Decimal::new_unchecked(false, 43_668, 3);
/// Below this, `exp(x)` underflows to zero within the envelope.
const UNDERFLOW_LIMIT: Decimal = Decimal::new_unchecked(true, 43_749, 3);

/// `e^x`.
pub fn exp(x: &Decimal) -> Result<Decimal> {
    if cmp::compare(x, &OVERFLOW_LIMIT) > 0 {
        return Err(Error::DecimalOverflow);
    }
    if cmp::compare(x, &UNDERFLOW_LIMIT) < 0 {
        return Ok(consts::ZERO);
    }

    let w = WORKING_SCALE;
    let x_fp = to_signed_fixed(x, w);
    let ln2 = ln2_fixed(w);
    let n = divround(&x_fp, &ln2);
    let r_fp = &x_fp - &n * &ln2;

    let one = one_fixed(w);
    let mut term = one.clone();
    let mut sum = one;
    for k in 1u32..=MAX_TERMS {
        term = fp_mul(&term, &r_fp, w) / BigInt::from(k);
        if term.is_zero() {
            break;
        }
        sum += &term;
    }

    let n_i64 = n.to_i64().unwrap_or(0);
    let scaled = if n_i64 >= 0 {
        &sum * BigInt::from(2).pow(n_i64 as u32)
    } else {
        &sum / BigInt::from(2).pow((-n_i64) as u32)
    };

    ctor::new_from_bint(false, &scaled, w as u8, 0)
}

/// `e^x`, padding the result's scale up to at least `min_scale` when possible.
pub fn exp_exact(x: &Decimal, min_scale: u8) -> Result<Decimal> {
    let r = exp(x)?;
    Ok(ctor::pad(&r, min_scale.min(MAX_SCALE)))
}

fn to_signed_fixed(d: &Decimal, w: u32) -> BigInt {
    let mag = BigInt::from(d.coef) * bint::pow10((w - d.scale as u32) as u64);
    if d.neg {
        -mag
    } else {
        mag
    }
}
