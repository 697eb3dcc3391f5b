//! Natural logarithm via argument reduction and an atanh-based series.

use crate::cmp;
use crate::consts;
use crate::ctor;
use crate::decimal::{Decimal, MAX_SCALE};
use crate::error::{Error, Result};
use crate::ops::fixed::{
    fp_div, fp_mul, inv_sqrt2_fixed, ln2_fixed, magnitude_to_fixed, one_fixed, sqrt2_fixed,
    WORKING_SCALE,
};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Series terms beyond this underflow to nothing at the working precision — the reduced
/// argument `y` always lies in `[1/sqrt(2), sqrt(2)]`, so `|z| <= (sqrt(2)-1)/(sqrt(2)+1)`.
const MAX_TERMS: u32 = 50;

/// `ln(x)`. Fails with [`Error::DomainError`] for `x <= 0`.
pub fn log(x: &Decimal) -> Result<Decimal> {
    if cmp::compare(x, &consts::ZERO) <= 0 {
        return Err(Error::DomainError);
    }

    let w = WORKING_SCALE;
    let one = one_fixed(w);
    let upper = sqrt2_fixed(w);
    let lower = inv_sqrt2_fixed(w);

    let mut y = magnitude_to_fixed(x.coef, x.scale, w);
    let mut k: i64 = 0;
    while y > upper {
        y = &y / BigInt::from(2);
        k += 1;
    }
    while y < lower {
        y = &y * BigInt::from(2);
        k -= 1;
    }

    let numerator = &y - &one;
    let denominator = &y + &one;
    let z = fp_div(&numerator, &denominator, w);
    let z2 = fp_mul(&z, &z, w);

    let mut term = z.clone();
    let mut sum = z;
    let mut n = 1u32;
    for _ in 0..MAX_TERMS {
        term = fp_mul(&term, &z2, w);
        n += 2;
        let contribution = &term / BigInt::from(n);
        if contribution.is_zero() {
            break;
        }
        sum += &contribution;
    }

    let ln_y = sum * BigInt::from(2);
    let result = ln_y + BigInt::from(k) * ln2_fixed(w);

    let neg = result.is_negative();
    ctor::new_from_bint(neg, &result.abs(), w as u8, 0)
}

/// `ln(x)`, padding the result's scale up to at least `min_scale` when possible.
pub fn log_exact(x: &Decimal, min_scale: u8) -> Result<Decimal> {
    let r = log(x)?;
    Ok(ctor::pad(&r, min_scale.min(MAX_SCALE)))
}
