//! Shared fixed-point BigInt helpers for the transcendental functions (`exp`, `log`, `sqrt`).
//!
//! Each of those operations carries extra guard digits internally and only rounds once, at the
//! very end, back into the 19-digit envelope — this module is where that shared working
//! precision and its arithmetic primitives live.

use crate::bint;
use num_bigint::BigInt;
use num_traits::Signed;

/// Internal working precision: the 19-digit envelope plus guard digits, landing inside the
/// 22-25 digit budget needed to guarantee the transcendentals' ulp bounds.
pub const WORKING_SCALE: u32 = 25;

/// `ln(2)`, good to 37 digits past the point.
const LN2_DIGITS: &str = "6931471805599453094172321214581765681";
/// `sqrt(2)`, good to 37 digits past the point.
const SQRT2_DIGITS: &str = "4142135623730950488016887242096980786";
/// `1/sqrt(2)`, good to 37 digits past the point.
const INV_SQRT2_DIGITS: &str = "7071067811865475244008443621048490393";

fn fixed_const(digits: &str, w: u32, whole: u64) -> BigInt {
    let frac = &digits[..w as usize];
    let text = format!("{whole}{frac}");
    BigInt::parse_bytes(text.as_bytes(), 10).expect("hardcoded constant digit string")
}

/// `ln(2) * 10^w`.
pub fn ln2_fixed(w: u32) -> BigInt {
    fixed_const(LN2_DIGITS, w, 0)
}

/// `sqrt(2) * 10^w`.
pub fn sqrt2_fixed(w: u32) -> BigInt {
    fixed_const(SQRT2_DIGITS, w, 1)
}

/// `(1/sqrt(2)) * 10^w`.
pub fn inv_sqrt2_fixed(w: u32) -> BigInt {
    fixed_const(INV_SQRT2_DIGITS, w, 0)
}

/// `1.0 * 10^w`.
pub fn one_fixed(w: u32) -> BigInt {
    bint::pow10(w as u64)
}

/// Rounds `num / den` to the nearest integer, ties away from zero. `den` must be positive.
pub fn divround(num: &BigInt, den: &BigInt) -> BigInt {
    let (q, r) = bint::quo_rem(num, den);
    let twice_r = (&r * 2).abs();
    if twice_r > *den {
        if num.is_negative() {
            q - BigInt::from(1)
        } else {
            q + BigInt::from(1)
        }
    } else {
        q
    }
}

/// Fixed-point multiply: `a` and `b` are both scaled by `10^w`; the product is rescaled back
/// down to `10^w` with rounding.
pub fn fp_mul(a: &BigInt, b: &BigInt, w: u32) -> BigInt {
    divround(&(a * b), &one_fixed(w))
}

/// Fixed-point divide: `num / den`, both taken as scaled-by-`10^w` fixed-point values, with the
/// result rescaled back to `10^w`.
pub fn fp_div(num: &BigInt, den: &BigInt, w: u32) -> BigInt {
    divround(&(num * one_fixed(w)), den)
}

/// Converts a `Decimal`'s coefficient (as a non-negative magnitude) into fixed point at scale
/// `w`. Caller tracks sign separately.
pub fn magnitude_to_fixed(coef: u64, scale: u8, w: u32) -> BigInt {
    BigInt::from(coef) * bint::pow10((w - scale as u32) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divround_ties_away_from_zero() {
        assert_eq!(divround(&BigInt::from(5), &BigInt::from(2)), BigInt::from(3));
        assert_eq!(divround(&BigInt::from(-5), &BigInt::from(2)), BigInt::from(-3));
        assert_eq!(divround(&BigInt::from(3), &BigInt::from(2)), BigInt::from(2));
    }

    #[test]
    fn fp_mul_identity() {
        let w = 6;
        let one = one_fixed(w);
        let x = BigInt::from(314159);
        assert_eq!(fp_mul(&x, &one, w), x);
    }
}
