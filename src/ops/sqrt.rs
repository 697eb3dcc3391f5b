//! Square root via Newton's method on the BINT path.

use crate::bint;
use crate::consts;
use crate::ctor;
use crate::decimal::{Decimal, MAX_SCALE};
use crate::error::{Error, Result};
use crate::ops::fixed::WORKING_SCALE;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// `sqrt(d)`. Fails with [`Error::DomainError`] for negative `d`.
pub fn sqrt(d: &Decimal) -> Result<Decimal> {
    if d.is_negative() {
        return Err(Error::DomainError);
    }
    if d.is_zero() {
        return Ok(consts::ZERO);
    }

    let exponent = 2 * WORKING_SCALE as i64 - d.scale as i64; // always >= 0: d.scale <= MAX_SCALE
    let n = BigInt::from(d.coef) * bint::pow10(exponent as u64);
    let root = isqrt(&n);
    ctor::new_from_bint(false, &root, WORKING_SCALE as u8, 0)
}

/// `sqrt(d)`, padding the result's scale up to at least `min_scale` when possible.
pub fn sqrt_exact(d: &Decimal, min_scale: u8) -> Result<Decimal> {
    let r = sqrt(d)?;
    Ok(ctor::pad(&r, min_scale.min(MAX_SCALE)))
}

/// Integer square root (floor), via Newton's method starting from a bit-length estimate.
fn isqrt(n: &BigInt) -> BigInt {
    if n.is_zero() {
        return BigInt::zero();
    }
    let bits = n.bits();
    let mut x = BigInt::one() << (bits / 2 + 1);
    loop {
        let x1 = (&x + n / &x) >> 1;
        if x1 >= x {
            return x;
        }
        x = x1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctor::new_safe;

    #[test]
    fn sqrt_of_zero_is_zero() {
        let zero = new_safe(false, 0, 0).unwrap();
        assert!(sqrt(&zero).unwrap().is_zero());
    }

    #[test]
    fn sqrt_of_negative_fails() {
        let neg = new_safe(true, 1, 0).unwrap();
        assert_eq!(sqrt(&neg), Err(Error::DomainError));
    }

    #[test]
    fn sqrt_of_perfect_square_is_exact() {
        let four = new_safe(false, 4, 0).unwrap();
        let r = sqrt(&four).unwrap();
        assert_eq!(crate::cmp::compare(&r, &new_safe(false, 2, 0).unwrap()), 0);
    }

    #[test]
    fn isqrt_matches_known_values() {
        assert_eq!(isqrt(&BigInt::from(100)), BigInt::from(10));
        assert_eq!(isqrt(&BigInt::from(99)), BigInt::from(9));
        assert_eq!(isqrt(&BigInt::zero()), BigInt::zero());
    }
}
