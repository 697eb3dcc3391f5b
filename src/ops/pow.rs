//! Integer power by repeated squaring.

use crate::consts;
use crate::ctor;
use crate::decimal::Decimal;
use crate::error::{Error, Result};
use crate::ops::{div, mul};

/// `base ^ exp`. `0^0 = 1`; `0^p` for negative `p` fails with division by zero.
pub fn pow(base: &Decimal, exp: i64) -> Result<Decimal> {
    if exp == 0 {
        return Ok(consts::ONE);
    }
    if exp < 0 {
        if base.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let positive_exp = exp.checked_neg().ok_or(Error::DomainError)?;
        let positive = pow(base, positive_exp)?;
        return div::inverse(&positive);
    }

    let mut result = consts::ONE;
    let mut base_pow = *base;
    let mut n = exp as u64;
    while n > 0 {
        if n & 1 == 1 {
            result = mul::mul(&result, &base_pow)?;
        }
        n >>= 1;
        if n > 0 {
            base_pow = mul::mul(&base_pow, &base_pow)?;
        }
    }
    Ok(result)
}

/// `base ^ exp`, padding the result's scale up to at least `min_scale` when possible.
pub fn pow_exact(base: &Decimal, exp: i64, min_scale: u8) -> Result<Decimal> {
    let r = pow(base, exp)?;
    Ok(ctor::pad(&r, min_scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctor::new_safe;

    #[test]
    fn zero_to_zero_is_one() {
        let zero = new_safe(false, 0, 0).unwrap();
        assert_eq!(crate::cmp::compare(&pow(&zero, 0).unwrap(), &consts::ONE), 0);
    }

    #[test]
    fn zero_to_negative_fails() {
        let zero = new_safe(false, 0, 0).unwrap();
        assert_eq!(pow(&zero, -1), Err(Error::DivisionByZero));
    }

    #[test]
    fn negative_exponent_inverts() {
        let two = new_safe(false, 2, 0).unwrap();
        let r = pow(&two, -1).unwrap();
        assert_eq!(crate::cmp::compare(&r, &new_safe(false, 5, 1).unwrap()), 0);
    }

    #[test]
    fn squares_by_repeated_multiplication() {
        let two = new_safe(false, 2, 0).unwrap();
        let r = pow(&two, 10).unwrap();
        assert_eq!((r.coefficient(), r.scale()), (1024, 0));
    }
}
