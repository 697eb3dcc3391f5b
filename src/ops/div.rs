//! Division, remainder division and inversion.

use crate::bint;
use crate::consts;
use crate::ctor;
use crate::decimal::{Decimal, MAX_SCALE};
use crate::error::{Error, Result};
use crate::fint;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// `d / e` at the natural scale: the largest scale up to [`MAX_SCALE`] that still lets the
/// quotient fit the 19-digit envelope, rounded half-to-even on the last digit shed.
pub fn divide(d: &Decimal, e: &Decimal) -> Result<Decimal> {
    divide_with_min_scale(d, e, 0)
}

/// `d / e`, padding the result's scale up to at least `min_scale` when possible.
pub fn divide_exact(d: &Decimal, e: &Decimal, min_scale: u8) -> Result<Decimal> {
    divide_with_min_scale(d, e, min_scale)
}

fn divide_with_min_scale(d: &Decimal, e: &Decimal, min_scale: u8) -> Result<Decimal> {
    if e.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let neg = d.neg != e.neg;
    let numerator = BigInt::from(d.coef);
    divide_bigint_numerator(neg, &numerator, d.scale, e, min_scale)
}

/// Shared division core: divides the exact value `(if neg {-1} else {1}) * numerator *
/// 10^-numerator_scale` by `e`, rounding once into the envelope. Used directly by [`divide`]
/// and by the fused-divide-add path in `mul.rs`, whose numerator already has another term
/// folded in before the single division happens.
pub(crate) fn divide_bigint_numerator(
    neg: bool,
    numerator: &BigInt,
    numerator_scale: u8,
    e: &Decimal,
    min_scale: u8,
) -> Result<Decimal> {
    if e.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let result_neg = neg != e.neg;

    // Work at MAX_SCALE precision: shift = MAX_SCALE + e.scale - numerator_scale, which is
    // always >= 0 since numerator_scale <= MAX_SCALE.
    let shift = MAX_SCALE as i64 + e.scale as i64 - numerator_scale as i64;
    let shifted = if shift >= 0 {
        numerator * bint::pow10(shift as u64)
    } else {
        numerator / bint::pow10((-shift) as u64)
    };
    let divisor = BigInt::from(e.coef);
    let quotient = div_round(&shifted, &divisor);
    ctor::new_from_bint(result_neg, &quotient, MAX_SCALE, min_scale)
}

/// Rounds `num / den` half-to-even to the nearest integer. `den` must be positive; `num` may be
/// negative (the numerator carries the combined sign of a fused-divide-add's folded-in term).
fn div_round(num: &BigInt, den: &BigInt) -> BigInt {
    let (q, r) = num.div_rem(den);
    let twice_r = (&r * 2).abs();
    match twice_r.cmp(den) {
        std::cmp::Ordering::Greater => bump(q, num),
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Equal => {
            if q.is_odd() {
                bump(q, num)
            } else {
                q
            }
        }
    }
}

fn bump(q: BigInt, num: &BigInt) -> BigInt {
    if num.is_negative() {
        q - BigInt::from(1)
    } else {
        q + BigInt::from(1)
    }
}

/// Strict division: succeeds only when `d / e` terminates exactly within the working precision
/// used by [`divide`]; fails with [`Error::InexactDivision`] otherwise instead of rounding.
pub fn quo_exact(d: &Decimal, e: &Decimal) -> Result<Decimal> {
    if e.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let neg = d.neg != e.neg;
    let shift = MAX_SCALE as i64 + e.scale as i64 - d.scale as i64;
    let numerator = BigInt::from(d.coef) * bint::pow10(shift.max(0) as u64);
    let divisor = BigInt::from(e.coef);
    let (q, r) = bint::quo_rem(&numerator, &divisor);
    if !r.is_zero() {
        return Err(Error::InexactDivision);
    }
    ctor::new_from_bint(neg, &q, MAX_SCALE, 0)
}

/// Integer quotient and remainder of `d / e`: quotient has scale 0, remainder has scale
/// `max(d.scale, e.scale)` and the dividend's sign, and is always smaller in magnitude than the
/// divisor.
pub fn divide_with_remainder(d: &Decimal, e: &Decimal) -> Result<(Decimal, Decimal)> {
    if e.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let scale = d.scale.max(e.scale);

    if let (Some(da), Some(ea)) = (
        fint::lsh(d.coef, (scale - d.scale) as u32),
        fint::lsh(e.coef, (scale - e.scale) as u32),
    ) {
        if ea != 0 {
            let q = da / ea;
            let r = da % ea;
            let quotient = ctor::new_safe(d.neg != e.neg, q, 0)?;
            let remainder = ctor::new_safe(d.neg, r, scale)?;
            return Ok((quotient, remainder));
        }
    }

    let da = BigInt::from(d.coef) * bint::pow10((scale - d.scale) as u64);
    let ea = BigInt::from(e.coef) * bint::pow10((scale - e.scale) as u64);
    let (q, r) = bint::quo_rem(&da, &ea);
    let qcoef: u64 = q.to_string().parse().map_err(|_| Error::DecimalOverflow)?;
    let rcoef: u64 = r.to_string().parse().map_err(|_| Error::DecimalOverflow)?;
    let quotient = ctor::new_safe(d.neg != e.neg, qcoef, 0)?;
    let remainder = ctor::new_safe(d.neg, rcoef, scale)?;
    Ok((quotient, remainder))
}

/// `1 / d`.
pub fn inverse(d: &Decimal) -> Result<Decimal> {
    divide(&consts::ONE, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctor::new_safe;

    #[test]
    fn divide_by_zero_fails() {
        let d = new_safe(false, 1, 0).unwrap();
        let zero = new_safe(false, 0, 0).unwrap();
        assert_eq!(divide(&d, &zero), Err(Error::DivisionByZero));
    }

    #[test]
    fn divide_produces_natural_scale() {
        let two = new_safe(false, 2, 0).unwrap();
        let three = new_safe(false, 3, 0).unwrap();
        let r = divide(&two, &three).unwrap();
        assert_eq!(r.scale(), MAX_SCALE);
        assert_eq!(r.coefficient(), 6_666_666_666_666_666_667);
    }

    #[test]
    fn quo_exact_detects_inexactness() {
        let one = new_safe(false, 1, 0).unwrap();
        let three = new_safe(false, 3, 0).unwrap();
        assert_eq!(quo_exact(&one, &three), Err(Error::InexactDivision));

        let four = new_safe(false, 4, 0).unwrap();
        let r = quo_exact(&one, &four).unwrap();
        assert_eq!(crate::cmp::compare(&r, &new_safe(false, 25, 2).unwrap()), 0);
    }

    #[test]
    fn remainder_is_smaller_than_divisor_and_carries_dividend_sign() {
        let d = new_safe(true, 7, 0).unwrap(); // -7
        let e = new_safe(false, 2, 0).unwrap();
        let (q, r) = divide_with_remainder(&d, &e).unwrap();
        assert_eq!((q.is_negative(), q.coefficient()), (true, 3));
        assert_eq!((r.is_negative(), r.coefficient()), (true, 1));
    }

    #[test]
    fn inverse_matches_one_over_d() {
        let four = new_safe(false, 4, 0).unwrap();
        let r = inverse(&four).unwrap();
        assert_eq!(crate::cmp::compare(&r, &new_safe(false, 25, 2).unwrap()), 0);
    }
}
