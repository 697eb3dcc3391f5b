//! Panicking convenience twins for the fallible arithmetic entry points, for callers who have
//! already established an operation cannot fail (constant folding, config validated at
//! startup) and would rather panic loudly than thread a `Result` through call sites that can
//! never actually see the error path.

use crate::decimal::Decimal;
use crate::ops::{div, exp, log, mul, pow, sqrt};
use crate::parse;

/// `add(d, e).expect(..)`.
pub fn must_add(d: &Decimal, e: &Decimal) -> Decimal {
    crate::ops::add_sub::add(d, e).expect("must_add: addition overflowed the envelope")
}

/// `sub(d, e).expect(..)`.
pub fn must_sub(d: &Decimal, e: &Decimal) -> Decimal {
    crate::ops::add_sub::sub(d, e).expect("must_sub: subtraction overflowed the envelope")
}

/// `mul(d, e).expect(..)`.
pub fn must_mul(d: &Decimal, e: &Decimal) -> Decimal {
    mul::mul(d, e).expect("must_mul: multiplication overflowed the envelope")
}

/// `divide(d, e).expect(..)`.
pub fn must_div(d: &Decimal, e: &Decimal) -> Decimal {
    div::divide(d, e).expect("must_div: division failed")
}

/// `pow(base, exp).expect(..)`.
pub fn must_pow(base: &Decimal, e: i64) -> Decimal {
    pow::pow(base, e).expect("must_pow: exponentiation failed")
}

/// `sqrt(d).expect(..)`.
pub fn must_sqrt(d: &Decimal) -> Decimal {
    sqrt::sqrt(d).expect("must_sqrt: square root failed")
}

/// `exp(x).expect(..)`.
pub fn must_exp(x: &Decimal) -> Decimal {
    exp::exp(x).expect("must_exp: exponential failed")
}

/// `log(x).expect(..)`.
pub fn must_log(x: &Decimal) -> Decimal {
    log::log(x).expect("must_log: logarithm failed")
}

/// `parse(s).expect(..)`.
pub fn must_parse(s: &str) -> Decimal {
    parse::parse(s).expect("must_parse: malformed decimal literal")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctor::new_safe;

    #[test]
    fn must_helpers_match_their_fallible_twins() {
        let a = new_safe(false, 1, 0).unwrap();
        let b = new_safe(false, 2, 0).unwrap();
        assert_eq!(must_add(&a, &b), crate::ops::add_sub::add(&a, &b).unwrap());
        assert_eq!(must_mul(&a, &b), mul::mul(&a, &b).unwrap());
        assert_eq!(must_div(&b, &a), div::divide(&b, &a).unwrap());
        assert_eq!(must_parse("1.5"), parse::parse("1.5").unwrap());
    }

    #[test]
    #[should_panic(expected = "must_div")]
    fn must_div_panics_on_division_by_zero() {
        let a = new_safe(false, 1, 0).unwrap();
        let zero = new_safe(false, 0, 0).unwrap();
        must_div(&a, &zero);
    }
}
