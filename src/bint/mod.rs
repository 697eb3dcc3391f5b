//! Arbitrary-precision ("BINT") primitives.
//!
//! A BINT is a [`BigInt`] that is always kept non-negative — the sign of a `Decimal` lives
//! outside the BINT, in the same way a FINT's sign lives outside the `u64`. These functions are
//! the fallback path the arithmetic engine reaches for whenever a [`crate::fint`] operation
//! returns `None`; they cannot overflow (the envelope is only enforced afterwards, by the
//! normalising constructors in `ctor.rs`).

pub mod pow10;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::cmp::Ordering;

pub use pow10::{exp, pow10};

/// `x * 10^k`.
pub fn lsh(x: &BigInt, k: u64) -> BigInt {
    x * pow10(k)
}

/// `x / 10^k`, truncating toward zero.
pub fn rsh_toward_zero(x: &BigInt, k: u64) -> BigInt {
    if k == 0 {
        return x.clone();
    }
    x / pow10(k)
}

/// `x / 10^k`, rounding away from zero on any nonzero remainder.
pub fn rsh_away_from_zero(x: &BigInt, k: u64) -> BigInt {
    if k == 0 {
        return x.clone();
    }
    let p = pow10(k);
    let (q, r) = x.div_rem(&p);
    if r.is_zero() {
        q
    } else {
        q + BigInt::one()
    }
}

/// `x / 10^k`, rounding half-to-even on a tie. `x` must be non-negative.
pub fn rsh_half_even(x: &BigInt, k: u64) -> BigInt {
    if k == 0 {
        return x.clone();
    }
    let p = pow10(k);
    let (q, r) = x.div_rem(&p);
    let twice_r = &r * 2;
    match twice_r.cmp(&p) {
        Ordering::Greater => q + BigInt::one(),
        Ordering::Less => q,
        Ordering::Equal => {
            if q.is_odd() {
                q + BigInt::one()
            } else {
                q
            }
        }
    }
}

/// Quotient and remainder of `x / y`, truncating toward zero (matches [`crate::fint::quo`]'s
/// notion of division, extended with an explicit remainder).
pub fn quo_rem(x: &BigInt, y: &BigInt) -> (BigInt, BigInt) {
    x.div_rem(y)
}

/// Number of decimal digits in `x` (`prec(0) == 0`, same convention as [`crate::fint::prec`]).
/// `x` must be non-negative.
pub fn prec(x: &BigInt) -> u32 {
    if x.is_zero() {
        0
    } else {
        x.to_str_radix(10).len() as u32
    }
}

/// Trailing decimal zero count. Undefined (returns 0) for `x == 0`.
pub fn tzeros(x: &BigInt) -> u32 {
    if x.is_zero() {
        return 0;
    }
    let ten = BigInt::from(10);
    let mut x = x.clone();
    let mut n = 0u32;
    loop {
        let (q, r) = x.div_rem(&ten);
        if !r.is_zero() {
            break;
        }
        x = q;
        n += 1;
    }
    n
}

/// `true` iff `x` carries at least `p` decimal digits. Always `true` for `p < 1`.
pub fn has_prec(x: &BigInt, p: u32) -> bool {
    if p < 1 {
        true
    } else {
        prec(x) >= p
    }
}
