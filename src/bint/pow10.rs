//! Cache of `10^k` for `k <= 99`, computed once and shared process-wide.
//!
//! Mirrors the reference design's "natural-exponent-of-ten cache": the 64-bit [`crate::fint`]
//! table only goes up to `10^19`, but BINT intermediates (pre-rounding products, parser
//! exponents) routinely need larger powers.

use num_bigint::BigInt;
use num_traits::One;
use std::sync::OnceLock;

const CACHE_LEN: usize = 100;

static CACHE: OnceLock<Vec<BigInt>> = OnceLock::new();

fn cache() -> &'static Vec<BigInt> {
    CACHE.get_or_init(|| {
        let mut v = Vec::with_capacity(CACHE_LEN);
        let mut cur = BigInt::one();
        let ten = BigInt::from(10);
        for _ in 0..CACHE_LEN {
            v.push(cur.clone());
            cur *= &ten;
        }
        v
    })
}

/// `10^k`, served from the cache for `k < 100` and computed by repeated squaring otherwise.
pub fn pow10(k: u64) -> BigInt {
    let c = cache();
    if (k as usize) < c.len() {
        c[k as usize].clone()
    } else {
        exp(&BigInt::from(10), k)
    }
}

/// `base^exp` by repeated squaring. `exp == 0` always yields `1`, even for `base == 0`.
pub fn exp(base: &BigInt, exp: u64) -> BigInt {
    let mut result = BigInt::one();
    let mut base = base.clone();
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result *= &base;
        }
        base = &base * &base;
        e >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_and_computed_agree() {
        assert_eq!(pow10(0), BigInt::from(1));
        assert_eq!(pow10(3), BigInt::from(1000));
        assert_eq!(pow10(99), exp(&BigInt::from(10), 99));
        assert_eq!(pow10(150), exp(&BigInt::from(10), 150));
    }
}
