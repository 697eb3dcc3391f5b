//! Property-based tests over the public arithmetic surface. Values are built by parsing
//! generated text rather than by poking at private fields, since construction is a choke point
//! this crate deliberately doesn't expose.

use fixdec::{
    add, cmp_total, compare, divide, divide_exact, exp, from_bcd, log, mul, neg, parse, sqrt,
    sub, to_bcd, Decimal, MAX_SCALE,
};
use proptest::prelude::*;

const MAX_PREC_U64: u64 = 999_999_999_999; // 12 digits, comfortably inside the 19-digit envelope

fn decimal_text(neg: bool, whole: u64, frac: u32, scale: u8) -> String {
    let sign = if neg && (whole != 0 || frac != 0) { "-" } else { "" };
    if scale == 0 {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{frac:0width$}", width = scale as usize)
    }
}

fn small_decimal() -> impl Strategy<Value = Decimal> {
    (any::<bool>(), 0u64..=MAX_PREC_U64, 0u8..=6u8).prop_map(|(neg, whole, scale)| {
        let modulus = 10u32.checked_pow(scale as u32).unwrap_or(1);
        let frac = (whole % modulus as u64) as u32;
        let text = decimal_text(neg, whole, frac, scale);
        parse(&text).unwrap()
    })
}

fn positive_decimal() -> impl Strategy<Value = Decimal> {
    (1u64..=MAX_PREC_U64, 0u8..=6u8).prop_map(|(whole, scale)| {
        let modulus = 10u32.checked_pow(scale as u32).unwrap_or(1);
        let frac = (whole % modulus as u64) as u32;
        let text = decimal_text(false, whole.max(1), frac, scale);
        parse(&text).unwrap()
    })
}

/// bounded so `exp` never overflows the envelope (the overflow threshold is ~43.668)
fn exp_safe_decimal() -> impl Strategy<Value = Decimal> {
    (-40i64..=40i64).prop_map(|whole| parse(&whole.to_string()).unwrap())
}

/// `true` if `a` and `b` differ by at most `tolerance_coef` units in the last digit at whichever
/// scale their difference naturally lands on.
fn close_within(a: &Decimal, b: &Decimal, tolerance_coef: u64) -> bool {
    let diff = sub(a, b).unwrap_or_else(|_| sub(b, a).unwrap());
    diff.coefficient() <= tolerance_coef
}

proptest! {
    #[test]
    fn envelope_invariant_holds_after_arithmetic(a in small_decimal(), b in small_decimal()) {
        if let Ok(r) = add(&a, &b) {
            prop_assert!(r.scale() <= MAX_SCALE);
            prop_assert!(r.precision() <= 19);
        }
        if let Ok(r) = mul(&a, &b) {
            prop_assert!(r.scale() <= MAX_SCALE);
            prop_assert!(r.precision() <= 19);
        }
    }

    #[test]
    fn string_round_trips_through_canonical_text(d in small_decimal()) {
        let text = d.to_string();
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(compare(&d, &parsed), 0);
    }

    #[test]
    fn bcd_round_trips(d in small_decimal()) {
        let bytes = to_bcd(&d);
        let decoded = from_bcd(&bytes).unwrap();
        prop_assert_eq!(cmp_total(&d, &decoded), std::cmp::Ordering::Equal);
    }

    #[test]
    fn addition_is_commutative_with_identity(a in small_decimal(), b in small_decimal()) {
        let ab = add(&a, &b).unwrap();
        let ba = add(&b, &a).unwrap();
        prop_assert_eq!(compare(&ab, &ba), 0);

        let zero = parse("0").unwrap();
        let a_plus_zero = add(&a, &zero).unwrap();
        prop_assert_eq!(compare(&a_plus_zero, &a), 0);
    }

    #[test]
    fn multiplication_has_identity_and_annihilator(a in small_decimal()) {
        let one = parse("1").unwrap();
        let zero = parse("0").unwrap();
        prop_assert_eq!(compare(&mul(&a, &one).unwrap(), &a), 0);
        prop_assert!(mul(&a, &zero).unwrap().is_zero());
    }

    #[test]
    fn negation_is_involutive(a in small_decimal()) {
        prop_assert_eq!(compare(&neg(&neg(&a)), &a), 0);
    }

    #[test]
    fn divide_then_multiply_recovers_the_dividend(a in small_decimal(), b in positive_decimal()) {
        let q = divide(&a, &b).unwrap();
        let back = mul(&q, &b).unwrap();
        prop_assert!(close_within(&back, &a, 5));
    }

    #[test]
    fn sqrt_squares_back_to_the_input(d in positive_decimal()) {
        let r = sqrt(&d).unwrap();
        let squared = mul(&r, &r).unwrap();
        prop_assert!(close_within(&squared, &d, 50));
    }

    #[test]
    fn exp_and_log_are_inverse(x in exp_safe_decimal()) {
        let e = exp(&x).unwrap();
        if !e.is_zero() {
            let back = log(&e).unwrap();
            prop_assert!(close_within(&back, &x, 500));
        }
    }

    #[test]
    fn compare_agrees_with_subtraction_sign(a in small_decimal(), b in small_decimal()) {
        if let Ok(diff) = sub(&a, &b) {
            let expected = if diff.is_zero() {
                0
            } else if diff.is_negative() {
                -1
            } else {
                1
            };
            prop_assert_eq!(compare(&a, &b), expected);
        }
    }

    #[test]
    fn padding_never_drops_below_the_requested_scale(a in small_decimal(), min_scale in 0u8..=19u8) {
        if let Ok(r) = divide_exact(&a, &parse("1").unwrap(), min_scale) {
            prop_assert!(r.scale() >= min_scale.min(MAX_SCALE));
        }
    }
}
