//! The decimal literal parser: signed integer/fraction/exponent grammar, replicating the
//! arithmetic engine's FINT-then-BINT dispatch while ingesting digits.

use crate::bint;
use crate::ctor;
use crate::decimal::{Decimal, MAX_SCALE};
use crate::error::{ParseErrorKind, Result};
use crate::fint;
use num_bigint::BigInt;

/// Exponent magnitudes beyond this are rejected outright, bounding the work a hostile input
/// could otherwise force.
const MAX_EXPONENT_MAGNITUDE: i64 = 330;

enum Coef {
    Fint(u64),
    Bint(BigInt),
}

impl Coef {
    fn push_digit(self, d: u64) -> Coef {
        match self {
            Coef::Fint(x) => match fint::fsa(x, 1, d) {
                Some(y) => Coef::Fint(y),
                None => Coef::Bint(BigInt::from(x) * BigInt::from(10) + BigInt::from(d)),
            },
            Coef::Bint(x) => Coef::Bint(x * BigInt::from(10) + BigInt::from(d)),
        }
    }

    fn lsh(self, shift: u32) -> Coef {
        if shift == 0 {
            return self;
        }
        match self {
            Coef::Fint(x) => match fint::lsh(x, shift) {
                Some(y) => Coef::Fint(y),
                None => Coef::Bint(BigInt::from(x) * bint::pow10(shift as u64)),
            },
            Coef::Bint(x) => Coef::Bint(x * bint::pow10(shift as u64)),
        }
    }

    fn rsh_half_even(self, shift: u32) -> Coef {
        if shift == 0 {
            return self;
        }
        match self {
            Coef::Fint(x) => Coef::Fint(fint::rsh_half_even(x, shift)),
            Coef::Bint(x) => Coef::Bint(bint::rsh_half_even(&x, shift as u64)),
        }
    }
}

/// Parses a signed decimal literal at the natural (smallest lossless) scale.
pub fn parse(s: &str) -> Result<Decimal> {
    parse_exact(s, 0)
}

/// Parses a signed decimal literal, padding the result's scale up to at least `min_scale` when
/// possible.
pub fn parse_exact(s: &str, min_scale: u8) -> Result<Decimal> {
    if s.is_empty() {
        return Err(ParseErrorKind::Empty.into());
    }

    let mut chars = s.chars().peekable();
    let mut neg = false;
    let mut seen_sign = false;

    if let Some(&c) = chars.peek() {
        if c == '+' || c == '-' {
            neg = c == '-';
            seen_sign = true;
            chars.next();
        }
    }

    let mut coef = Coef::Fint(0);
    let mut frac_digits: u32 = 0;
    let mut seen_point = false;
    let mut any_digits = false;

    loop {
        match chars.peek() {
            Some(&c) if c.is_ascii_digit() => {
                let d = c as u64 - '0' as u64;
                coef = coef.push_digit(d);
                any_digits = true;
                if seen_point {
                    frac_digits += 1;
                }
                chars.next();
            }
            Some('.') => {
                if seen_point {
                    return Err(ParseErrorKind::MultiplePoints.into());
                }
                seen_point = true;
                chars.next();
            }
            Some(&c) if c == '+' || c == '-' => {
                return if seen_sign {
                    Err(ParseErrorKind::MultipleSigns.into())
                } else {
                    Err(ParseErrorKind::UnexpectedChar.into())
                };
            }
            Some('e') | Some('E') => break,
            Some(_) => return Err(ParseErrorKind::UnexpectedChar.into()),
            None => break,
        }
    }

    if !any_digits {
        return Err(ParseErrorKind::NoDigits.into());
    }

    let mut exponent: i64 = 0;
    if matches!(chars.peek(), Some('e') | Some('E')) {
        chars.next();
        let mut exp_neg = false;
        if let Some(&c) = chars.peek() {
            if c == '+' || c == '-' {
                exp_neg = c == '-';
                chars.next();
            }
        }
        let mut exp_digits: u32 = 0;
        let mut exp_val: i64 = 0;
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                exp_val = exp_val.saturating_mul(10).saturating_add(c as i64 - '0' as i64);
                exp_digits += 1;
                chars.next();
                if exp_val > MAX_EXPONENT_MAGNITUDE * 100 {
                    return Err(ParseErrorKind::ExponentRange.into());
                }
            } else {
                break;
            }
        }
        if exp_digits == 0 {
            return Err(ParseErrorKind::MissingExponentDigits.into());
        }
        exponent = if exp_neg { -exp_val } else { exp_val };
        if exponent.abs() > MAX_EXPONENT_MAGNITUDE {
            return Err(ParseErrorKind::ExponentRange.into());
        }
    }

    if chars.peek().is_some() {
        return Err(ParseErrorKind::UnexpectedChar.into());
    }

    let implicit_scale: i64 = frac_digits as i64 - exponent;

    let coef = if implicit_scale < 0 {
        coef.lsh((-implicit_scale) as u32)
    } else {
        coef
    };
    let scale_before_cap = implicit_scale.max(0);

    let (coef, scale) = if scale_before_cap > MAX_SCALE as i64 {
        let shift = (scale_before_cap - MAX_SCALE as i64) as u32;
        (coef.rsh_half_even(shift), MAX_SCALE)
    } else {
        (coef, scale_before_cap as u8)
    };

    match coef {
        Coef::Fint(x) => ctor::new_from_fint(neg, x, scale, min_scale),
        Coef::Bint(x) => ctor::new_from_bint(neg, &x, scale, min_scale),
    }
}
