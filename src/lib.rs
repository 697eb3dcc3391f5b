#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod bcd;
mod bint;
mod cast;
mod consts;
mod convert;
mod ctor;
mod decimal;
mod error;
mod fint;
mod format;
mod must;
mod ops;
mod parse;

#[cfg(feature = "serde")]
mod serde_impl;

pub use bcd::{from_bcd, to_bcd};
pub use cast::{Cast, TryCast};
pub use consts::{E, HUNDRED, NEG_ONE, ONE, PI, TEN, THOUSAND, TWO, ZERO};
pub use convert::{from_f64, from_i64_parts, to_f64, to_i64_parts, to_i64_parts_at_scale};
pub use decimal::{Decimal, MAX_PREC, MAX_SCALE, MIN_SCALE};
pub use error::{BcdErrorKind, Error, ParseErrorKind, Result};
pub use format::{
    canonical_text, fixed_precision, format_verb, percent, quoted_text, Align, FormatOptions, Verb,
};
pub use must::{
    must_add, must_div, must_exp, must_log, must_mul, must_parse, must_pow, must_sqrt, must_sub,
};
pub use ops::add_sub::{add, add_exact, sub, sub_abs, sub_abs_exact, sub_exact};
pub use ops::cmp::{abs, clamp, cmp_total, compare, max, min, neg};
pub use ops::div::{divide, divide_exact, divide_with_remainder, inverse, quo_exact};
pub use ops::exp::{exp, exp_exact};
pub use ops::log::{log, log_exact};
pub use ops::mul::{
    fused_divide_add, fused_divide_add_exact, fused_multiply_add, fused_multiply_add_exact, mul,
    mul_exact,
};
pub use ops::pow::{pow, pow_exact};
pub use ops::sqrt::{sqrt, sqrt_exact};
pub use parse::{parse, parse_exact};

// `crate::cmp` is used throughout the arithmetic engine (equality, ordering, fixed-point
// helpers) as if it were a crate-root module; this re-export is what makes that resolve.
pub use ops::cmp;
