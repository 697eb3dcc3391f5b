//! Canonical text formatting, the named formatter verbs, and [`FromStr`] parsing.

use crate::ctor;
use crate::decimal::Decimal;
use crate::error::{Error, Result};
use crate::fint;
use crate::parse;
use core::fmt;
use core::str::FromStr;

/// The canonical text form: optional `-`, integer part with no leading zeros (except a bare
/// `0`), and if `scale > 0` a `.` followed by exactly `scale` fractional digits. Never uses
/// exponent notation.
pub fn canonical_text(d: &Decimal) -> String {
    let digits = d.coef.to_string();
    let scale = d.scale as usize;
    let mut out = String::with_capacity(digits.len() + 2);
    if d.neg {
        out.push('-');
    }
    if scale == 0 {
        out.push_str(&digits);
        return out;
    }
    if digits.len() <= scale {
        out.push('0');
        out.push('.');
        for _ in 0..(scale - digits.len()) {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        let split = digits.len() - scale;
        out.push_str(&digits[..split]);
        out.push('.');
        out.push_str(&digits[split..]);
    }
    out
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&canonical_text(self))
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse::parse(s)
    }
}

/// `"text"`, with the canonical form wrapped in double quotes.
pub fn quoted_text(d: &Decimal) -> String {
    format!("\"{}\"", canonical_text(d))
}

/// `coef * 100` printed as plain text, suffixed `%`. Keeps the source's literal overflow-prone
/// implementation rather than the scale-only reinterpretation that would never overflow:
/// multiplying the coefficient is what actually happens here, and it can fail. The two trailing
/// zero digits the multiply introduces are then shed back out of the scale (at most `d.scale`
/// of them), so the result is `d`'s value times 100 at its minimal representable scale, not
/// `d`'s value times 10000.
pub fn percent(d: &Decimal) -> Result<String> {
    let scaled_coef = fint::mul(d.coef, 100).ok_or(Error::DecimalOverflow)?;
    let shift = d.scale.min(2);
    let new_scale = d.scale - shift;
    let new_coef = scaled_coef / fint::POW10[shift as usize];
    let shown = Decimal::new_unchecked(d.neg, new_coef, new_scale);
    Ok(format!("{}%", canonical_text(&shown)))
}

/// Rounds or pads `d` to exactly `scale` fractional digits, then renders the canonical form.
pub fn fixed_precision(d: &Decimal, scale: u8) -> String {
    canonical_text(&ctor::rescale(d, scale))
}

/// Horizontal alignment for [`FormatOptions::width`] padding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Width/fill/sign options shared by every verb.
#[derive(Clone, Debug)]
pub struct FormatOptions {
    pub width: usize,
    pub fill: char,
    pub align: Align,
    pub show_plus: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            width: 0,
            fill: ' ',
            align: Align::Right,
            show_plus: false,
        }
    }
}

fn apply_options(mut text: String, neg: bool, opts: &FormatOptions) -> String {
    if opts.show_plus && !neg && !text.starts_with('+') {
        text.insert(0, '+');
    }
    if text.len() >= opts.width {
        return text;
    }
    let pad = opts.width - text.len();
    match opts.align {
        Align::Left => {
            text.extend(std::iter::repeat(opts.fill).take(pad));
            text
        }
        Align::Right => {
            let mut out: String = std::iter::repeat(opts.fill).take(pad).collect();
            out.push_str(&text);
            out
        }
    }
}

/// A named formatter verb, mirroring the source's print-system integration. `Other` covers any
/// verb name the core doesn't recognise, which resolves to a diagnostic placeholder instead of
/// an error.
pub enum Verb<'a> {
    Text,
    QuotedText,
    Percent,
    FixedPrecision(u8),
    Other(&'a str),
}

/// Renders `d` under `verb` with `opts` applied. Percent overflow is the only verb that can
/// fail; every other verb always succeeds.
pub fn format_verb(d: &Decimal, verb: Verb<'_>, opts: &FormatOptions) -> Result<String> {
    let rendered = match verb {
        Verb::Text => canonical_text(d),
        Verb::QuotedText => quoted_text(d),
        Verb::Percent => percent(d)?,
        Verb::FixedPrecision(scale) => fixed_precision(d, scale),
        Verb::Other(name) => return Ok(format!("<unsupported verb: {name}>")),
    };
    Ok(apply_options(rendered, d.is_negative(), opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctor::new_safe;

    #[test]
    fn canonical_text_pads_leading_zero() {
        let d = new_safe(false, 5, 3).unwrap(); // 0.005
        assert_eq!(canonical_text(&d), "0.005");
    }

    #[test]
    fn canonical_text_handles_negative_and_integer() {
        let d = new_safe(true, 42, 0).unwrap();
        assert_eq!(canonical_text(&d), "-42");
    }

    #[test]
    fn display_and_from_str_round_trip() {
        let d = new_safe(false, 12345, 2).unwrap();
        let text = d.to_string();
        let parsed: Decimal = text.parse().unwrap();
        assert_eq!(parsed, d);
    }

    #[test]
    fn percent_shifts_the_point() {
        let d = new_safe(false, 5, 2).unwrap(); // 0.05
        assert_eq!(percent(&d).unwrap(), "5%");
    }

    #[test]
    fn percent_overflow_is_reported() {
        let d = new_safe(false, crate::fint::MAX_FINT, 0).unwrap();
        assert_eq!(percent(&d), Err(Error::DecimalOverflow));
    }

    #[test]
    fn width_and_sign_options_apply() {
        let d = new_safe(false, 5, 0).unwrap();
        let opts = FormatOptions {
            width: 4,
            fill: '0',
            align: Align::Right,
            show_plus: true,
        };
        assert_eq!(format_verb(&d, Verb::Text, &opts).unwrap(), "00+5");
    }

    #[test]
    fn unsupported_verb_is_a_placeholder() {
        let d = new_safe(false, 5, 0).unwrap();
        let rendered = format_verb(&d, Verb::Other("hex"), &FormatOptions::default()).unwrap();
        assert_eq!(rendered, "<unsupported verb: hex>");
    }
}
