use thiserror::Error;

/// The offending grammar rule when [`crate::parse`] or [`crate::parse_exact`] rejects input.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input was empty.
    #[error("empty input")]
    Empty,
    /// A character outside the decimal grammar was encountered.
    #[error("unexpected character")]
    UnexpectedChar,
    /// More than one sign was given.
    #[error("multiple signs")]
    MultipleSigns,
    /// More than one decimal point was given.
    #[error("multiple decimal points")]
    MultiplePoints,
    /// An exponent marker (`e`/`E`) was not followed by any digits.
    #[error("missing exponent digits")]
    MissingExponentDigits,
    /// The exponent's magnitude is outside the supported range.
    #[error("exponent out of range")]
    ExponentRange,
    /// Neither an integer part nor a fraction part carried any digits.
    #[error("no digits")]
    NoDigits,
}

/// The offending rule when [`crate::Decimal::from_bcd`] rejects a byte slice.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BcdErrorKind {
    /// The byte slice was empty.
    #[error("empty input")]
    Empty,
    /// A nibble outside `0..=9` was found where a digit was expected.
    #[error("invalid digit nibble")]
    InvalidDigit,
    /// The trailing nibble was not one of the two recognised sign nibbles.
    #[error("missing or invalid sign nibble")]
    InvalidSign,
    /// The decoded coefficient carries more than [`crate::MAX_PREC`] digits.
    #[error("too many digits")]
    TooManyDigits,
    /// The trailing scale byte is outside `[0, MAX_SCALE]`.
    #[error("scale out of range")]
    InvalidScale,
}

/// Every way a fixed-precision decimal operation can fail.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The coefficient would need more than [`crate::MAX_PREC`] digits and rounding cannot
    /// bring it back into the envelope.
    #[error("decimal coefficient overflow")]
    DecimalOverflow,
    /// A requested scale fell outside `[0, MAX_SCALE]`, or a `*_exact` call's `min_scale`
    /// could not be honoured without losing significant digits.
    #[error("scale out of range")]
    ScaleRange,
    /// The divisor was the zero decimal.
    #[error("division by zero")]
    DivisionByZero,
    /// A fast-path division would have truncated; surfaced only from `quo_exact`.
    #[error("inexact division")]
    InexactDivision,
    /// `clamp` was called with `min > max`.
    #[error("clamp bounds reversed")]
    ClampBounds,
    /// The input text did not match the decimal grammar.
    #[error("parse error: {0}")]
    Parse(#[from] ParseErrorKind),
    /// The packed BCD byte slice was malformed.
    #[error("invalid BCD: {0}")]
    InvalidBcd(#[from] BcdErrorKind),
    /// An integer or float conversion target cannot represent the value.
    #[error("conversion out of range")]
    ConversionRange,
    /// The argument to a transcendental function was outside its domain.
    #[error("argument out of domain")]
    DomainError,
}

/// The crate's result alias.
pub type Result<T> = core::result::Result<T, Error>;
