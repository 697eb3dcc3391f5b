//! Infallible (`Cast`) and fallible (`TryCast`) numeric conversions, generalizing the source's
//! `Cast<T>` trait to a fixed-precision decimal whose envelope not every integer fits.

use crate::convert;
use crate::ctor;
use crate::decimal::Decimal;
use crate::error::{Error, Result};

/// A conversion the target can always perform, mirroring `core::convert::From`.
pub trait Cast<T> {
    fn cast(value: T) -> Self;
}

/// A conversion that can fail because the source value doesn't fit the target's envelope.
pub trait TryCast<T>: Sized {
    fn try_cast(value: T) -> Result<Self>;
}

macro_rules! cast_signed {
    ($($int:ty),*) => {$(
        impl Cast<$int> for Decimal {
            fn cast(value: $int) -> Self {
                let v = value as i64;
                Decimal::new_unchecked(v < 0, v.unsigned_abs(), 0)
            }
        }
    )*};
}

macro_rules! cast_unsigned {
    ($($int:ty),*) => {$(
        impl Cast<$int> for Decimal {
            fn cast(value: $int) -> Self {
                Decimal::new_unchecked(false, value as u64, 0)
            }
        }
    )*};
}

cast_signed!(i8, i16, i32, i64);
cast_unsigned!(u8, u16, u32);

impl TryCast<u64> for Decimal {
    fn try_cast(value: u64) -> Result<Self> {
        ctor::new_safe(false, value, 0)
    }
}

impl TryCast<f64> for Decimal {
    fn try_cast(value: f64) -> Result<Self> {
        convert::from_f64(value)
    }
}

impl Cast<Decimal> for f64 {
    fn cast(value: Decimal) -> Self {
        convert::to_f64(&value)
    }
}

impl TryCast<Decimal> for i64 {
    fn try_cast(value: Decimal) -> Result<Self> {
        let rounded = ctor::rescale(&value, 0);
        let mag: i64 = rounded
            .coefficient()
            .try_into()
            .map_err(|_| Error::ConversionRange)?;
        Ok(if rounded.is_negative() { -mag } else { mag })
    }
}

impl TryCast<Decimal> for u64 {
    fn try_cast(value: Decimal) -> Result<Self> {
        if value.is_negative() && !value.is_zero() {
            return Err(Error::ConversionRange);
        }
        let rounded = ctor::rescale(&value, 0);
        Ok(rounded.coefficient())
    }
}
