//! `serde` support. A decimal serializes as its canonical text form, and deserializes from
//! either that text or a native JSON number (useful for config files authored by hand).

use crate::decimal::Decimal;
use crate::format::canonical_text;
use crate::parse;
use core::fmt;
use serde::de::{Deserializer, Error as DeError, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&canonical_text(self))
    }
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal number, as text or a native number")
    }

    fn visit_str<E>(self, value: &str) -> Result<Decimal, E>
    where
        E: DeError,
    {
        parse::parse(value).map_err(DeError::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Decimal, E>
    where
        E: DeError,
    {
        self.visit_str(&value.to_string())
    }

    fn visit_u64<E>(self, value: u64) -> Result<Decimal, E>
    where
        E: DeError,
    {
        self.visit_str(&value.to_string())
    }

    fn visit_f64<E>(self, value: f64) -> Result<Decimal, E>
    where
        E: DeError,
    {
        self.visit_str(&value.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor)
    }
}
