//! Text serialization of quantities
//!
//! A quantity serializes as its display string wrapped in double quotes
//! (`"100.00 g"`). Reading accepts quoted or bare text and, like parsing,
//! never fails: anything unreadable becomes the zero value.
//!
//! The serde `Deserialize` impl goes through `deserialize_any`, so it needs a
//! self-describing format such as JSON; non-self-describing formats like
//! bincode are not supported.

use std::fmt;
use std::marker::PhantomData;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use crate::{Quantity, Unit};

const QUOTE: u8 = b'"';

/// How a measurable value is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Display string wrapped in quotes
    QuantityString,
    /// Display string written bare, for values that are plain numbers
    RawNumber,
}

/// A value that can go through [`marshal`]
pub trait Measurable: fmt::Display {
    const ENCODING: Encoding = Encoding::QuantityString;

    fn is_zero(&self) -> bool;
}

impl<U: Unit> Measurable for Quantity<U> {
    fn is_zero(&self) -> bool {
        Quantity::is_zero(self)
    }
}

/// Encode `input` according to its [`Encoding`]
pub fn marshal<M: Measurable>(input: &M) -> Vec<u8> {
    match M::ENCODING {
        Encoding::QuantityString => format!("\"{}\"", input).into_bytes(),
        Encoding::RawNumber => input.to_string().into_bytes(),
    }
}

/// Decode a quantity, with or without surrounding quotes
pub fn unmarshal<U: Unit>(bytes: &[u8]) -> Quantity<U> {
    let raw = String::from_utf8_lossy(unquote_if_quoted(bytes));
    Quantity::parse(&raw)
}

/// Strip one pair of surrounding double quotes.
///
/// Only strips when both ends are quotes and something sits between them;
/// anything else is returned unchanged.
pub fn unquote_if_quoted(bytes: &[u8]) -> &[u8] {
    match bytes {
        [QUOTE, inner @ .., QUOTE] if !inner.is_empty() => inner,
        _ => bytes,
    }
}

impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QuantityVisitor(PhantomData))
    }
}

struct QuantityVisitor<U>(PhantomData<U>);

impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U> {
    type Value = Quantity<U>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} string such as \"100 g\"", U::KIND)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Quantity::parse(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(unmarshal(v))
    }

    // A bare number has no unit, so it degrades like "16" does
    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
        Ok(Quantity::zero())
    }

    fn visit_i64<E: de::Error>(self, _v: i64) -> Result<Self::Value, E> {
        Ok(Quantity::zero())
    }

    fn visit_u64<E: de::Error>(self, _v: u64) -> Result<Self::Value, E> {
        Ok(Quantity::zero())
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(Quantity::zero())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Quantity::zero())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Quantity::zero())
    }
}
