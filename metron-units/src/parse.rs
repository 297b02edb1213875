//! Quantity string parsing - parse strings like "100 g", "1.5kg" or "15°C"
//!
//! Parsing never fails. Input that does not match the pattern, names an
//! unknown unit, or carries an unreadable number yields the zero value.

use std::sync::LazyLock;
use regex::Regex;
use tracing::debug;
use crate::{Quantity, Unit};

const VALUE_GROUP: usize = 1;
const UNIT_GROUP: usize = 3;

/// Numeric literal, optional single whitespace, 1-7 non-digit unit characters
static QUANTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([-+]?[0-9]*\.?[0-9]*)(\s?)([^0-9]{1,7})").unwrap()
});

/// Split `input` into its numeric literal and unit token.
///
/// The search is unanchored and takes the leftmost match. The numeric
/// literal may be empty.
pub fn split_quantity(input: &str) -> Option<(&str, &str)> {
    let captures = QUANTITY_PATTERN.captures(input)?;
    let value = captures.get(VALUE_GROUP).map_or("", |m| m.as_str());
    let unit = captures.get(UNIT_GROUP)?.as_str();
    Some((value, unit))
}

/// Parse a quantity string using the unit table of `U`
pub fn parse_quantity<U: Unit>(input: &str) -> Quantity<U> {
    let Some((literal, symbol)) = split_quantity(input) else {
        debug!(input, kind = U::KIND, "no quantity pattern found, using zero value");
        return Quantity::zero();
    };

    let Some(unit) = U::registry().get(symbol) else {
        debug!(input, symbol, kind = U::KIND, "unknown unit, using zero value");
        return Quantity::zero();
    };

    let value = literal.parse::<f64>().unwrap_or_else(|_| {
        debug!(input, literal, "unreadable number, using 0");
        0.0
    });

    Quantity::new(value, unit)
}
