//! Quantity type - a value of one kind with the unit it came from

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use metron_core::{number, ConversionError, MeasurementSystem};
use crate::parse::parse_quantity;
use crate::unit::{Scale, Unit};

/// An immutable physical quantity.
///
/// Holds both canonical fields of its kind (e.g., grams and pounds) plus the
/// unit it was constructed from. The origin only steers [`Quantity::best_unit`];
/// equality compares the canonical fields alone.
#[derive(Debug, Clone, Copy)]
pub struct Quantity<U: Unit> {
    origin: U,
    primary: f64,
    secondary: f64,
}

impl<U: Unit> Quantity<U> {
    /// Create a quantity from a value in `unit`
    pub fn new(value: f64, unit: U) -> Self {
        let def = unit.def();
        let reference = def.to_reference(value);

        let (primary, secondary) = match def.scale {
            Scale::Primary => (reference, U::cross(Scale::Primary, reference)),
            Scale::Secondary => (U::cross(Scale::Secondary, reference), reference),
        };

        Quantity {
            origin: unit,
            primary,
            secondary,
        }
    }

    /// The zero value: every canonical field is 0.0
    pub fn zero() -> Self {
        Quantity {
            origin: U::DEFAULT,
            primary: 0.0,
            secondary: 0.0,
        }
    }

    /// Parse strings like "100 g" or "15°C". Never fails; see [`crate::parse`].
    pub fn parse(input: &str) -> Self {
        parse_quantity(input)
    }

    pub fn is_zero(&self) -> bool {
        self.primary == 0.0 && self.secondary == 0.0
    }

    /// Unit this quantity was constructed from
    pub fn origin(&self) -> U {
        self.origin
    }

    /// Measurement system of the origin unit
    pub fn system(&self) -> Option<MeasurementSystem> {
        self.origin.system()
    }

    /// Value expressed in `unit`
    pub fn to(&self, unit: U) -> f64 {
        let def = unit.def();
        let reference = match def.scale {
            Scale::Primary => self.primary,
            Scale::Secondary => self.secondary,
        };
        def.from_reference(reference)
    }

    /// Value expressed in the unit named by `symbol`
    pub fn value_in(&self, symbol: &str) -> Result<f64, ConversionError> {
        U::registry()
            .get(symbol)
            .map(|unit| self.to(unit))
            .ok_or_else(|| ConversionError::invalid_unit(symbol, U::KIND))
    }

    pub fn best_unit(&self) -> U {
        U::best_unit(self)
    }

    /// Display string in `unit`, at that unit's precision
    pub fn format_in(&self, unit: U) -> String {
        let value = number::format_with_precision(self.to(unit), unit.def().precision);
        format!("{}{}{}", value, U::SEPARATOR, unit.symbol())
    }

    /// Display string in the unit named by `symbol`, or "" when it is unknown
    pub fn to_string_in(&self, symbol: &str) -> String {
        match U::registry().get(symbol) {
            Some(unit) => self.format_in(unit),
            None => String::new(),
        }
    }

    /// Rebuild this quantity from its origin-unit value rounded to `decimals`
    pub fn rounded(&self, decimals: u32) -> Self {
        let value = number::round(self.to(self.origin), decimals);
        Self::new(value, self.origin)
    }
}

impl<U: Unit> Default for Quantity<U> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.primary == other.primary && self.secondary == other.secondary
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_in(self.best_unit()))
    }
}

impl<U: Unit> FromStr for Quantity<U> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<U: Unit> From<&str> for Quantity<U> {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
