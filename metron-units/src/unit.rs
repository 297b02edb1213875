//! Unit representation with conversion factors

use std::fmt;
use std::hash::Hash;
use metron_core::MeasurementSystem;
use crate::{Quantity, UnitRegistry};

/// One of the two canonical fields a quantity stores.
///
/// Mass keeps grams and pounds, volume keeps liters and gallons, temperature
/// keeps celsius and fahrenheit. Every unit is anchored to exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Primary,
    Secondary,
}

/// Static description of a unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    /// Display symbol (e.g., "kg", "°C")
    pub symbol: &'static str,
    /// Human name (e.g., "kilogram")
    pub name: &'static str,
    /// Canonical field this unit is measured against
    pub scale: Scale,
    /// How many of this unit make one reference unit of its scale
    pub per_reference: f64,
    /// Digits after the decimal point when displayed
    pub precision: u32,
    /// `None` for units outside the metric/imperial split (temperature)
    pub system: Option<MeasurementSystem>,
}

impl UnitDef {
    /// Create a unit belonging to a measurement system
    pub const fn new(
        symbol: &'static str,
        name: &'static str,
        system: MeasurementSystem,
        scale: Scale,
        per_reference: f64,
        precision: u32,
    ) -> Self {
        UnitDef {
            symbol,
            name,
            scale,
            per_reference,
            precision,
            system: Some(system),
        }
    }

    /// Create a unit that sits outside metric/imperial
    pub const fn without_system(
        symbol: &'static str,
        name: &'static str,
        scale: Scale,
        per_reference: f64,
        precision: u32,
    ) -> Self {
        UnitDef {
            symbol,
            name,
            scale,
            per_reference,
            precision,
            system: None,
        }
    }

    /// Convert a value in this unit to its reference unit
    pub fn to_reference(&self, value: f64) -> f64 {
        value / self.per_reference
    }

    /// Convert a reference value to this unit
    pub fn from_reference(&self, reference: f64) -> f64 {
        reference * self.per_reference
    }
}

/// A unit of one quantity kind.
///
/// Implemented by the per-kind unit enums. The trait carries everything the
/// generic [`Quantity`] needs: the unit table, the cross conversion between
/// the two canonical fields, and the best-unit rule.
pub trait Unit: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Kind name used in error messages (e.g., "mass")
    const KIND: &'static str;

    /// Placed between number and symbol in the display form
    const SEPARATOR: &'static str;

    /// Origin unit of the zero-value quantity
    const DEFAULT: Self;

    fn def(self) -> &'static UnitDef;

    /// Convert a value on scale `from` to the other scale
    fn cross(from: Scale, value: f64) -> f64;

    /// Display unit for `quantity`, chosen from its origin and magnitude
    fn best_unit(quantity: &Quantity<Self>) -> Self;

    fn registry() -> &'static UnitRegistry<Self>;

    fn symbol(self) -> &'static str {
        self.def().symbol
    }

    fn system(self) -> Option<MeasurementSystem> {
        self.def().system
    }
}
