//! Per-kind unit registries
//!
//! Each kind builds one registry in a `LazyLock` static. Registries are never
//! mutated after that, so they can be read from any thread.

use std::collections::HashMap;
use crate::Unit;

/// Registry of the units of one kind, keyed by lower-cased symbol
pub struct UnitRegistry<U: Unit> {
    units: Vec<U>,
    symbols: HashMap<String, U>,
}

impl<U: Unit> UnitRegistry<U> {
    pub fn new() -> Self {
        UnitRegistry {
            units: Vec::new(),
            symbols: HashMap::new(),
        }
    }

    /// Register a unit under its display symbol
    pub fn register(&mut self, unit: U) {
        self.units.push(unit);
        self.symbols.insert(unit.symbol().to_lowercase(), unit);
    }

    /// Register an additional symbol for a unit
    pub fn alias(&mut self, alias: &str, unit: U) {
        self.symbols.insert(alias.to_lowercase(), unit);
    }

    /// Get a unit by symbol or alias, ignoring case
    pub fn get(&self, symbol: &str) -> Option<U> {
        self.symbols.get(&symbol.to_lowercase()).copied()
    }

    /// Units in registration order
    pub fn units(&self) -> &[U] {
        &self.units
    }

    /// All known symbols and aliases, sorted
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.symbols.keys().map(|s| s.as_str()).collect();
        symbols.sort_unstable();
        symbols
    }
}

impl<U: Unit> Default for UnitRegistry<U> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MassUnit, TemperatureUnit, VolumeUnit};

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = MassUnit::registry();
        assert_eq!(registry.get("kg"), Some(MassUnit::Kilogram));
        assert_eq!(registry.get("KG"), Some(MassUnit::Kilogram));
        assert_eq!(registry.get("Lb"), Some(MassUnit::Pound));
    }

    #[test]
    fn test_aliases() {
        let registry = MassUnit::registry();
        assert_eq!(registry.get("lbs"), Some(MassUnit::Pound));
        assert_eq!(registry.get("grams"), Some(MassUnit::Gram));

        let registry = VolumeUnit::registry();
        assert_eq!(registry.get("fl oz"), Some(VolumeUnit::FluidOunce));
        assert_eq!(registry.get("litres"), Some(VolumeUnit::Liter));
    }

    #[test]
    fn test_multibyte_symbols() {
        let registry = TemperatureUnit::registry();
        assert_eq!(registry.get("°C"), Some(TemperatureUnit::Celsius));
        assert_eq!(registry.get("ºc"), Some(TemperatureUnit::Celsius));
        assert_eq!(registry.get("°F"), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(registry.get("F"), Some(TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(MassUnit::registry().get("xyz"), None);
        assert_eq!(VolumeUnit::registry().get("kg"), None);
    }

    #[test]
    fn test_units_in_registration_order() {
        assert_eq!(
            MassUnit::registry().units(),
            &[MassUnit::Milligram, MassUnit::Gram, MassUnit::Kilogram, MassUnit::Pound, MassUnit::Ounce]
        );
    }

    #[test]
    fn test_symbols_sorted() {
        let symbols = TemperatureUnit::registry().symbols();
        assert_eq!(symbols, vec!["c", "f", "°c", "°f", "ºc", "ºf"]);
    }

    #[test]
    fn test_manual_registry() {
        let mut registry = UnitRegistry::new();
        registry.register(MassUnit::Gram);
        registry.alias("GRAMME", MassUnit::Gram);

        assert_eq!(registry.get("gramme"), Some(MassUnit::Gram));
        assert_eq!(registry.get("kg"), None);
        assert_eq!(registry.units(), &[MassUnit::Gram]);
    }
}
