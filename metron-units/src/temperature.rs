//! Temperature: celsius and fahrenheit
//!
//! Conversion is affine, so both readings are kept. A temperature always
//! displays in the unit it was constructed from.

use std::fmt;
use std::sync::LazyLock;
use crate::{Quantity, Scale, Unit, UnitDef, UnitRegistry};

/// A temperature quantity
pub type Temperature = Quantity<TemperatureUnit>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

static CELSIUS: UnitDef = UnitDef::without_system("°C", "celsius", Scale::Primary, 1.0, 0);
static FAHRENHEIT: UnitDef = UnitDef::without_system("°F", "fahrenheit", Scale::Secondary, 1.0, 0);

static TEMPERATURE_UNITS: LazyLock<UnitRegistry<TemperatureUnit>> = LazyLock::new(|| {
    let mut registry = UnitRegistry::new();
    registry.register(TemperatureUnit::Celsius);
    registry.register(TemperatureUnit::Fahrenheit);

    // masculine ordinal (º) is a common stand-in for the degree sign (°)
    registry.alias("c", TemperatureUnit::Celsius);
    registry.alias("ºc", TemperatureUnit::Celsius);
    registry.alias("f", TemperatureUnit::Fahrenheit);
    registry.alias("ºf", TemperatureUnit::Fahrenheit);
    registry
});

impl Unit for TemperatureUnit {
    const KIND: &'static str = "temperature";
    const SEPARATOR: &'static str = "";
    const DEFAULT: Self = TemperatureUnit::Celsius;

    fn def(self) -> &'static UnitDef {
        match self {
            TemperatureUnit::Celsius => &CELSIUS,
            TemperatureUnit::Fahrenheit => &FAHRENHEIT,
        }
    }

    fn cross(from: Scale, value: f64) -> f64 {
        match from {
            Scale::Primary => value * 1.8 + 32.0,
            Scale::Secondary => (value - 32.0) / 1.8,
        }
    }

    fn best_unit(temperature: &Temperature) -> Self {
        temperature.origin()
    }

    fn registry() -> &'static UnitRegistry<Self> {
        &TEMPERATURE_UNITS
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Temperature {
    pub fn from_celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    pub fn from_fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    pub fn celsius(&self) -> f64 {
        self.to(TemperatureUnit::Celsius)
    }

    pub fn fahrenheit(&self) -> f64 {
        self.to(TemperatureUnit::Fahrenheit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_celsius() {
        let temperature = Temperature::from_celsius(50.0);
        assert_eq!(temperature.celsius(), 50.0);
        assert_eq!(temperature.fahrenheit(), 122.0);
    }

    #[test]
    fn test_from_fahrenheit() {
        let temperature = Temperature::from_fahrenheit(68.0);
        assert_eq!(temperature.celsius(), 20.0);
        assert_eq!(temperature.fahrenheit(), 68.0);
    }

    #[test]
    fn test_display_keeps_origin_unit() {
        assert_eq!(Temperature::from_celsius(50.0).to_string(), "50°C");
        assert_eq!(Temperature::from_fahrenheit(15.0).to_string(), "15°F");
        assert_eq!(Temperature::from_fahrenheit(122.0).best_unit(), TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_display_rounds_to_integer() {
        assert_eq!(Temperature::from_celsius(15.5).to_string(), "16°C");
        assert_eq!(Temperature::from_celsius(-3.5).to_string(), "-4°C");
        assert_eq!(Temperature::from_celsius(100.0).to_string_in("f"), "212°F");
    }

    #[test]
    fn test_parse_every_symbol() {
        for input in ["1C", "1ºC", "1°C", "1 c"] {
            assert_eq!(Temperature::parse(input), Temperature::from_celsius(1.0), "{}", input);
        }
        for input in ["1F", "1ºF", "1°F"] {
            assert_eq!(Temperature::parse(input), Temperature::from_fahrenheit(1.0), "{}", input);
        }
    }

    #[test]
    fn test_zero_value() {
        assert!(Temperature::zero().is_zero());
        assert_eq!(Temperature::zero().to_string(), "0°C");
        // 0°C is 32°F, which is not the zero value
        assert!(!Temperature::from_celsius(0.0).is_zero());
    }

    #[test]
    fn test_string_round_trip_within_precision() {
        let quantities = [
            Temperature::from_celsius(180.4),
            Temperature::from_celsius(-17.8),
            Temperature::from_celsius(-0.3),
            Temperature::from_fahrenheit(350.6),
            Temperature::from_fahrenheit(-40.4),
        ];
        for temperature in quantities {
            let unit = temperature.best_unit();
            let shown = Temperature::parse(&temperature.to_string());
            assert_eq!(shown.origin(), unit, "{}", temperature);
            assert!((shown.to(unit) - temperature.to(unit)).abs() <= 0.5, "{}", temperature);
        }
    }
}
