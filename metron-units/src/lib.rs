//! Metron Units - Mass, volume and temperature quantities
//!
//! Quantities are built from a value in any supported unit, converted
//! between units, shown in a "best" unit, and round-tripped through text.
//!
//! Kinds:
//! - Mass (mg, g, kg, lb, oz)
//! - Volume (ml, l, gal, fl. oz)
//! - Temperature (°C, °F)
//!
//! One generic [`Quantity`] is instantiated per kind through its unit enum:
//!
//! ```
//! use metron_units::{Mass, Temperature};
//!
//! assert_eq!(Mass::from_gram(1000.0).to_string(), "1.00 kg");
//! assert_eq!(Mass::parse("1kg"), Mass::from_kilogram(1.0));
//! assert_eq!(Temperature::from_celsius(50.0).fahrenheit(), 122.0);
//! ```

mod unit;
mod registry;
mod quantity;
mod mass;
mod volume;
mod temperature;
pub mod parse;
pub mod marshal;

pub use unit::{Scale, Unit, UnitDef};
pub use registry::UnitRegistry;
pub use quantity::Quantity;
pub use mass::{Mass, MassUnit};
pub use volume::{Volume, VolumeUnit};
pub use temperature::{Temperature, TemperatureUnit};
pub use marshal::{marshal, unmarshal, Encoding, Measurable};
pub use metron_core::{ConversionError, MeasurementSystem};
