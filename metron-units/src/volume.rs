//! Volume: milliliters, liters, imperial gallons and imperial fluid ounces
//!
//! Canonical fields are liters (metric) and gallons (imperial).

use std::fmt;
use std::sync::LazyLock;
use metron_core::MeasurementSystem::{Imperial, Metric};
use crate::{Quantity, Scale, Unit, UnitDef, UnitRegistry};

const LITERS_PER_GALLON: f64 = 4.54609;

/// A volume quantity
pub type Volume = Quantity<VolumeUnit>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeUnit {
    Milliliter,
    Liter,
    Gallon,
    FluidOunce,
}

static MILLILITER: UnitDef = UnitDef::new("ml", "milliliter", Metric, Scale::Primary, 1000.0, 0);
static LITER: UnitDef = UnitDef::new("l", "liter", Metric, Scale::Primary, 1.0, 2);
static GALLON: UnitDef = UnitDef::new("gal", "gallon", Imperial, Scale::Secondary, 1.0, 2);
static FLUID_OUNCE: UnitDef = UnitDef::new("fl. oz", "fluid ounce", Imperial, Scale::Secondary, 160.0, 2);

static VOLUME_UNITS: LazyLock<UnitRegistry<VolumeUnit>> = LazyLock::new(|| {
    let mut registry = UnitRegistry::new();
    registry.register(VolumeUnit::Milliliter);
    registry.register(VolumeUnit::Liter);
    registry.register(VolumeUnit::Gallon);
    registry.register(VolumeUnit::FluidOunce);

    registry.alias("fl oz", VolumeUnit::FluidOunce);
    registry.alias("liter", VolumeUnit::Liter);
    registry.alias("liters", VolumeUnit::Liter);
    registry.alias("litre", VolumeUnit::Liter);
    registry.alias("litres", VolumeUnit::Liter);
    registry.alias("gallon", VolumeUnit::Gallon);
    registry.alias("gallons", VolumeUnit::Gallon);
    registry
});

impl Unit for VolumeUnit {
    const KIND: &'static str = "volume";
    const SEPARATOR: &'static str = " ";
    const DEFAULT: Self = VolumeUnit::Liter;

    fn def(self) -> &'static UnitDef {
        match self {
            VolumeUnit::Milliliter => &MILLILITER,
            VolumeUnit::Liter => &LITER,
            VolumeUnit::Gallon => &GALLON,
            VolumeUnit::FluidOunce => &FLUID_OUNCE,
        }
    }

    fn cross(from: Scale, value: f64) -> f64 {
        match from {
            Scale::Primary => value / LITERS_PER_GALLON,
            Scale::Secondary => value * LITERS_PER_GALLON,
        }
    }

    fn best_unit(volume: &Volume) -> Self {
        if volume.system() == Some(Imperial) {
            return VolumeUnit::Gallon;
        }

        if volume.liters() < 1.0 {
            VolumeUnit::Milliliter
        } else {
            VolumeUnit::Liter
        }
    }

    fn registry() -> &'static UnitRegistry<Self> {
        &VOLUME_UNITS
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Volume {
    pub fn from_milliliter(value: f64) -> Self {
        Self::new(value, VolumeUnit::Milliliter)
    }

    pub fn from_liter(value: f64) -> Self {
        Self::new(value, VolumeUnit::Liter)
    }

    pub fn from_gallon(value: f64) -> Self {
        Self::new(value, VolumeUnit::Gallon)
    }

    pub fn from_fluid_ounce(value: f64) -> Self {
        Self::new(value, VolumeUnit::FluidOunce)
    }

    pub fn milliliters(&self) -> f64 {
        self.to(VolumeUnit::Milliliter)
    }

    pub fn liters(&self) -> f64 {
        self.to(VolumeUnit::Liter)
    }

    pub fn gallons(&self) -> f64 {
        self.to(VolumeUnit::Gallon)
    }

    pub fn fluid_ounces(&self) -> f64 {
        self.to(VolumeUnit::FluidOunce)
    }
}
