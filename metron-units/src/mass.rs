//! Mass: milligrams, grams, kilograms, pounds and ounces
//!
//! Canonical fields are grams (metric) and pounds (imperial).

use std::fmt;
use std::sync::LazyLock;
use metron_core::MeasurementSystem::{Imperial, Metric};
use crate::{Quantity, Scale, Unit, UnitDef, UnitRegistry};

const GRAMS_PER_POUND: f64 = 453.592;

/// A mass quantity
pub type Mass = Quantity<MassUnit>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassUnit {
    Milligram,
    Gram,
    Kilogram,
    Pound,
    Ounce,
}

static MILLIGRAM: UnitDef = UnitDef::new("mg", "milligram", Metric, Scale::Primary, 1000.0, 0);
static GRAM: UnitDef = UnitDef::new("g", "gram", Metric, Scale::Primary, 1.0, 2);
static KILOGRAM: UnitDef = UnitDef::new("kg", "kilogram", Metric, Scale::Primary, 0.001, 2);
static POUND: UnitDef = UnitDef::new("lb", "pound", Imperial, Scale::Secondary, 1.0, 2);
static OUNCE: UnitDef = UnitDef::new("oz", "ounce", Imperial, Scale::Secondary, 16.0, 0);

static MASS_UNITS: LazyLock<UnitRegistry<MassUnit>> = LazyLock::new(|| {
    let mut registry = UnitRegistry::new();
    registry.register(MassUnit::Milligram);
    registry.register(MassUnit::Gram);
    registry.register(MassUnit::Kilogram);
    registry.register(MassUnit::Pound);
    registry.register(MassUnit::Ounce);

    registry.alias("gram", MassUnit::Gram);
    registry.alias("grams", MassUnit::Gram);
    registry.alias("lbs", MassUnit::Pound);
    registry.alias("pound", MassUnit::Pound);
    registry.alias("pounds", MassUnit::Pound);
    registry.alias("ounce", MassUnit::Ounce);
    registry.alias("ounces", MassUnit::Ounce);
    registry
});

impl Unit for MassUnit {
    const KIND: &'static str = "mass";
    const SEPARATOR: &'static str = " ";
    const DEFAULT: Self = MassUnit::Gram;

    fn def(self) -> &'static UnitDef {
        match self {
            MassUnit::Milligram => &MILLIGRAM,
            MassUnit::Gram => &GRAM,
            MassUnit::Kilogram => &KILOGRAM,
            MassUnit::Pound => &POUND,
            MassUnit::Ounce => &OUNCE,
        }
    }

    fn cross(from: Scale, value: f64) -> f64 {
        match from {
            Scale::Primary => value / GRAMS_PER_POUND,
            Scale::Secondary => value * GRAMS_PER_POUND,
        }
    }

    fn best_unit(mass: &Mass) -> Self {
        if mass.system() == Some(Imperial) {
            return if mass.pounds() < 1.0 { MassUnit::Ounce } else { MassUnit::Pound };
        }

        let grams = mass.grams();
        if grams >= 1000.0 {
            MassUnit::Kilogram
        } else if grams < 1.0 {
            MassUnit::Milligram
        } else {
            MassUnit::Gram
        }
    }

    fn registry() -> &'static UnitRegistry<Self> {
        &MASS_UNITS
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Mass {
    pub fn from_milligram(value: f64) -> Self {
        Self::new(value, MassUnit::Milligram)
    }

    pub fn from_gram(value: f64) -> Self {
        Self::new(value, MassUnit::Gram)
    }

    pub fn from_kilogram(value: f64) -> Self {
        Self::new(value, MassUnit::Kilogram)
    }

    pub fn from_pound(value: f64) -> Self {
        Self::new(value, MassUnit::Pound)
    }

    pub fn from_ounce(value: f64) -> Self {
        Self::new(value, MassUnit::Ounce)
    }

    pub fn milligrams(&self) -> f64 {
        self.to(MassUnit::Milligram)
    }

    pub fn grams(&self) -> f64 {
        self.to(MassUnit::Gram)
    }

    pub fn kilograms(&self) -> f64 {
        self.to(MassUnit::Kilogram)
    }

    pub fn pounds(&self) -> f64 {
        self.to(MassUnit::Pound)
    }

    pub fn ounces(&self) -> f64 {
        self.to(MassUnit::Ounce)
    }
}
