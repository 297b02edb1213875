//! Measurement systems

use std::fmt;
use serde::{Deserialize, Serialize};

/// Groups units into metric and imperial families.
///
/// The system a quantity was constructed from biases which unit it is
/// displayed in. Temperature units belong to neither system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    #[default]
    Metric,
    Imperial,
}

impl MeasurementSystem {
    pub fn name(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(MeasurementSystem::Metric.to_string(), "metric");
        assert_eq!(MeasurementSystem::Imperial.to_string(), "imperial");
    }

    #[test]
    fn test_default_is_metric() {
        assert_eq!(MeasurementSystem::default(), MeasurementSystem::Metric);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&MeasurementSystem::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");

        let system: MeasurementSystem = serde_json::from_str("\"metric\"").unwrap();
        assert_eq!(system, MeasurementSystem::Metric);
    }
}
