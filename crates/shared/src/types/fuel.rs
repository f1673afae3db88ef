//! Fuel grade classification for inflow records.

use serde::{Deserialize, Serialize};

/// Fuel grades accepted at a depot.
///
/// A closed set: deliveries outside these grades are rejected at the entry
/// form, so the core never sees an unknown grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelGrade {
    /// Standard diesel.
    Diesel,
    /// Biodiesel blend.
    Biodiesel,
    /// Gasoline.
    Petrol,
}

impl std::fmt::Display for FuelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Diesel => write!(f, "DIESEL"),
            Self::Biodiesel => write!(f, "BIODIESEL"),
            Self::Petrol => write!(f, "PETROL"),
        }
    }
}

impl std::str::FromStr for FuelGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DIESEL" => Ok(Self::Diesel),
            "BIODIESEL" => Ok(Self::Biodiesel),
            "PETROL" => Ok(Self::Petrol),
            _ => Err(format!("Unknown fuel grade: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("diesel", FuelGrade::Diesel)]
    #[case("DIESEL", FuelGrade::Diesel)]
    #[case("Biodiesel", FuelGrade::Biodiesel)]
    #[case("petrol", FuelGrade::Petrol)]
    fn test_from_str_is_case_insensitive(#[case] input: &str, #[case] expected: FuelGrade) {
        assert_eq!(FuelGrade::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_from_str_rejects_unknown_grade() {
        assert!(FuelGrade::from_str("kerosene").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for grade in [FuelGrade::Diesel, FuelGrade::Biodiesel, FuelGrade::Petrol] {
            assert_eq!(FuelGrade::from_str(&grade.to_string()).unwrap(), grade);
        }
    }
}
