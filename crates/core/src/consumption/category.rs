//! Equipment category classification.

use serde::{Deserialize, Serialize};

/// Keywords that mark an equipment name as a road vehicle. Everything else
/// counts as heavy equipment.
const VEHICLE_KEYWORDS: [&str; 12] = [
    "TRUCK", "MOBIL", "TRITON", "DT", "FAW", "SANNY", "R6", "R10", "PICK UP", "HILUX", "STRADA",
    "GRAND MAX",
];

/// Recap category of a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    /// Excavators, dozers, compactors and the like.
    HeavyEquipment,
    /// Trucks, pickups and other road vehicles.
    Vehicle,
}

impl EquipmentCategory {
    /// Classifies an equipment name by case-insensitive keyword match.
    ///
    /// Total function: unmatched names fall through to heavy equipment.
    #[must_use]
    pub fn classify(equipment_name: &str) -> Self {
        let name = equipment_name.to_uppercase();
        if VEHICLE_KEYWORDS.iter().any(|k| name.contains(k)) {
            Self::Vehicle
        } else {
            Self::HeavyEquipment
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("DUMP TRUCK HINO", EquipmentCategory::Vehicle)]
    #[case("dump truck hino", EquipmentCategory::Vehicle)]
    #[case("PICK UP L300", EquipmentCategory::Vehicle)]
    #[case("HILUX DOUBLE CABIN", EquipmentCategory::Vehicle)]
    #[case("STRADA", EquipmentCategory::Vehicle)]
    #[case("EXCAVATOR PC200", EquipmentCategory::HeavyEquipment)]
    #[case("VIBRO ROLLER", EquipmentCategory::HeavyEquipment)]
    #[case("BULLDOZER D65", EquipmentCategory::HeavyEquipment)]
    #[case("", EquipmentCategory::HeavyEquipment)]
    fn test_classify(#[case] name: &str, #[case] expected: EquipmentCategory) {
        assert_eq!(EquipmentCategory::classify(name), expected);
    }

    #[test]
    fn test_classify_matches_substring() {
        // "DT" is a keyword; it matches anywhere in the name.
        assert_eq!(
            EquipmentCategory::classify("ARMADA DT-12"),
            EquipmentCategory::Vehicle
        );
    }
}
