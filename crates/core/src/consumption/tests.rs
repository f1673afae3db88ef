//! Tests for outflow segregation.
//!
//! - Property 5: Bucket completeness

use std::collections::HashSet;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tanklog_shared::types::{FuelOutId, LocationId};

use super::category::EquipmentCategory;
use super::segregate::{aggregate_units, exclude_non_consumption, is_non_consumption, segregate};
use crate::depot::FuelOut;

fn outflow(name: &str, unit: &str, quantity: Decimal, note: Option<&str>) -> FuelOut {
    FuelOut {
        id: FuelOutId::new(),
        location_id: LocationId::new(),
        date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        quantity,
        equipment_name: name.to_string(),
        unit_code: unit.to_string(),
        note: note.map(str::to_string),
    }
}

#[test]
fn test_non_consumption_detection() {
    // Donor side: negative quantity.
    assert!(is_non_consumption(&outflow("EXCAVATOR", "EX-01", dec!(-40), None)));
    // Receiving side: marked note, case-insensitive.
    assert!(is_non_consumption(&outflow(
        "EXCAVATOR",
        "EX-01",
        dec!(40),
        Some("Transfer from DT-02")
    )));
    assert!(is_non_consumption(&outflow(
        "EXCAVATOR",
        "EX-01",
        dec!(40),
        Some("LOAN from vibro")
    )));
    // Real consumption.
    assert!(!is_non_consumption(&outflow(
        "EXCAVATOR",
        "EX-01",
        dec!(40),
        Some("site A hauling")
    )));
    assert!(!is_non_consumption(&outflow("EXCAVATOR", "EX-01", dec!(40), None)));
}

#[test]
fn test_exclude_non_consumption_preserves_order() {
    let records = vec![
        outflow("EXCAVATOR", "EX-01", dec!(30), None),
        outflow("DUMP TRUCK", "DT-01", dec!(-20), None),
        outflow("VIBRO", "VR-01", dec!(15), Some("transfer to EX-01")),
        outflow("DUMP TRUCK", "DT-02", dec!(25), None),
    ];

    let kept = exclude_non_consumption(records);
    let units: Vec<String> = kept.iter().map(FuelOut::full_unit).collect();
    assert_eq!(units, vec!["EXCAVATOR EX-01", "DUMP TRUCK DT-02"]);
}

#[test]
fn test_excluded_unit_wins_over_category() {
    let excluded: HashSet<String> = ["DUMP TRUCK DT-01".to_string()].into();
    let records = vec![
        outflow("DUMP TRUCK", "DT-01", dec!(20), None),
        outflow("DUMP TRUCK", "DT-02", dec!(25), None),
        outflow("EXCAVATOR", "EX-01", dec!(30), None),
    ];

    let buckets = segregate(records, &excluded);
    assert_eq!(buckets.other.len(), 1);
    assert_eq!(buckets.other[0].full_unit(), "DUMP TRUCK DT-01");
    assert_eq!(buckets.vehicle.len(), 1);
    assert_eq!(buckets.heavy.len(), 1);
}

#[test]
fn test_aggregate_units_sums_per_unit() {
    let records = vec![
        outflow("EXCAVATOR", "EX-01", dec!(30), None),
        outflow("EXCAVATOR", "EX-01", dec!(20), None),
        outflow("VIBRO", "VR-01", dec!(10), None),
    ];

    let usages = aggregate_units(&records);
    assert_eq!(usages.len(), 2);
    assert_eq!(usages[0].label, "EXCAVATOR EX-01");
    assert_eq!(usages[0].total, dec!(50));
    assert_eq!(usages[1].total, dec!(10));
}

/// Strategy for equipment names mixing both categories.
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("EXCAVATOR PC200".to_string()),
        Just("DUMP TRUCK HINO".to_string()),
        Just("VIBRO ROLLER".to_string()),
        Just("PICK UP L300".to_string()),
        Just("BULLDOZER D65".to_string()),
    ]
}

fn unit_strategy() -> impl Strategy<Value = String> {
    (1u32..=6).prop_map(|n| format!("U-{n:02}"))
}

proptest! {
    /// **Property 5: Bucket completeness**
    ///
    /// *For any* consumption set, `segregate` places every record in exactly
    /// one bucket; excluded units land in "other" regardless of keyword
    /// match, and nothing else does.
    #[test]
    fn prop_segregate_partitions_all_records(
        rows in prop::collection::vec(
            (name_strategy(), unit_strategy(), 1i64..500),
            0..40,
        ),
        excluded_picks in prop::collection::vec(any::<prop::sample::Index>(), 0..5),
    ) {
        let records: Vec<FuelOut> = rows
            .iter()
            .map(|(name, unit, liters)| {
                outflow(name, unit, Decimal::from(*liters), None)
            })
            .collect();

        let excluded: HashSet<String> = excluded_picks
            .iter()
            .filter_map(|pick| {
                (!records.is_empty()).then(|| pick.get(&records).full_unit())
            })
            .collect();

        let buckets = segregate(records.clone(), &excluded);

        // Partition: every record lands in exactly one bucket.
        let total =
            buckets.heavy.len() + buckets.vehicle.len() + buckets.other.len();
        prop_assert_eq!(total, records.len());

        // Excluded units land in "other" and nowhere else.
        for record in &buckets.other {
            prop_assert!(excluded.contains(&record.full_unit()));
        }
        for record in buckets.heavy.iter().chain(&buckets.vehicle) {
            prop_assert!(!excluded.contains(&record.full_unit()));
        }

        // Non-excluded records match their keyword category.
        for record in &buckets.heavy {
            prop_assert_eq!(
                EquipmentCategory::classify(&record.equipment_name),
                EquipmentCategory::HeavyEquipment
            );
        }
        for record in &buckets.vehicle {
            prop_assert_eq!(
                EquipmentCategory::classify(&record.equipment_name),
                EquipmentCategory::Vehicle
            );
        }
    }
}
