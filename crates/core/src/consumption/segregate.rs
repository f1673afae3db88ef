//! Outflow segregation into recap buckets.
//!
//! Non-consumption movements (inter-unit transfers/loans) are filtered out
//! of consumption views first; the remainder is split into heavy-equipment,
//! vehicle, and "other" (explicitly excluded units) buckets.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::EquipmentCategory;
use crate::depot::FuelOut;

/// Note markers (case-insensitive substrings) that tag the receiving side of
/// an inter-unit transfer.
const TRANSFER_MARKERS: [&str; 2] = ["transfer", "loan"];

/// True for movements that are not real consumption: the donor side of a
/// transfer (negative quantity) or the receiving side (marked note).
#[must_use]
pub fn is_non_consumption(record: &FuelOut) -> bool {
    if record.is_transfer_out() {
        return true;
    }
    match &record.note {
        Some(note) => {
            let note = note.to_lowercase();
            TRANSFER_MARKERS.iter().any(|m| note.contains(m))
        }
        None => false,
    }
}

/// Drops transfer/loan movements, keeping only real consumption.
///
/// Input order is preserved.
#[must_use]
pub fn exclude_non_consumption(records: Vec<FuelOut>) -> Vec<FuelOut> {
    records
        .into_iter()
        .filter(|r| !is_non_consumption(r))
        .collect()
}

/// Consumption records partitioned into recap buckets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsumptionBuckets {
    /// Heavy-equipment consumption.
    pub heavy: Vec<FuelOut>,
    /// Vehicle consumption.
    pub vehicle: Vec<FuelOut>,
    /// Consumption of explicitly excluded units, regardless of category.
    pub other: Vec<FuelOut>,
}

/// Partitions consumption records into recap buckets.
///
/// A record whose [`FuelOut::full_unit`] is in `excluded_units` lands in the
/// "other" bucket regardless of its keyword category; everything else splits
/// by [`EquipmentCategory::classify`]. Input order is preserved within each
/// bucket.
#[must_use]
pub fn segregate(records: Vec<FuelOut>, excluded_units: &HashSet<String>) -> ConsumptionBuckets {
    let mut buckets = ConsumptionBuckets::default();
    for record in records {
        if excluded_units.contains(&record.full_unit()) {
            buckets.other.push(record);
        } else {
            match EquipmentCategory::classify(&record.equipment_name) {
                EquipmentCategory::HeavyEquipment => buckets.heavy.push(record),
                EquipmentCategory::Vehicle => buckets.vehicle.push(record),
            }
        }
    }
    buckets
}

/// Per-unit usage total within a recap bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitUsage {
    /// Full unit identity ("name unit_code").
    pub label: String,
    /// Summed liters for the unit.
    pub total: Decimal,
}

/// Aggregates a bucket by full unit, summing liters.
///
/// First-appearance order; callers sort by total descending for display.
#[must_use]
pub fn aggregate_units(records: &[FuelOut]) -> Vec<UnitUsage> {
    let mut usages: Vec<UnitUsage> = Vec::new();
    for record in records {
        let label = record.full_unit();
        match usages.iter_mut().find(|u| u.label == label) {
            Some(usage) => usage.total += record.quantity,
            None => usages.push(UnitUsage {
                label,
                total: record.quantity,
            }),
        }
    }
    usages
}
