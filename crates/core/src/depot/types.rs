//! Depot and fuel transaction records.
//!
//! These records are owned by the external storage layer and are immutable
//! once read by the core.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tanklog_shared::types::{FuelGrade, FuelInId, FuelOutId, LocationId};

/// A project site with its own fuel ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier.
    pub id: LocationId,
    /// Display name of the site.
    pub name: String,
    /// Manually set starting balance (liters) as of the location's creation.
    /// All later balances are derived, never stored.
    pub baseline_stock: Decimal,
}

/// A fuel delivery into a depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelIn {
    /// Unique identifier.
    pub id: FuelInId,
    /// Location the delivery belongs to.
    pub location_id: LocationId,
    /// Delivery date.
    pub date: NaiveDate,
    /// Delivered quantity in liters.
    pub quantity: Decimal,
    /// Supplier or source of the delivery.
    pub supplier: String,
    /// Grade of the delivered fuel.
    pub grade: FuelGrade,
    /// Free-form note.
    pub note: Option<String>,
}

/// A fuel movement out of a depot.
///
/// A negative `quantity` denotes the donor side of an inter-unit transfer;
/// the receiving side is marked through the note (see
/// [`crate::consumption::is_non_consumption`]). Both count in raw balance
/// arithmetic but are excluded from consumption totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelOut {
    /// Unique identifier.
    pub id: FuelOutId,
    /// Location the movement belongs to.
    pub location_id: LocationId,
    /// Movement date.
    pub date: NaiveDate,
    /// Quantity in liters; signed (negative for transfer-out).
    pub quantity: Decimal,
    /// Name of the equipment that received the fuel.
    pub equipment_name: String,
    /// Unit code of the equipment (e.g. "DT-01").
    pub unit_code: String,
    /// Free-form note; transfer/loan markers live here.
    pub note: Option<String>,
}

impl FuelOut {
    /// Full unit identity used for recap grouping and exclusion matching.
    #[must_use]
    pub fn full_unit(&self) -> String {
        format!("{} {}", self.equipment_name, self.unit_code)
    }

    /// True for the donor side of an inter-unit transfer.
    #[must_use]
    pub fn is_transfer_out(&self) -> bool {
        self.quantity < Decimal::ZERO
    }
}
