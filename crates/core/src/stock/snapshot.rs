//! Period stock snapshots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock position over one period.
///
/// Invariant: `closing = opening + total_in - total_out`, and snapshots chain
/// so that a period's opening equals the previous period's closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSnapshot {
    /// Balance carried into the period.
    pub opening: Decimal,
    /// Total inflow during the period.
    pub total_in: Decimal,
    /// Total raw outflow during the period (transfers included).
    pub total_out: Decimal,
    /// Balance carried out of the period.
    pub closing: Decimal,
}

impl StockSnapshot {
    /// Creates a snapshot from an opening balance and the period's flows.
    #[must_use]
    pub fn new(opening: Decimal, total_in: Decimal, total_out: Decimal) -> Self {
        Self {
            opening,
            total_in,
            total_out,
            closing: opening + total_in - total_out,
        }
    }

    /// Creates the next snapshot in a chain: its opening is the previous
    /// snapshot's closing.
    #[must_use]
    pub fn chained(previous: &Self, total_in: Decimal, total_out: Decimal) -> Self {
        Self::new(previous.closing, total_in, total_out)
    }
}
