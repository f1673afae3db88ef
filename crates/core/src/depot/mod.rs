//! Depot locations, fuel transactions, and the store seam.

pub mod store;
pub mod types;

pub use store::{FlowTotals, StoreError, TransactionStore};
pub use types::{FuelIn, FuelOut, Location};
