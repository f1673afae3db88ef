//! Core report engine for Tanklog.
//!
//! This crate contains pure report logic with ZERO web or database
//! dependencies. All domain types, accounting rules, and the page layout
//! algorithm live here.
//!
//! # Modules
//!
//! - `period` - Calendar-month splitting of report date ranges
//! - `depot` - Depot locations, fuel transactions, and the store seam
//! - `stock` - Opening stock and month-by-month running balances
//! - `consumption` - Equipment categorization and outflow segregation
//! - `layout` - Content queues and the dual-column page layout engine
//! - `report` - Report assembly over all of the above

pub mod consumption;
pub mod depot;
pub mod layout;
pub mod period;
pub mod report;
pub mod stock;
