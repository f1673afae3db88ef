//! Common types used across the application.

pub mod fuel;
pub mod id;

pub use fuel::FuelGrade;
pub use id::*;
