//! Equipment categorization and outflow segregation.

pub mod category;
pub mod segregate;

#[cfg(test)]
mod tests;

pub use category::EquipmentCategory;
pub use segregate::{
    ConsumptionBuckets, UnitUsage, aggregate_units, exclude_non_consumption, is_non_consumption,
    segregate,
};
