//! Measurement module
//!
//! Handles unit tags and conversions between the units the tracker records in.

pub mod convert;
pub mod units;

pub use convert::{convert_mass, convert_mass_tags, convert_volume, convert_volume_tags};
pub use units::{liters_per_unit, units_per_liter, MassUnit, VolumeUnit};
