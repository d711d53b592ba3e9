//! Unit conversion functions
//!
//! Converts quantities between recorded units. Mass conversions apply a single
//! fixed factor; volume conversions route through liters as the canonical
//! intermediate unit.

use super::units::{liters_per_unit, units_per_liter, MassUnit, VolumeUnit, KG_PER_LB, LB_PER_KG};
use crate::error::{CalcError, CalcResult};

/// Convert a mass quantity between units.
///
/// Same-unit conversions are the identity.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    match (from, to) {
        (MassUnit::Pounds, MassUnit::Kilograms) => value * KG_PER_LB,
        (MassUnit::Kilograms, MassUnit::Pounds) => value * LB_PER_KG,
        _ => value,
    }
}

/// Convert a volume quantity between units.
///
/// Same-unit conversions are the identity; everything else goes source to
/// liters, then liters to destination.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }

    let liters = value * liters_per_unit(from);
    liters * units_per_liter(to)
}

/// Convert a mass quantity between string unit tags.
///
/// Unrecognized tags are an error rather than a silent pass-through.
pub fn convert_mass_tags(value: f64, from: &str, to: &str) -> CalcResult<f64> {
    let from_unit =
        MassUnit::from_str(from).ok_or_else(|| CalcError::InvalidUnit(from.to_string()))?;
    let to_unit = MassUnit::from_str(to).ok_or_else(|| CalcError::InvalidUnit(to.to_string()))?;

    Ok(convert_mass(value, from_unit, to_unit))
}

/// Convert a volume quantity between string unit tags.
///
/// Unrecognized tags are an error rather than a silent pass-through.
pub fn convert_volume_tags(value: f64, from: &str, to: &str) -> CalcResult<f64> {
    let from_unit =
        VolumeUnit::from_str(from).ok_or_else(|| CalcError::InvalidUnit(from.to_string()))?;
    let to_unit =
        VolumeUnit::from_str(to).ok_or_else(|| CalcError::InvalidUnit(to.to_string()))?;

    Ok(convert_volume(value, from_unit, to_unit))
}
