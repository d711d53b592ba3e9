//! Unit tags and conversion constants
//!
//! Provides types for representing measurement units and the fixed conversion
//! factors between them.

use serde::{Deserialize, Serialize};

/// Mass unit for body weight and lift entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    Pounds,
    Kilograms,
}

impl MassUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MassUnit::Pounds => "lbs",
            MassUnit::Kilograms => "kg",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let trimmed = lower.trim();

        match trimmed {
            "lb" | "lbs" | "pound" | "pounds" => Some(MassUnit::Pounds),
            "kg" | "kilogram" | "kilograms" => Some(MassUnit::Kilograms),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MassUnit::Pounds => "Pounds",
            MassUnit::Kilograms => "Kilograms",
        }
    }
}

/// Volume unit for liquid intake entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    Liters,
    FluidOunces,
    Cups,
}

impl VolumeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeUnit::Liters => "L",
            VolumeUnit::FluidOunces => "fl oz",
            VolumeUnit::Cups => "cups",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let trimmed = lower.trim();

        match trimmed {
            "l" | "liter" | "liters" | "litre" | "litres" => Some(VolumeUnit::Liters),
            "fl oz" | "floz" | "fluid ounce" | "fluid ounces" => Some(VolumeUnit::FluidOunces),
            "cup" | "cups" => Some(VolumeUnit::Cups),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VolumeUnit::Liters => "Liters",
            VolumeUnit::FluidOunces => "Fluid Ounces",
            VolumeUnit::Cups => "Cups",
        }
    }
}

// ============================================================================
// Mass Conversion Constants
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;
/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;

// ============================================================================
// Volume Conversion Constants (liters are canonical)
// ============================================================================

/// Liters per fluid ounce
pub const LITERS_PER_FL_OZ: f64 = 0.0295735;
/// Liters per US cup
pub const LITERS_PER_CUP: f64 = 0.236588;
/// Fluid ounces per liter
pub const FL_OZ_PER_LITER: f64 = 33.814;
/// US cups per liter
pub const CUPS_PER_LITER: f64 = 4.22675;

/// Liters in one unit of the given volume tag
pub fn liters_per_unit(unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liters => 1.0,
        VolumeUnit::FluidOunces => LITERS_PER_FL_OZ,
        VolumeUnit::Cups => LITERS_PER_CUP,
    }
}

/// Units of the given volume tag in one liter
pub fn units_per_liter(unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liters => 1.0,
        VolumeUnit::FluidOunces => FL_OZ_PER_LITER,
        VolumeUnit::Cups => CUPS_PER_LITER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_unit_from_str() {
        assert_eq!(MassUnit::from_str("lbs"), Some(MassUnit::Pounds));
        assert_eq!(MassUnit::from_str("pounds"), Some(MassUnit::Pounds));
        assert_eq!(MassUnit::from_str("KG"), Some(MassUnit::Kilograms));
        assert_eq!(MassUnit::from_str(" kilograms "), Some(MassUnit::Kilograms));
        assert_eq!(MassUnit::from_str("stone"), None);
    }

    #[test]
    fn test_volume_unit_from_str() {
        assert_eq!(VolumeUnit::from_str("L"), Some(VolumeUnit::Liters));
        assert_eq!(VolumeUnit::from_str("fl oz"), Some(VolumeUnit::FluidOunces));
        assert_eq!(VolumeUnit::from_str("floz"), Some(VolumeUnit::FluidOunces));
        assert_eq!(VolumeUnit::from_str("cups"), Some(VolumeUnit::Cups));
        assert_eq!(VolumeUnit::from_str("gallon"), None);
    }

    #[test]
    fn test_volume_factor_lookups() {
        assert_eq!(liters_per_unit(VolumeUnit::Liters), 1.0);
        assert_eq!(liters_per_unit(VolumeUnit::FluidOunces), LITERS_PER_FL_OZ);
        assert_eq!(units_per_liter(VolumeUnit::Cups), CUPS_PER_LITER);
    }
}
