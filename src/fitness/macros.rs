//! Macro calorie math
//!
//! Converts gram tallies to calorie contributions at fixed energy densities
//! and derives each macro's share of total calories.

use serde::{Deserialize, Serialize};

/// Calories per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Calories per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Calories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Per-macro share of total calories, in whole percent.
///
/// Shares are rounded independently, so they may sum to 99 or 101.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// Total calories in a protein/carbs/fat gram tally
pub fn macro_calories(protein_g: f64, carbs_g: f64, fat_g: f64) -> f64 {
    protein_g * KCAL_PER_G_PROTEIN + carbs_g * KCAL_PER_G_CARBS + fat_g * KCAL_PER_G_FAT
}

/// Each macro's share of total calories, rounded to whole percent.
///
/// A zero-calorie tally returns an all-zero split.
pub fn macro_percentages(protein_g: f64, carbs_g: f64, fat_g: f64) -> MacroSplit {
    let protein_cals = protein_g * KCAL_PER_G_PROTEIN;
    let carbs_cals = carbs_g * KCAL_PER_G_CARBS;
    let fat_cals = fat_g * KCAL_PER_G_FAT;
    let total = protein_cals + carbs_cals + fat_cals;

    if total == 0.0 {
        return MacroSplit::default();
    }

    MacroSplit {
        protein: (protein_cals / total * 100.0).round() as u32,
        carbs: (carbs_cals / total * 100.0).round() as u32,
        fat: (fat_cals / total * 100.0).round() as u32,
    }
}
