//! Log entry models
//!
//! Daily meal, workout, and weight entries captured by the tracker pages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Muscle group for workout entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
}

impl MuscleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Core => "core",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chest" => Some(MuscleGroup::Chest),
            "back" => Some(MuscleGroup::Back),
            "shoulders" | "delts" => Some(MuscleGroup::Shoulders),
            "arms" => Some(MuscleGroup::Arms),
            "legs" => Some(MuscleGroup::Legs),
            "core" | "abs" => Some(MuscleGroup::Core),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
        }
    }
}

/// A day's macro intake entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroEntry {
    pub date: NaiveDate,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fiber in grams
    pub fiber: f64,
    pub calories: f64,
    /// Water intake in liters
    pub water: f64,
}

/// A logged workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub date: NaiveDate,
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub weight_lbs: f64,
    pub muscle_group: MuscleGroup,
    pub notes: Option<String>,
}

/// A body-weight reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub weight_lbs: f64,
    pub body_fat_pct: Option<f64>,
}
