//! Body profile model
//!
//! Who the plan is for: weight, height, age, sex, and the activity level that
//! scales energy and protein estimates. Also carries the user's goals and
//! display preferences.

use serde::{Deserialize, Serialize};

use crate::fitness::energy;
use crate::measure::units::{MassUnit, VolumeUnit};

/// Biological sex category used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Activity level, ordered least to most active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Extreme,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to estimate total daily expenditure
    pub fn tdee_multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Extreme => 1.9,
        }
    }

    /// Daily protein grams per kilogram of body weight
    pub fn protein_per_kg(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 0.8,
            ActivityLevel::Light => 1.0,
            ActivityLevel::Moderate => 1.2,
            ActivityLevel::Active => 1.6,
            ActivityLevel::Extreme => 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::Extreme => "extreme",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" | "lightly active" => Some(ActivityLevel::Light),
            "moderate" | "moderately active" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "extreme" | "extremely active" => Some(ActivityLevel::Extreme),
            _ => None,
        }
    }

    /// Parse from string, falling back to `Moderate` for unknown levels
    pub fn from_str_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            tracing::warn!("unknown activity level '{}', defaulting to moderate", s);
            ActivityLevel::Moderate
        })
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly Active",
            ActivityLevel::Moderate => "Moderately Active",
            ActivityLevel::Active => "Active",
            ActivityLevel::Extreme => "Extremely Active",
        }
    }
}

/// A body profile snapshot for energy and protein estimates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyProfile {
    pub weight_lbs: f64,
    pub height_in: f64,
    pub age: u32,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
}

impl BodyProfile {
    /// Body-mass index for this profile
    pub fn bmi(&self) -> f64 {
        energy::bmi(self.weight_lbs, self.height_in)
    }

    /// Basal metabolic rate in kcal/day
    pub fn bmr(&self) -> f64 {
        energy::bmr(self.weight_lbs, self.height_in, self.age, self.sex)
    }

    /// Total daily energy expenditure in kcal/day
    pub fn tdee(&self) -> f64 {
        energy::tdee(
            self.weight_lbs,
            self.height_in,
            self.age,
            self.sex,
            self.activity_level,
        )
    }

    /// Daily protein target in grams
    pub fn protein_target(&self) -> f64 {
        energy::protein_target(self.weight_lbs, self.activity_level)
    }
}

/// Daily intake goals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGoals {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fiber_g: f64,
    pub water_l: f64,
    pub target_weight_lbs: f64,
    pub daily_calories: Option<f64>,
}

/// Display and scheduling preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub weight_unit: MassUnit,
    pub liquid_unit: VolumeUnit,
    /// Days between scheduled injections
    pub injection_stride_days: i64,
    /// Planned cycle length in weeks
    pub cycle_weeks: u32,
    pub reminders_enabled: bool,
}
