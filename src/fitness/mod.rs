//! Fitness calculations
//!
//! The pure calculation layer behind the tracker pages: energy estimates,
//! macro math, injection-site rotation, schedule generation, and progress
//! trends.

pub mod energy;
pub mod macros;
pub mod rotation;
pub mod schedule;
pub mod trends;

pub use energy::{bmi, bmr, protein_target, protein_target_for_tag, tdee, tdee_for_tag};
pub use macros::{macro_calories, macro_percentages, MacroSplit};
pub use rotation::{next_injection_site, next_site_for_labels};
pub use schedule::{days_between, format_date, generate_schedule, generate_schedule_from_str};
pub use trends::{
    compute_averages, goal_progress_percent, goal_remaining, weight_change, weight_trend,
    MetricRecord, WeightTrend,
};
