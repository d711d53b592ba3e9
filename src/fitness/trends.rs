//! Progress trends
//!
//! Weekly averages over logged records plus the goal and weight summaries the
//! progress views display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{MacroEntry, WeightEntry};

/// A record exposing named numeric fields for averaging
pub trait MetricRecord {
    /// Value of the named field, if the record carries it
    fn metric(&self, key: &str) -> Option<f64>;
}

impl MetricRecord for MacroEntry {
    fn metric(&self, key: &str) -> Option<f64> {
        match key {
            "protein" => Some(self.protein),
            "carbs" => Some(self.carbs),
            "fiber" => Some(self.fiber),
            "calories" => Some(self.calories),
            "water" => Some(self.water),
            _ => None,
        }
    }
}

impl MetricRecord for WeightEntry {
    fn metric(&self, key: &str) -> Option<f64> {
        match key {
            "weight" => Some(self.weight_lbs),
            "body_fat" => self.body_fat_pct,
            _ => None,
        }
    }
}

impl MetricRecord for BTreeMap<String, f64> {
    fn metric(&self, key: &str) -> Option<f64> {
        self.get(key).copied()
    }
}

/// Arithmetic mean of each named field across the records.
///
/// Empty input yields an empty map, not an error. A record missing a field
/// contributes `NaN` to that field's mean.
pub fn compute_averages<R: MetricRecord>(records: &[R], keys: &[&str]) -> BTreeMap<String, f64> {
    let mut result = BTreeMap::new();
    if records.is_empty() {
        return result;
    }

    for key in keys {
        let sum: f64 = records
            .iter()
            .map(|r| r.metric(key).unwrap_or(f64::NAN))
            .sum();
        result.insert((*key).to_string(), sum / records.len() as f64);
    }

    result
}

/// Direction of a weight change between two readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightTrend {
    Gaining,
    Losing,
    Maintaining,
}

impl WeightTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightTrend::Gaining => "gaining",
            WeightTrend::Losing => "losing",
            WeightTrend::Maintaining => "maintaining",
        }
    }
}

/// Change between the last two weight readings, most recent last.
///
/// Missing readings read as zero, so a single reading reports its full value
/// as the change.
pub fn weight_change(entries: &[WeightEntry]) -> f64 {
    let n = entries.len();
    let current = if n >= 1 { entries[n - 1].weight_lbs } else { 0.0 };
    let previous = if n >= 2 { entries[n - 2].weight_lbs } else { 0.0 };

    current - previous
}

/// Classify a weight change as gaining, losing, or maintaining
pub fn weight_trend(change: f64) -> WeightTrend {
    if change > 0.0 {
        WeightTrend::Gaining
    } else if change < 0.0 {
        WeightTrend::Losing
    } else {
        WeightTrend::Maintaining
    }
}

/// Percent of a goal reached, clamped to 100.
///
/// Non-positive targets read as 0% rather than dividing by zero.
pub fn goal_progress_percent(current: f64, target: f64) -> f64 {
    if target > 0.0 {
        (current / target * 100.0).min(100.0)
    } else {
        0.0
    }
}

/// Amount left to reach a goal, floored at zero
pub fn goal_remaining(current: f64, target: f64) -> f64 {
    (target - current).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn weight(day: u32, lbs: f64) -> WeightEntry {
        WeightEntry {
            date: NaiveDate::from_ymd_opt(2024, 11, day).unwrap(),
            weight_lbs: lbs,
            body_fat_pct: None,
        }
    }

    fn macros(day: u32, protein: f64, carbs: f64) -> MacroEntry {
        MacroEntry {
            date: NaiveDate::from_ymd_opt(2024, 12, day).unwrap(),
            protein,
            carbs,
            fiber: 20.0,
            calories: 2200.0,
            water: 2.5,
        }
    }

    #[test]
    fn test_compute_averages() {
        let records = vec![macros(2, 100.0, 220.0), macros(3, 200.0, 180.0)];
        let averages = compute_averages(&records, &["protein", "carbs"]);
        assert_eq!(averages["protein"], 150.0);
        assert_eq!(averages["carbs"], 200.0);
    }

    #[test]
    fn test_compute_averages_empty_input() {
        let averages = compute_averages::<MacroEntry>(&[], &["protein"]);
        assert!(averages.is_empty());
    }

    #[test]
    fn test_compute_averages_missing_key_is_nan() {
        let records = vec![macros(2, 100.0, 220.0)];
        let averages = compute_averages(&records, &["protein", "sodium"]);
        assert_eq!(averages["protein"], 100.0);
        assert!(averages["sodium"].is_nan());
    }

    #[test]
    fn test_compute_averages_over_maps() {
        let mut a = BTreeMap::new();
        a.insert("protein".to_string(), 100.0);
        let mut b = BTreeMap::new();
        b.insert("protein".to_string(), 200.0);

        let averages = compute_averages(&[a, b], &["protein"]);
        assert_eq!(averages["protein"], 150.0);
    }

    #[test]
    fn test_weight_change_and_trend() {
        let entries = vec![weight(1, 180.0), weight(8, 181.5)];
        let change = weight_change(&entries);
        assert!((change - 1.5).abs() < 1e-9);
        assert_eq!(weight_trend(change), WeightTrend::Gaining);

        assert_eq!(weight_trend(-0.5), WeightTrend::Losing);
        assert_eq!(weight_trend(0.0), WeightTrend::Maintaining);
    }

    #[test]
    fn test_weight_change_short_histories() {
        assert_eq!(weight_change(&[]), 0.0);
        // A lone reading compares against an implicit zero
        assert_eq!(weight_change(&[weight(1, 180.0)]), 180.0);
    }

    #[test]
    fn test_goal_progress() {
        assert!((goal_progress_percent(75.0, 150.0) - 50.0).abs() < 1e-9);
        // Overshoot clamps to 100
        assert_eq!(goal_progress_percent(200.0, 150.0), 100.0);
        assert_eq!(goal_progress_percent(50.0, 0.0), 0.0);
    }

    #[test]
    fn test_goal_remaining() {
        assert_eq!(goal_remaining(100.0, 150.0), 50.0);
        assert_eq!(goal_remaining(200.0, 150.0), 0.0);
    }
}
