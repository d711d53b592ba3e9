//! Cycle model
//!
//! A planned injection cycle: start date, length in weeks, and the compounds
//! being run, with the date math the cycle page displays.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::fitness::schedule;

/// A compound and dose within a cycle plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleCompound {
    pub name: String,
    pub dose_mg: f64,
    /// Free-form frequency label, e.g. "every 3 days"
    pub frequency: String,
}

/// A planned cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CyclePlan {
    pub start_date: NaiveDate,
    pub total_weeks: u32,
    pub compounds: Vec<CycleCompound>,
    pub is_active: bool,
}

impl CyclePlan {
    /// Last scheduled day of the cycle
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Duration::days(i64::from(self.total_weeks) * 7)
    }

    /// 1-based week number for the given date.
    ///
    /// Dates before the start are week 0; dates past the end clamp to the
    /// final week.
    pub fn week_on(&self, date: NaiveDate) -> u32 {
        if date < self.start_date {
            return 0;
        }

        let elapsed = (date - self.start_date).num_days();
        let week = elapsed / 7 + 1;
        week.min(i64::from(self.total_weeks)) as u32
    }

    /// Percent of the cycle completed as of the given week.
    ///
    /// A zero-length plan reads as 0% rather than dividing by zero.
    pub fn progress_percent(&self, current_week: u32) -> f64 {
        if self.total_weeks == 0 {
            return 0.0;
        }

        f64::from(current_week) / f64::from(self.total_weeks) * 100.0
    }

    /// Every scheduled injection date in the cycle
    pub fn schedule(&self, stride_days: i64) -> CalcResult<Vec<NaiveDate>> {
        schedule::generate_schedule(self.start_date, stride_days, self.total_weeks)
    }

    /// The next `count` injection dates on or after `today`
    pub fn upcoming(
        &self,
        stride_days: i64,
        today: NaiveDate,
        count: usize,
    ) -> CalcResult<Vec<NaiveDate>> {
        Ok(self
            .schedule(stride_days)?
            .into_iter()
            .filter(|d| *d >= today)
            .take(count)
            .collect())
    }
}
