//! Energy and body composition estimates
//!
//! BMI, Mifflin-St Jeor BMR/TDEE, and protein targets derived from a body
//! profile.

use crate::error::{CalcError, CalcResult};
use crate::measure::convert::convert_mass;
use crate::measure::units::{MassUnit, CM_PER_IN};
use crate::models::{ActivityLevel, Sex};

/// Calculate BMI from weight and height.
///
/// Performs no validation: a zero or negative height yields the mathematically
/// consequent `Infinity` or `NaN`, and the caller is responsible for
/// validating its inputs.
pub fn bmi(weight_lbs: f64, height_in: f64) -> f64 {
    weight_lbs / (height_in * height_in) * 703.0
}

/// Basal metabolic rate via the Mifflin-St Jeor equation, in kcal/day
pub fn bmr(weight_lbs: f64, height_in: f64, age: u32, sex: Sex) -> f64 {
    let weight_kg = convert_mass(weight_lbs, MassUnit::Pounds, MassUnit::Kilograms);
    let height_cm = height_in * CM_PER_IN;

    match sex {
        Sex::Male => 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + 5.0,
        Sex::Female => 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) - 161.0,
    }
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier
pub fn tdee(weight_lbs: f64, height_in: f64, age: u32, sex: Sex, activity: ActivityLevel) -> f64 {
    bmr(weight_lbs, height_in, age, sex) * activity.tdee_multiplier()
}

/// TDEE for a string activity tag.
///
/// Tags outside the enumerated levels are an error, never a silent `NaN`.
pub fn tdee_for_tag(
    weight_lbs: f64,
    height_in: f64,
    age: u32,
    sex: Sex,
    activity: &str,
) -> CalcResult<f64> {
    let level = ActivityLevel::from_str(activity)
        .ok_or_else(|| CalcError::InvalidActivityLevel(activity.to_string()))?;

    Ok(tdee(weight_lbs, height_in, age, sex, level))
}

/// Daily protein target in grams
pub fn protein_target(weight_lbs: f64, activity: ActivityLevel) -> f64 {
    let weight_kg = convert_mass(weight_lbs, MassUnit::Pounds, MassUnit::Kilograms);
    weight_kg * activity.protein_per_kg()
}

/// Protein target for a string activity tag.
///
/// Unlike [`tdee_for_tag`], unknown tags fall back to the moderate coefficient
/// instead of erroring.
pub fn protein_target_for_tag(weight_lbs: f64, activity: &str) -> f64 {
    protein_target(weight_lbs, ActivityLevel::from_str_or_default(activity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        // 180 lbs at 70 inches
        let value = bmi(180.0, 70.0);
        assert!((value - 25.82).abs() < 0.01);
    }

    #[test]
    fn test_bmi_degenerate_height() {
        assert!(bmi(180.0, 0.0).is_infinite());
    }

    #[test]
    fn test_bmr_male_reference() {
        // 70 kg / 178 cm / 30 years: 700 + 1112.5 - 150 + 5
        let value = bmr(154.324, 178.0 / CM_PER_IN, 30, Sex::Male);
        assert!((value - 1667.5).abs() < 0.1);
    }

    #[test]
    fn test_bmr_female_offset() {
        let male = bmr(154.324, 70.0, 30, Sex::Male);
        let female = bmr(154.324, 70.0, 30, Sex::Female);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_moderate() {
        let value = tdee(154.324, 178.0 / CM_PER_IN, 30, Sex::Male, ActivityLevel::Moderate);
        assert!((value - 2584.6).abs() < 0.5);
    }

    #[test]
    fn test_tdee_for_tag() {
        let typed = tdee(154.324, 70.0, 30, Sex::Male, ActivityLevel::Active);
        let tagged = tdee_for_tag(154.324, 70.0, 30, Sex::Male, "active").unwrap();
        assert_eq!(typed, tagged);

        assert!(matches!(
            tdee_for_tag(154.324, 70.0, 30, Sex::Male, "superhuman"),
            Err(CalcError::InvalidActivityLevel(_))
        ));
    }

    #[test]
    fn test_protein_target() {
        // 70 kg at 1.2 g/kg
        let value = protein_target(154.324, ActivityLevel::Moderate);
        assert!((value - 84.0).abs() < 0.01);
    }

    #[test]
    fn test_protein_target_for_tag_falls_back() {
        let moderate = protein_target(200.0, ActivityLevel::Moderate);
        assert_eq!(protein_target_for_tag(200.0, "couch potato"), moderate);
        assert_eq!(
            protein_target_for_tag(200.0, "extreme"),
            protein_target(200.0, ActivityLevel::Extreme)
        );
    }
}
