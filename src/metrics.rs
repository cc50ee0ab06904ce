// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure derivations of the standard body-state metrics.
//!
//! Everything here is deterministic and side-effect free; callers pass in
//! already-resolved values (the fallback logic lives in the snapshot service).

use chrono::{Datelike, NaiveDate};

/// Multiplier applied to BMR for people who barely move.
/// Also the fallback for activity levels we do not recognize.
const SEDENTARY_FACTOR: f64 = 1.2;

/// Completed years between `dob` and `as_of`.
///
/// Subtracts one year when the birthday has not yet occurred in the
/// `as_of` year.
pub fn age(dob: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut years = as_of.year() - dob.year();
    if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    years
}

/// Body-mass index: weight over squared height, rounded to 2 decimals.
///
/// Returns `None` for a non-positive height. The ratio is undefined there,
/// and we refuse to smuggle a zero or infinity into stored records.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(round2(weight_kg / (height_m * height_m)))
}

/// Basal metabolic rate per Mifflin-St Jeor, rounded to whole kcal.
///
/// `base = 10*weight + 6.25*height - 5*age`, then `+5` when `sex` equals
/// "male" case-insensitively, `-161` otherwise. Binary branch only.
pub fn bmr(weight_kg: f64, height_cm: f64, age: i32, sex: &str) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    if sex.eq_ignore_ascii_case("male") {
        (base + 5.0).round()
    } else {
        (base - 161.0).round()
    }
}

/// Total daily energy expenditure: BMR scaled by the activity factor,
/// rounded to whole kcal.
pub fn tdee(bmr: f64, activity_level: &str) -> f64 {
    (bmr * activity_factor(activity_level)).round()
}

/// Fixed activity-factor table.
///
/// Unknown levels are priced as sedentary on purpose; this lookup never
/// rejects an activity string.
fn activity_factor(activity_level: &str) -> f64 {
    match activity_level {
        "sedentary" => SEDENTARY_FACTOR,
        "light" => 1.375,
        "moderate" => 1.55,
        "active" => 1.725,
        "very_active" => 1.9,
        _ => SEDENTARY_FACTOR,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_after_birthday() {
        assert_eq!(age(date(1990, 5, 20), date(2026, 5, 20)), 36);
        assert_eq!(age(date(1990, 5, 20), date(2026, 8, 1)), 36);
    }

    #[test]
    fn test_age_before_birthday() {
        assert_eq!(age(date(1990, 5, 20), date(2026, 5, 19)), 35);
        assert_eq!(age(date(1990, 5, 20), date(2026, 1, 1)), 35);
    }

    #[test]
    fn test_bmi_rounds_to_two_decimals() {
        // 70 / 1.75^2 = 22.857... -> 22.86
        assert_eq!(bmi(70.0, 175.0), Some(22.86));
        assert_eq!(bmi(60.0, 160.0), Some(23.44));
    }

    #[test]
    fn test_bmi_undefined_for_non_positive_height() {
        assert_eq!(bmi(70.0, 0.0), None);
        assert_eq!(bmi(70.0, -175.0), None);
    }

    #[test]
    fn test_bmr_male() {
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75 -> 1649
        assert_eq!(bmr(70.0, 175.0, 30, "male"), 1649.0);
        assert_eq!(bmr(70.0, 175.0, 30, "MALE"), 1649.0);
    }

    #[test]
    fn test_bmr_non_male() {
        // 10*60 + 6.25*160 - 5*25 - 161 = 1314
        assert_eq!(bmr(60.0, 160.0, 25, "female"), 1314.0);
        // Anything that is not "male" takes the same branch.
        assert_eq!(bmr(60.0, 160.0, 25, "other"), 1314.0);
    }

    #[test]
    fn test_tdee_known_levels() {
        assert_eq!(tdee(1673.0, "moderate"), 2593.0);
        assert_eq!(tdee(1649.0, "sedentary"), 1979.0);
        assert_eq!(tdee(1649.0, "very_active"), 3133.0);
    }

    #[test]
    fn test_tdee_unknown_level_falls_back_to_sedentary() {
        assert_eq!(tdee(1673.0, "unknown_level"), tdee(1673.0, "sedentary"));
        assert_eq!(tdee(1673.0, ""), (1673.0_f64 * 1.2).round());
        // Lookup is case-sensitive; "Moderate" is not a known level.
        assert_eq!(tdee(1673.0, "Moderate"), tdee(1673.0, "sedentary"));
    }
}
