use crate::pose_interface::{ExerciseKind, Gender, UserProfile};
use crate::prelude::TrackerConfig;

/// Estimates the calorie burn from a Mifflin-St Jeor basal rate.
///
/// Height is not collected, so the configured assumed height stands in.
/// BMR/1440 gives a per-minute rate, scaled by the exercise's intensity
/// multiplier over its normalization divisor and by the duration in
/// minutes. Rounded to two decimals; zero duration is exactly zero.
pub fn estimate_calories(
    profile: &UserProfile,
    kind: ExerciseKind,
    duration_secs: f64,
    config: &TrackerConfig,
) -> f64 {
    let duration_min = duration_secs / 60.0;
    if duration_min <= 0.0 {
        return 0.0;
    }

    let age = f64::from(profile.age);
    let bmr = match profile.gender {
        Gender::Male => {
            10.0 * profile.weight_kg + 6.25 * config.assumed_height_male_cm - 5.0 * age + 5.0
        }
        Gender::Female | Gender::Unspecified => {
            10.0 * profile.weight_kg + 6.25 * config.assumed_height_other_cm - 5.0 * age - 161.0
        }
    };

    let calories_per_min = bmr / 1440.0;
    let multiplier = config.intensity.multiplier(kind) / config.intensity_divisor;
    let total = calories_per_min * duration_min * multiplier;

    (total * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(age: u32, gender: Gender, weight_kg: f64) -> UserProfile {
        UserProfile {
            name: "test".into(),
            age,
            gender,
            weight_kg,
        }
    }

    #[test]
    fn reference_scenario_burns_6_03_kcal() {
        // male, 65 kg, 18 y, jumping jacks, one minute:
        // BMR 1627.5 -> 1.1302/min * (8 / 1.5) -> 6.03
        let kcal = estimate_calories(
            &profile(18, Gender::Male, 65.0),
            ExerciseKind::JumpingJacks,
            60.0,
            &TrackerConfig::default(),
        );
        assert_eq!(kcal, 6.03);
    }

    #[test]
    fn zero_duration_is_exactly_zero_for_any_profile() {
        let kcal = estimate_calories(
            &profile(18, Gender::Male, 65.0),
            ExerciseKind::JumpingJacks,
            0.0,
            &TrackerConfig::default(),
        );
        assert_eq!(kcal, 0.0);
    }

    #[test]
    fn non_male_profiles_use_the_shorter_assumed_height() {
        let config = TrackerConfig::default();
        let male = estimate_calories(
            &profile(30, Gender::Male, 60.0),
            ExerciseKind::Squats,
            120.0,
            &config,
        );
        let female = estimate_calories(
            &profile(30, Gender::Female, 60.0),
            ExerciseKind::Squats,
            120.0,
            &config,
        );
        assert!(male > female);

        let unspecified = estimate_calories(
            &profile(30, Gender::Unspecified, 60.0),
            ExerciseKind::Squats,
            120.0,
            &config,
        );
        assert_eq!(female, unspecified);
    }

    #[test]
    fn intensity_table_orders_exercises() {
        let config = TrackerConfig::default();
        let p = profile(25, Gender::Male, 70.0);
        let high_knees = estimate_calories(&p, ExerciseKind::HighKnees, 300.0, &config);
        let jacks = estimate_calories(&p, ExerciseKind::JumpingJacks, 300.0, &config);
        let squats = estimate_calories(&p, ExerciseKind::Squats, 300.0, &config);
        assert!(high_knees > jacks);
        assert!(jacks > squats);
    }

    #[test]
    fn result_carries_two_decimal_precision() {
        let kcal = estimate_calories(
            &profile(42, Gender::Female, 58.3),
            ExerciseKind::Generic,
            97.0,
            &TrackerConfig::default(),
        );
        assert_eq!((kcal * 100.0).round() / 100.0, kcal);
    }
}
