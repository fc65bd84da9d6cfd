use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical fitness-quality label derived from the four-factor scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaminaRating {
    Elite,
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl StaminaRating {
    pub fn label(self) -> &'static str {
        match self {
            Self::Elite => "Elite",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for StaminaRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scores four independent factors at 0, 1 or 2 points each and maps the
/// 0-8 total onto the rating scale. Pure function; duration is floored to
/// one second for the rate so an instant session cannot divide by zero.
pub fn evaluate_stamina(
    age: u32,
    reps: u32,
    duration_secs: f64,
    avg_score: f64,
    pause_secs: f64,
) -> StaminaRating {
    let duration = if duration_secs > 0.0 { duration_secs } else { 1.0 };
    let rep_rate = f64::from(reps) / duration * 60.0;

    let mut points = 0;

    if rep_rate > 30.0 {
        points += 2;
    } else if rep_rate >= 20.0 {
        points += 1;
    }

    if avg_score > 0.8 {
        points += 2;
    } else if avg_score >= 0.6 {
        points += 1;
    }

    if pause_secs < 5.0 {
        points += 2;
    } else if pause_secs < 10.0 {
        points += 1;
    }

    if age < 25 {
        points += 2;
    } else if age <= 35 {
        points += 1;
    }

    if points >= 8 {
        StaminaRating::Elite
    } else if points >= 7 {
        StaminaRating::Excellent
    } else if points >= 5 {
        StaminaRating::Good
    } else if points >= 3 {
        StaminaRating::Average
    } else {
        StaminaRating::NeedsImprovement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_marks_in_every_factor_is_elite() {
        // rate 40/min, score 0.9, pause 0, age 18: 8 points
        let rating = evaluate_stamina(18, 40, 60.0, 0.9, 0.0);
        assert_eq!(rating, StaminaRating::Elite);
    }

    #[test]
    fn rate_of_exactly_30_earns_one_point_not_two() {
        // 30/min + 2 + 2 + 2 = 7 -> Excellent, proving the rate gave 1
        let rating = evaluate_stamina(18, 30, 60.0, 0.9, 0.0);
        assert_eq!(rating, StaminaRating::Excellent);
    }

    #[test]
    fn avg_score_of_exactly_point_eight_earns_one_point() {
        let rating = evaluate_stamina(18, 40, 60.0, 0.8, 0.0);
        assert_eq!(rating, StaminaRating::Excellent);
    }

    #[test]
    fn pause_of_exactly_five_seconds_earns_one_point() {
        let rating = evaluate_stamina(18, 40, 60.0, 0.9, 5.0);
        assert_eq!(rating, StaminaRating::Excellent);
    }

    #[test]
    fn age_of_exactly_25_earns_one_point() {
        let rating = evaluate_stamina(25, 40, 60.0, 0.9, 0.0);
        assert_eq!(rating, StaminaRating::Excellent);
    }

    #[test]
    fn total_boundaries_map_to_the_named_brackets() {
        // 5 points: rate 1 + score 2 + pause 0 + age 2
        assert_eq!(
            evaluate_stamina(18, 20, 60.0, 0.9, 12.0),
            StaminaRating::Good
        );
        // 3 points: rate 0 + score 1 + pause 0 + age 2
        assert_eq!(
            evaluate_stamina(18, 5, 60.0, 0.7, 12.0),
            StaminaRating::Average
        );
        // 2 points: rate 0 + score 0 + pause 0 + age 2
        assert_eq!(
            evaluate_stamina(18, 0, 60.0, 0.1, 12.0),
            StaminaRating::NeedsImprovement
        );
    }

    #[test]
    fn zero_duration_session_uses_the_one_second_floor() {
        // must not divide by zero; 0 reps / 1 s floor -> rate 0
        let rating = evaluate_stamina(50, 0, 0.0, 0.0, 20.0);
        assert_eq!(rating, StaminaRating::NeedsImprovement);
    }

    #[test]
    fn rating_is_deterministic() {
        let a = evaluate_stamina(30, 25, 90.0, 0.75, 6.0);
        let b = evaluate_stamina(30, 25, 90.0, 0.75, 6.0);
        assert_eq!(a, b);
    }
}
