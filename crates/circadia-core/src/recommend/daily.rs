//! Day-level food and activity recommendations.
//!
//! Two-axis selection: when the phase is known, foods come from a fixed
//! per-phase table and activities are phase-driven; when the phase is
//! `Neutral`, both fall back to the energy band. The asymmetry is
//! intentional and observable output depends on it.

use crate::types::{CyclePhase, DailyRecommendation};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn energy_activities(average_energy: u8) -> Vec<String> {
    if average_energy >= 80 {
        strings(&["HIIT workout", "Team sports", "Complex projects"])
    } else if average_energy >= 60 {
        strings(&["Cardio", "Social meetings", "Creative work"])
    } else if average_energy >= 40 {
        strings(&["Walking", "Light yoga", "Administrative tasks"])
    } else {
        strings(&["Meditation", "Rest", "Light reading"])
    }
}

fn energy_foods(average_energy: u8) -> Vec<String> {
    if average_energy >= 80 {
        strings(&["Lean proteins", "Complex carbs", "Healthy fats"])
    } else if average_energy >= 60 {
        strings(&["Whole grains", "Vegetables", "Nuts"])
    } else if average_energy >= 40 {
        strings(&["Light meals", "Fruits", "Green tea"])
    } else {
        strings(&["Warm soups", "Herbal tea", "Easy-to-digest foods"])
    }
}

/// Summary-level recommendation for a whole day.
pub fn daily_recommendation(average_energy: u8, phase: CyclePhase) -> DailyRecommendation {
    let mut activities = energy_activities(average_energy);

    let foods = match phase {
        CyclePhase::Menstrual => {
            // Keep the energy-based list minus anything HIIT-flavored, then
            // add recovery work.
            activities.retain(|a| !a.contains("HIIT"));
            activities.push("Gentle stretching".to_string());
            activities.push("Restorative yoga".to_string());
            strings(&["Iron-rich foods", "Leafy greens", "Dark chocolate"])
        }
        CyclePhase::Follicular => {
            activities = strings(&["Strength training", "New challenges", "Social activities"]);
            strings(&["Whole grains", "Lean proteins", "Fresh fruits"])
        }
        CyclePhase::Ovulatory => {
            activities = strings(&[
                "High-intensity workouts",
                "Important meetings",
                "Public speaking",
            ]);
            strings(&["Colorful vegetables", "Omega-3 rich fish", "Berries"])
        }
        CyclePhase::Luteal => {
            activities = strings(&[
                "Moderate exercise",
                "Detail-oriented work",
                "Planning sessions",
            ]);
            strings(&["Complex carbs", "Magnesium-rich foods", "Herbal tea"])
        }
        CyclePhase::Neutral => energy_foods(average_energy),
    };

    DailyRecommendation { foods, activities }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_foods_follow_energy_band() {
        let high = daily_recommendation(85, CyclePhase::Neutral);
        assert_eq!(high.foods[0], "Lean proteins");
        assert_eq!(high.activities[0], "HIIT workout");

        let low = daily_recommendation(30, CyclePhase::Neutral);
        assert_eq!(low.foods[0], "Warm soups");
        assert_eq!(low.activities[0], "Meditation");
    }

    #[test]
    fn test_known_phase_foods_ignore_energy() {
        let high = daily_recommendation(90, CyclePhase::Luteal);
        let low = daily_recommendation(30, CyclePhase::Luteal);
        assert_eq!(high.foods, low.foods);
        assert_eq!(high.foods[0], "Complex carbs");
    }

    #[test]
    fn test_menstrual_filters_hiit_and_appends_recovery() {
        let rec = daily_recommendation(85, CyclePhase::Menstrual);
        assert!(!rec.activities.iter().any(|a| a.contains("HIIT")));
        assert_eq!(
            rec.activities,
            vec![
                "Team sports",
                "Complex projects",
                "Gentle stretching",
                "Restorative yoga",
            ]
        );
        assert_eq!(rec.foods[0], "Iron-rich foods");
    }

    #[test]
    fn test_menstrual_low_energy_keeps_rest_list() {
        // No HIIT entry to filter in the low band.
        let rec = daily_recommendation(30, CyclePhase::Menstrual);
        assert_eq!(
            rec.activities,
            vec![
                "Meditation",
                "Rest",
                "Light reading",
                "Gentle stretching",
                "Restorative yoga",
            ]
        );
    }

    #[test]
    fn test_phase_overrides_activities() {
        let rec = daily_recommendation(90, CyclePhase::Ovulatory);
        assert_eq!(
            rec.activities,
            vec!["High-intensity workouts", "Important meetings", "Public speaking"]
        );
        let rec = daily_recommendation(30, CyclePhase::Follicular);
        assert_eq!(rec.activities[0], "Strength training");
    }
}
