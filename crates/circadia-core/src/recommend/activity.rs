//! Hour-level activity recommendations.
//!
//! Assembly order matters and is observable: the energy band picks a base
//! set, phase-conditional entries are appended, time-of-day entries are
//! prepended, and the list is truncated to four. Prepended entries are
//! therefore always visible; appended ones may fall off the end.

use crate::types::{Activity, ActivityCategory, CyclePhase, EnergyLevel, TimeSlot};

/// Maximum activities surfaced per time slot.
const MAX_ACTIVITIES: usize = 4;

fn base_set(energy: u8) -> Vec<Activity> {
    if energy >= 80 {
        vec![
            Activity::new(
                "Deep Work",
                "Tackle your most challenging tasks requiring intense focus",
                ActivityCategory::Focus,
                "brain",
            ),
            Activity::new(
                "Strategic Planning",
                "Make important decisions and plan long-term goals",
                ActivityCategory::Focus,
                "target",
            ),
            Activity::new(
                "Learning New Skills",
                "Your brain is primed for absorbing new information",
                ActivityCategory::Focus,
                "book-open",
            ),
        ]
    } else if energy >= 60 {
        vec![
            Activity::new(
                "Creative Work",
                "Brainstorm, write, design, or work on creative projects",
                ActivityCategory::Creative,
                "lightbulb",
            ),
            Activity::new(
                "Moderate Exercise",
                "Go for a run, hit the gym, or take a fitness class",
                ActivityCategory::Exercise,
                "activity",
            ),
            Activity::new(
                "Team Collaboration",
                "Participate in meetings and collaborative work",
                ActivityCategory::Social,
                "users",
            ),
            Activity::new(
                "Problem Solving",
                "Work through challenges that require logical thinking",
                ActivityCategory::Focus,
                "puzzle",
            ),
        ]
    } else if energy >= 40 {
        vec![
            Activity::new(
                "Routine Tasks",
                "Handle emails, organize, and complete admin work",
                ActivityCategory::Routine,
                "check-square",
            ),
            Activity::new(
                "Light Exercise",
                "Gentle yoga, walking, or stretching",
                ActivityCategory::Exercise,
                "move",
            ),
            Activity::new(
                "Reading",
                "Catch up on articles, reports, or light reading",
                ActivityCategory::Creative,
                "book",
            ),
        ]
    } else {
        vec![
            Activity::new(
                "Rest & Recovery",
                "Take breaks, meditate, or practice mindfulness",
                ActivityCategory::Rest,
                "moon",
            ),
            Activity::new(
                "Light Activities",
                "Gentle tasks that don't require much mental energy",
                ActivityCategory::Routine,
                "coffee",
            ),
            Activity::new(
                "Reflection",
                "Journal, reflect, or plan for tomorrow",
                ActivityCategory::Rest,
                "pen-tool",
            ),
        ]
    }
}

fn time_of_day(hour: u8) -> &'static str {
    if hour < 12 {
        "morning"
    } else if hour < 17 {
        "afternoon"
    } else if hour < 21 {
        "evening"
    } else {
        "night"
    }
}

fn rationale(hour: u8, energy: u8) -> String {
    let when = time_of_day(hour);
    if energy >= 80 {
        format!("Your peak performance window in the {when}. Cortisol and cognitive function are optimized for complex tasks.")
    } else if energy >= 60 {
        format!("Good energy levels in the {when}. Your brain is alert and ready for productive work.")
    } else if energy >= 40 {
        format!("Moderate energy in the {when}. Best for lighter tasks and maintaining momentum.")
    } else {
        format!("Lower energy in the {when}. Your body and mind benefit from rest and recovery activities.")
    }
}

/// Recommend activities and a rationale for one hour.
///
/// Always returns between 1 and 4 activities.
pub fn recommend(hour: u8, energy: u8, phase: CyclePhase) -> TimeSlot {
    let mut activities = base_set(energy);

    if energy >= 80 && matches!(phase, CyclePhase::Ovulatory | CyclePhase::Follicular) {
        activities.push(Activity::new(
            "Social Networking",
            "Connect with others, attend meetings, or collaborate",
            ActivityCategory::Social,
            "users",
        ));
    }
    if (40..60).contains(&energy) && phase == CyclePhase::Menstrual {
        activities.push(Activity::new(
            "Self-Care",
            "Focus on activities that nurture and restore you",
            ActivityCategory::Rest,
            "heart",
        ));
    }

    if (5..=7).contains(&hour) {
        activities.insert(
            0,
            Activity::new(
                "Morning Routine",
                "Hydrate, eat a nutritious breakfast, and set intentions",
                ActivityCategory::Routine,
                "sunrise",
            ),
        );
    }
    if hour >= 22 || hour <= 4 {
        activities.insert(
            0,
            Activity::new(
                "Sleep Preparation",
                "Wind down, dim lights, and prepare for quality sleep",
                ActivityCategory::Rest,
                "moon",
            ),
        );
    }

    activities.truncate(MAX_ACTIVITIES);

    TimeSlot {
        hour,
        energy_level: energy,
        activities,
        rationale: rationale(hour, energy),
    }
}

/// Map a day's hourly levels to time-slot recommendations.
pub fn time_slots(levels: &[EnergyLevel]) -> Vec<TimeSlot> {
    levels
        .iter()
        .map(|level| recommend(level.hour, level.energy, level.phase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bands_pick_base_sets() {
        let slot = recommend(10, 90, CyclePhase::Neutral);
        assert_eq!(slot.activities[0].name, "Deep Work");

        let slot = recommend(10, 65, CyclePhase::Neutral);
        assert_eq!(slot.activities[0].name, "Creative Work");
        assert_eq!(slot.activities.len(), 4);

        let slot = recommend(10, 45, CyclePhase::Neutral);
        assert_eq!(slot.activities[0].name, "Routine Tasks");

        let slot = recommend(10, 20, CyclePhase::Neutral);
        assert_eq!(slot.activities[0].name, "Rest & Recovery");
    }

    #[test]
    fn test_morning_routine_is_always_first() {
        for energy in [20u8, 45, 65, 90] {
            let slot = recommend(6, energy, CyclePhase::Neutral);
            assert_eq!(slot.activities[0].name, "Morning Routine");
            assert!(slot.activities.len() <= 4);
        }
    }

    #[test]
    fn test_sleep_preparation_wraps_midnight() {
        assert_eq!(
            recommend(23, 50, CyclePhase::Neutral).activities[0].name,
            "Sleep Preparation"
        );
        assert_eq!(
            recommend(2, 50, CyclePhase::Neutral).activities[0].name,
            "Sleep Preparation"
        );
        assert_ne!(
            recommend(5, 50, CyclePhase::Neutral).activities[0].name,
            "Sleep Preparation"
        );
    }

    #[test]
    fn test_follicular_high_energy_adds_social() {
        let slot = recommend(10, 90, CyclePhase::Follicular);
        assert!(slot
            .activities
            .iter()
            .any(|a| a.name == "Social Networking"));
    }

    #[test]
    fn test_phase_entry_drops_under_truncation() {
        // Morning override + three-item focus set already fill the slot, so
        // the appended social entry is cut.
        let slot = recommend(6, 90, CyclePhase::Ovulatory);
        assert_eq!(slot.activities.len(), 4);
        assert_eq!(slot.activities[0].name, "Morning Routine");
        assert!(!slot
            .activities
            .iter()
            .any(|a| a.name == "Social Networking"));
    }

    #[test]
    fn test_menstrual_midband_adds_self_care() {
        let slot = recommend(10, 45, CyclePhase::Menstrual);
        assert!(slot.activities.iter().any(|a| a.name == "Self-Care"));
        // At 60 the balanced band applies and self-care does not.
        let slot = recommend(10, 60, CyclePhase::Menstrual);
        assert!(!slot.activities.iter().any(|a| a.name == "Self-Care"));
    }

    #[test]
    fn test_rationale_buckets() {
        assert!(recommend(9, 90, CyclePhase::Neutral)
            .rationale
            .contains("peak performance window in the morning"));
        assert!(recommend(13, 65, CyclePhase::Neutral)
            .rationale
            .contains("afternoon"));
        assert!(recommend(18, 45, CyclePhase::Neutral)
            .rationale
            .contains("evening"));
        assert!(recommend(22, 30, CyclePhase::Neutral)
            .rationale
            .contains("night"));
    }

    proptest! {
        #[test]
        fn prop_one_to_four_activities(
            hour in 0u8..24,
            energy in 0u8..=100,
            phase_idx in 0usize..5,
        ) {
            let phase = [
                CyclePhase::Menstrual,
                CyclePhase::Follicular,
                CyclePhase::Ovulatory,
                CyclePhase::Luteal,
                CyclePhase::Neutral,
            ][phase_idx];
            let slot = recommend(hour, energy, phase);
            prop_assert!((1..=4).contains(&slot.activities.len()));
            prop_assert_eq!(slot.hour, hour);
            prop_assert_eq!(slot.energy_level, energy);
        }
    }
}
