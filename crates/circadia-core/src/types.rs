//! Domain records shared across the engine.
//!
//! The two input records ([`CircadianProfile`], [`MenstrualCycleBaseline`])
//! are owned by the collecting collaborator and read-only to the engine.
//! Everything else is engine output, newly constructed per call.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minimum supported cycle length in days.
pub const MIN_CYCLE_LENGTH: u32 = 21;
/// Maximum supported cycle length in days.
pub const MAX_CYCLE_LENGTH: u32 = 35;

/// Natural circadian disposition derived from the onboarding survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chronotype {
    /// Early wake, energy peaks before noon.
    Morning,
    /// Mid-morning peak, the most common disposition.
    Intermediate,
    /// Late wake, energy peaks in the early afternoon.
    Evening,
}

impl fmt::Display for Chronotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Chronotype::Morning => "morning",
            Chronotype::Intermediate => "intermediate",
            Chronotype::Evening => "evening",
        };
        f.write_str(s)
    }
}

impl FromStr for Chronotype {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(Chronotype::Morning),
            "intermediate" => Ok(Chronotype::Intermediate),
            "evening" => Ok(Chronotype::Evening),
            _ => Err(ValidationError::InvalidValue {
                field: "chronotype".into(),
                message: format!("'{s}' is not one of morning/intermediate/evening"),
            }),
        }
    }
}

/// Menstrual-cycle stage for a given day, or `Neutral` when no cycle
/// baseline exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulatory,
    Luteal,
    Neutral,
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CyclePhase::Menstrual => "menstrual",
            CyclePhase::Follicular => "follicular",
            CyclePhase::Ovulatory => "ovulatory",
            CyclePhase::Luteal => "luteal",
            CyclePhase::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Gender recorded during onboarding. Not consumed by the energy model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "male",
            Gender::Female => "female",
        };
        f.write_str(s)
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ValidationError::InvalidValue {
                field: "gender".into(),
                message: format!("'{s}' is not one of male/female"),
            }),
        }
    }
}

/// Circadian profile collected once during onboarding.
///
/// Only `chronotype` feeds the energy model; the survey answers round-trip
/// through storage for display and re-derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircadianProfile {
    /// Derived or user-selected chronotype.
    pub chronotype: Chronotype,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Natural wake time from the survey.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_wake_time: Option<NaiveTime>,
    /// Self-reported peak energy time from the survey.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_energy_time: Option<NaiveTime>,
}

impl CircadianProfile {
    /// Create a profile from a chronotype alone.
    pub fn new(chronotype: Chronotype) -> Self {
        Self {
            chronotype,
            gender: None,
            natural_wake_time: None,
            peak_energy_time: None,
        }
    }
}

/// Menstrual-cycle baseline collected once during onboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenstrualCycleBaseline {
    /// Calendar date the last period started.
    pub last_period_start: NaiveDate,
    /// Average cycle length in days, within [`MIN_CYCLE_LENGTH`]..=[`MAX_CYCLE_LENGTH`].
    pub cycle_length: u32,
    /// Expected start of the next period. Informational only; the phase
    /// model never reads it.
    pub next_period_expected: NaiveDate,
}

impl MenstrualCycleBaseline {
    /// Create a validated baseline.
    ///
    /// `cycle_length` outside the supported range is rejected here, at the
    /// boundary where the value is first accepted. When
    /// `next_period_expected` is not supplied it defaults to
    /// `last_period_start + cycle_length` days.
    pub fn new(
        last_period_start: NaiveDate,
        cycle_length: u32,
        next_period_expected: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        if !(MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&cycle_length) {
            return Err(ValidationError::CycleLengthOutOfRange {
                value: cycle_length,
                min: MIN_CYCLE_LENGTH,
                max: MAX_CYCLE_LENGTH,
            });
        }
        let next_period_expected = next_period_expected
            .unwrap_or(last_period_start + Duration::days(i64::from(cycle_length)));
        Ok(Self {
            last_period_start,
            cycle_length,
            next_period_expected,
        })
    }
}

/// Estimated energy for one hour of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyLevel {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Estimated energy (0-100)
    pub energy: u8,
    /// Cycle phase of the day. Identical across all 24 records of a day.
    pub phase: CyclePhase,
}

/// One day of the 7-day forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPrediction {
    pub date: NaiveDate,
    pub cycle_phase: CyclePhase,
    /// Rounded mean of the day's 24 hourly energies (0-100).
    pub baseline_energy: u8,
    /// Exactly 24 entries, hours 0..=23 in order.
    pub hourly_levels: Vec<EnergyLevel>,
}

/// Category of a suggested activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Focus,
    Creative,
    Social,
    Rest,
    Exercise,
    Routine,
}

/// A suggested activity for a time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub category: ActivityCategory,
    /// Symbolic icon identifier, opaque to the engine.
    pub icon: String,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: ActivityCategory,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            icon: icon.into(),
        }
    }
}

/// Hourly recommendation: suggested activities plus a rationale sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub hour: u8,
    pub energy_level: u8,
    /// Between 1 and 4 entries, best first.
    pub activities: Vec<Activity>,
    pub rationale: String,
}

/// Day-level food and activity suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecommendation {
    pub foods: Vec<String>,
    pub activities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_rejects_out_of_range_length() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(MenstrualCycleBaseline::new(start, 20, None).is_err());
        assert!(MenstrualCycleBaseline::new(start, 36, None).is_err());
        assert!(MenstrualCycleBaseline::new(start, 21, None).is_ok());
        assert!(MenstrualCycleBaseline::new(start, 35, None).is_ok());
    }

    #[test]
    fn test_baseline_defaults_next_expected() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let baseline = MenstrualCycleBaseline::new(start, 28, None).unwrap();
        assert_eq!(
            baseline.next_period_expected,
            NaiveDate::from_ymd_opt(2025, 3, 29).unwrap()
        );
    }

    #[test]
    fn test_chronotype_from_str() {
        assert_eq!("morning".parse::<Chronotype>().unwrap(), Chronotype::Morning);
        assert_eq!("Evening".parse::<Chronotype>().unwrap(), Chronotype::Evening);
        assert!("lark".parse::<Chronotype>().is_err());
    }

    #[test]
    fn test_phase_display_matches_serde() {
        assert_eq!(CyclePhase::Ovulatory.to_string(), "ovulatory");
        assert_eq!(CyclePhase::Neutral.to_string(), "neutral");
    }
}
