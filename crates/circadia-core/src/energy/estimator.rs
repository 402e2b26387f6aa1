//! Hourly energy estimation for a single calendar day.

use chrono::NaiveDate;

use crate::energy::curve::curve_value;
use crate::energy::cycle::{energy_modifier, phase_of};
use crate::types::{CircadianProfile, CyclePhase, EnergyLevel, MenstrualCycleBaseline};

/// Estimate hourly energy for `target_date`.
///
/// Returns exactly 24 entries with hours 0..=23 in order. The cycle phase
/// and its modifier are computed once per call from the day offset between
/// `target_date` and the baseline's last period start; without a baseline
/// the day is `Neutral` with a modifier of 1.0.
pub fn hourly_energy(
    profile: &CircadianProfile,
    cycle: Option<&MenstrualCycleBaseline>,
    target_date: NaiveDate,
) -> Vec<EnergyLevel> {
    let (phase, modifier) = match cycle {
        Some(baseline) => {
            let days_since = (target_date - baseline.last_period_start).num_days();
            let phase = phase_of(days_since, baseline.cycle_length);
            (phase, energy_modifier(phase))
        }
        None => (CyclePhase::Neutral, 1.0),
    };

    (0u32..24)
        .map(|hour| {
            let fraction = curve_value(profile.chronotype, hour);
            // Round half away from zero, then clamp to the top of the scale.
            // The 0.3 curve floor keeps the product well above zero.
            let energy = ((fraction * modifier * 100.0).round() as i64).min(100) as u8;
            EnergyLevel {
                hour: hour as u8,
                energy,
                phase,
            }
        })
        .collect()
}
