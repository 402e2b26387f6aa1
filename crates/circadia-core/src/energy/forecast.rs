//! Rolling 7-day energy forecast.

use chrono::{Duration, NaiveDate};

use crate::energy::estimator::hourly_energy;
use crate::types::{CircadianProfile, DayPrediction, MenstrualCycleBaseline};

/// Number of days covered by a forecast, today inclusive.
pub const FORECAST_DAYS: usize = 7;

/// Forecast `today` through `today + 6`.
///
/// Each day is estimated independently from its own offset against the
/// cycle baseline; nothing is derived incrementally from the previous day.
pub fn forecast(
    profile: &CircadianProfile,
    cycle: Option<&MenstrualCycleBaseline>,
    today: NaiveDate,
) -> Vec<DayPrediction> {
    (0..FORECAST_DAYS as i64)
        .map(|offset| {
            let date = today + Duration::days(offset);
            let hourly_levels = hourly_energy(profile, cycle, date);

            let cycle_phase = hourly_levels[0].phase;
            let total: u32 = hourly_levels.iter().map(|l| u32::from(l.energy)).sum();
            let baseline_energy =
                (f64::from(total) / hourly_levels.len() as f64).round() as u8;

            DayPrediction {
                date,
                cycle_phase,
                baseline_energy,
                hourly_levels,
            }
        })
        .collect()
}
