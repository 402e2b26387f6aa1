//! Energy estimation engine.
//!
//! Combines a chronotype-based circadian curve with a cycle-phase modifier
//! into hourly energy scores, and extends them into a 7-day forecast. All
//! functions here are pure; dates are supplied by the caller.

mod curve;
mod cycle;
mod estimator;
mod forecast;

pub use curve::curve_value;
pub use cycle::{energy_modifier, phase_of};
pub use estimator::hourly_energy;
pub use forecast::{forecast, FORECAST_DAYS};
