//! # Circadia Core Library
//!
//! Deterministic energy estimation for a person's day: a chronotype-based
//! circadian curve combined with an optional menstrual-cycle phase modifier
//! yields 24 hourly energy scores, a rolling 7-day forecast, and activity,
//! food, and rationale recommendations.
//!
//! ## Architecture
//!
//! - **Energy engine**: pure lookup tables and arithmetic — circadian
//!   curves, cycle phases, hourly estimation, forecast
//! - **Recommenders**: (hour, energy, phase) to activities and copy;
//!   (average energy, phase) to day-level foods and activities
//! - **Records**: plain serde types for the two onboarding inputs and all
//!   engine outputs
//!
//! The engine never reads the clock or touches storage; the caller passes
//! already-resolved records and a reference date, which keeps every
//! function a total, trivially testable map over its inputs.
//!
//! ## Key entry points
//!
//! - [`hourly_energy`]: 24 [`EnergyLevel`]s for one calendar day
//! - [`forecast`]: 7 [`DayPrediction`]s from a reference date
//! - [`time_slots`] / [`recommend`]: hourly [`TimeSlot`] recommendations
//! - [`daily_recommendation`]: day-level foods and activities
//! - [`analyze_chronotype`]: survey answers to [`Chronotype`]

pub mod analysis;
pub mod energy;
pub mod error;
pub mod recommend;
pub mod types;

pub use analysis::analyze_chronotype;
pub use energy::{curve_value, energy_modifier, forecast, hourly_energy, phase_of, FORECAST_DAYS};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use recommend::{daily_recommendation, phase_advice, recommend, time_slots};
pub use types::{
    Activity, ActivityCategory, Chronotype, CircadianProfile, CyclePhase, DailyRecommendation,
    DayPrediction, EnergyLevel, Gender, MenstrualCycleBaseline, TimeSlot, MAX_CYCLE_LENGTH,
    MIN_CYCLE_LENGTH,
};
