//! Recommendation mapping.
//!
//! Translates (hour, energy, phase) estimates into suggested activities,
//! foods, and short rationale/advice copy. Pure table lookups; no state.

mod activity;
mod advice;
mod daily;

pub use activity::{recommend, time_slots};
pub use advice::phase_advice;
pub use daily::daily_recommendation;
