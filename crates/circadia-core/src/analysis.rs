//! Chronotype derivation from survey answers.
//!
//! The survey flow itself lives with the collecting collaborator; this is
//! the scoring rule applied to its two time answers.

use crate::types::Chronotype;

/// Derive a chronotype from the natural wake hour and the self-reported
/// peak energy hour (both 0-23).
///
/// Early risers with a before-noon peak classify as morning types, late
/// risers with a late-afternoon peak as evening types, everyone else as
/// intermediate.
pub fn analyze_chronotype(natural_wake_hour: u32, peak_energy_hour: u32) -> Chronotype {
    if natural_wake_hour <= 6 && peak_energy_hour <= 12 {
        Chronotype::Morning
    } else if natural_wake_hour >= 9 && peak_energy_hour >= 16 {
        Chronotype::Evening
    } else {
        Chronotype::Intermediate
    }
}
