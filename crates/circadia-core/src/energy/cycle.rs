//! Menstrual-cycle phase model.

use crate::types::CyclePhase;

// Phase boundaries in days from cycle start. The tail (luteal) runs to the
// end of the cycle, whatever its length.
const MENSTRUAL_END: i64 = 5;
const FOLLICULAR_END: i64 = 12;
const OVULATORY_END: i64 = 17;

/// Map a day offset from the last period start to a cycle phase.
///
/// The offset may be negative (target date before the recorded period
/// start); floored modulo normalizes it into `[0, cycle_length)` first.
/// A degenerate `cycle_length` of 0 degrades to `Neutral` rather than
/// panicking on the modulo.
pub fn phase_of(days_since_last_period: i64, cycle_length: u32) -> CyclePhase {
    if cycle_length == 0 {
        return CyclePhase::Neutral;
    }
    let phase_day = days_since_last_period.rem_euclid(i64::from(cycle_length));

    if phase_day < MENSTRUAL_END {
        CyclePhase::Menstrual
    } else if phase_day < FOLLICULAR_END {
        CyclePhase::Follicular
    } else if phase_day < OVULATORY_END {
        CyclePhase::Ovulatory
    } else {
        CyclePhase::Luteal
    }
}

/// Multiplicative energy modifier for a cycle phase.
pub fn energy_modifier(phase: CyclePhase) -> f64 {
    match phase {
        CyclePhase::Menstrual => 0.70,
        CyclePhase::Follicular => 1.00,
        CyclePhase::Ovulatory => 1.10,
        CyclePhase::Luteal => 0.85,
        CyclePhase::Neutral => 1.00,
    }
}
