//! Per-phase advisory copy.

use crate::types::CyclePhase;

/// One fixed advisory paragraph per cycle phase.
pub fn phase_advice(phase: CyclePhase) -> &'static str {
    match phase {
        CyclePhase::Menstrual => {
            "Your body is shedding the uterine lining. Energy may be lower, so prioritize rest, gentle movement, and iron-rich foods. Listen to your body and don't push too hard."
        }
        CyclePhase::Follicular => {
            "Rising estrogen boosts energy, mood, and cognitive function. This is an excellent time for challenging projects, learning new skills, and social activities."
        }
        CyclePhase::Ovulatory => {
            "Peak estrogen and testosterone levels enhance communication, confidence, and energy. Ideal for important presentations, negotiations, and social engagements."
        }
        CyclePhase::Luteal => {
            "Progesterone rises, potentially affecting energy and mood. Focus on completing projects, detail-oriented work, and self-care. Increase magnesium and B-vitamin intake."
        }
        CyclePhase::Neutral => {
            "Maintain balanced energy throughout the day by staying hydrated, eating regular meals, and following your natural circadian rhythm."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_phase_has_advice() {
        for phase in [
            CyclePhase::Menstrual,
            CyclePhase::Follicular,
            CyclePhase::Ovulatory,
            CyclePhase::Luteal,
            CyclePhase::Neutral,
        ] {
            assert!(!phase_advice(phase).is_empty());
        }
    }
}
