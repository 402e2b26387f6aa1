//! Per-chronotype circadian intensity curves.

use crate::types::Chronotype;

/// Fallback fraction for hours outside 0..24.
const DEFAULT_FRACTION: f64 = 0.5;

// Each curve is a smooth single-peak profile that floors at 0.3: no hour is
// treated as zero-energy.
const MORNING_CURVE: [f64; 24] = [
    0.3, 0.3, 0.3, 0.4, 0.5, 0.7, 0.9, 1.0, 0.95, 0.9, 0.85, 0.8, //
    0.75, 0.7, 0.65, 0.6, 0.55, 0.5, 0.45, 0.4, 0.35, 0.3, 0.3, 0.3,
];

const INTERMEDIATE_CURVE: [f64; 24] = [
    0.3, 0.3, 0.3, 0.3, 0.4, 0.5, 0.7, 0.85, 0.95, 1.0, 0.95, 0.9, //
    0.85, 0.8, 0.75, 0.7, 0.65, 0.6, 0.55, 0.5, 0.4, 0.35, 0.3, 0.3,
];

const EVENING_CURVE: [f64; 24] = [
    0.3, 0.3, 0.3, 0.3, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.85, 0.9, //
    0.95, 1.0, 0.95, 0.9, 0.85, 0.8, 0.75, 0.7, 0.65, 0.5, 0.4, 0.35,
];

/// Expected alertness fraction for a chronotype at a given hour.
///
/// Returns a value in [0.3, 1.0] for hours 0..24; out-of-range hours get a
/// defensive 0.5 instead of an error.
pub fn curve_value(chronotype: Chronotype, hour: u32) -> f64 {
    let table = match chronotype {
        Chronotype::Morning => &MORNING_CURVE,
        Chronotype::Intermediate => &INTERMEDIATE_CURVE,
        Chronotype::Evening => &EVENING_CURVE,
    };
    table
        .get(hour as usize)
        .copied()
        .unwrap_or(DEFAULT_FRACTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_peaks_per_chronotype() {
        assert_eq!(curve_value(Chronotype::Morning, 7), 1.0);
        assert_eq!(curve_value(Chronotype::Intermediate, 9), 1.0);
        assert_eq!(curve_value(Chronotype::Evening, 13), 1.0);
    }

    #[test]
    fn test_out_of_range_hour_falls_back() {
        assert_eq!(curve_value(Chronotype::Morning, 24), 0.5);
        assert_eq!(curve_value(Chronotype::Evening, 99), 0.5);
    }

    proptest! {
        #[test]
        fn prop_curve_within_bounds(hour in 0u32..24) {
            for chronotype in [
                Chronotype::Morning,
                Chronotype::Intermediate,
                Chronotype::Evening,
            ] {
                let value = curve_value(chronotype, hour);
                prop_assert!((0.3..=1.0).contains(&value));
            }
        }
    }
}
