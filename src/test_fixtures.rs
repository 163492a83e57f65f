//! Test fixtures shared across modules
//!
//! Float comparison helpers and ready-made presets.

#![cfg(test)]

use crate::presets::Preset;

/// Tolerance for comparing calculated quantities
pub const EPSILON: f64 = 1e-9;

/// Assert two floats are equal within [`EPSILON`]
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} but got {}",
        expected,
        actual
    );
}

/// Build a coffee preset
pub fn coffee_preset(name: &str, roast: &str, strength: &str, cups: f64) -> Preset {
    let mut preset = Preset::new(name);
    preset
        .set_coffee(roast, strength, cups)
        .expect("Fresh preset should accept a drink");
    preset
}

/// Build a latte preset
pub fn latte_preset(
    name: &str,
    shot_size: &str,
    shots: i32,
    strength: &str,
    milk_style: &str,
    milk_ratio: f64,
) -> Preset {
    let mut preset = Preset::new(name);
    preset
        .set_latte(shot_size, shots, strength, milk_style, milk_ratio)
        .expect("Fresh preset should accept a drink");
    preset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::DrinkKind;

    #[test]
    fn test_assert_close_accepts_rounding_noise() {
        assert_close(0.1 + 0.2, 0.3);
    }

    #[test]
    #[should_panic(expected = "expected 1 but got 1.1")]
    fn test_assert_close_rejects_real_difference() {
        assert_close(1.1, 1.0);
    }

    #[test]
    fn test_fixture_presets() {
        assert_eq!(
            coffee_preset("c", "dark", "medium", 1.0).drink_kind(),
            Some(DrinkKind::Coffee)
        );
        assert_eq!(
            latte_preset("l", "single", 1, "stronger", "none", 0.0).drink_kind(),
            Some(DrinkKind::Latte)
        );
    }
}
