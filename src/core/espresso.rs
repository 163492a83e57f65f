//! Espresso and latte calculation
//!
//! A latte starts from a shot plan (size x count) and an espresso strength.
//! The milk target is optional and applied afterwards with
//! [`LatteResult::with_milk_target`].

use super::lookup::{is_no_milk, validate_milk_ratio, EspressoStrength, ShotSize};
use super::units::{grams_to_scoops, ml_to_servings};
use super::CalcError;

/// Milk quantities for a latte with a milk target
#[derive(Debug, Clone, PartialEq)]
struct MilkTarget {
    /// Style label as entered (e.g. "cortado", "custom")
    style_label: String,
    /// Milk volume per unit of espresso volume
    milk_to_espresso_ratio: f64,
    milk_volume_ml: f64,
    milk_servings: f64,
    /// Espresso plus milk
    final_volume_ml: f64,
    final_servings: f64,
}

impl MilkTarget {
    fn derive(style_label: String, milk_to_espresso_ratio: f64, espresso_volume_ml: f64) -> Self {
        let milk_volume_ml = espresso_volume_ml * milk_to_espresso_ratio;
        let final_volume_ml = espresso_volume_ml + milk_volume_ml;
        Self {
            style_label,
            milk_to_espresso_ratio,
            milk_volume_ml,
            milk_servings: ml_to_servings(milk_volume_ml),
            final_volume_ml,
            final_servings: ml_to_servings(final_volume_ml),
        }
    }
}

/// Result of an espresso/latte calculation
///
/// Fields are read-only outside this module so that the dependent values
/// (grounds, espresso volume, milk) can only change together.
#[derive(Debug, Clone, PartialEq)]
pub struct LatteResult {
    shot_count: u32,
    shot_size: ShotSize,
    grounds_mass_g: f64,
    brew_ratio: f64,
    espresso_volume_ml: f64,
    espresso_servings: f64,
    grounds_scoops: f64,
    milk: Option<MilkTarget>,
}

impl LatteResult {
    /// Build a result from its inputs, deriving every dependent field
    pub(crate) fn derive(
        shot_count: u32,
        shot_size: ShotSize,
        brew_ratio: f64,
        milk: Option<(String, f64)>,
    ) -> Self {
        let grounds_mass_g = f64::from(shot_count) * shot_size.mass_per_shot();
        let espresso_volume_ml = grounds_mass_g * brew_ratio;
        Self {
            shot_count,
            shot_size,
            grounds_mass_g,
            brew_ratio,
            espresso_volume_ml,
            espresso_servings: ml_to_servings(espresso_volume_ml),
            grounds_scoops: grams_to_scoops(grounds_mass_g),
            milk: milk.map(|(label, ratio)| MilkTarget::derive(label, ratio, espresso_volume_ml)),
        }
    }

    /// Return a copy with a milk target applied
    ///
    /// A style of `none` (any case) clears the milk target. The ratio is used
    /// as given, so named styles should be looked up with
    /// [`milk_style_to_ratio`](super::milk_style_to_ratio) first.
    pub fn with_milk_target(&self, style_label: &str, ratio: f64) -> Result<Self, CalcError> {
        if is_no_milk(style_label) {
            return Ok(self.without_milk());
        }

        let ratio = validate_milk_ratio(ratio)?;
        Ok(Self::derive(
            self.shot_count,
            self.shot_size,
            self.brew_ratio,
            Some((style_label.to_string(), ratio)),
        ))
    }

    fn without_milk(&self) -> Self {
        Self {
            milk: None,
            ..self.clone()
        }
    }

    /// Milk settings carried over when re-deriving
    pub(crate) fn milk_settings(&self) -> Option<(String, f64)> {
        self.milk
            .as_ref()
            .map(|m| (m.style_label.clone(), m.milk_to_espresso_ratio))
    }

    pub fn shot_count(&self) -> u32 {
        self.shot_count
    }

    pub fn shot_size(&self) -> ShotSize {
        self.shot_size
    }

    pub fn shot_size_label(&self) -> &'static str {
        self.shot_size.label()
    }

    pub fn grounds_mass_g(&self) -> f64 {
        self.grounds_mass_g
    }

    pub fn brew_ratio(&self) -> f64 {
        self.brew_ratio
    }

    pub fn espresso_volume_ml(&self) -> f64 {
        self.espresso_volume_ml
    }

    pub fn espresso_servings(&self) -> f64 {
        self.espresso_servings
    }

    pub fn grounds_scoops(&self) -> f64 {
        self.grounds_scoops
    }

    pub fn has_milk_target(&self) -> bool {
        self.milk.is_some()
    }

    // Milk readers return zero (or "") when there is no milk target

    pub fn milk_style_label(&self) -> &str {
        self.milk.as_ref().map_or("", |m| m.style_label.as_str())
    }

    pub fn milk_to_espresso_ratio(&self) -> f64 {
        self.milk.as_ref().map_or(0.0, |m| m.milk_to_espresso_ratio)
    }

    pub fn milk_volume_ml(&self) -> f64 {
        self.milk.as_ref().map_or(0.0, |m| m.milk_volume_ml)
    }

    pub fn milk_servings(&self) -> f64 {
        self.milk.as_ref().map_or(0.0, |m| m.milk_servings)
    }

    pub fn final_volume_ml(&self) -> f64 {
        self.milk.as_ref().map_or(0.0, |m| m.final_volume_ml)
    }

    pub fn final_servings(&self) -> f64 {
        self.milk.as_ref().map_or(0.0, |m| m.final_servings)
    }
}

/// Calculate grounds and espresso volume for a shot plan
pub fn calc_latte_from_shots(
    strength: &str,
    shot_size: &str,
    shot_count: i32,
) -> Result<LatteResult, CalcError> {
    let shots = match u32::try_from(shot_count) {
        Ok(n) if n > 0 => n,
        _ => {
            log::warn!("Rejected shot count {}", shot_count);
            return Err(CalcError::NonPositiveShots(shot_count));
        }
    };

    let Some(size) = ShotSize::parse(shot_size) else {
        log::warn!("Rejected shot size {:?}", shot_size);
        return Err(CalcError::UnknownShotSize(shot_size.to_string()));
    };

    let Some(strength_kind) = EspressoStrength::parse(strength) else {
        log::warn!("Rejected espresso strength {:?}", strength);
        return Err(CalcError::UnknownStrength(strength.to_string()));
    };

    let result = LatteResult::derive(shots, size, strength_kind.brew_ratio(), None);

    log::debug!(
        "Latte: {} x {} shot(s), strength {} -> {:.1} g, {:.1} mL espresso",
        shots,
        size,
        strength,
        result.grounds_mass_g,
        result.espresso_volume_ml
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::assert_close;

    #[test]
    fn test_stronger_double_two_shots() {
        let result = calc_latte_from_shots("stronger", "double", 2).unwrap();
        assert_eq!(result.shot_count(), 2);
        assert_eq!(result.shot_size_label(), "double");
        assert_close(result.grounds_mass_g(), 32.0);
        assert_close(result.brew_ratio(), 2.0);
        assert_close(result.espresso_volume_ml(), 64.0);
        assert!((result.espresso_servings() - 0.267).abs() < 0.001);
        assert_close(result.grounds_scoops(), 2.0);
        assert!(!result.has_milk_target());
    }

    #[test]
    fn test_all_valid_combinations() {
        for size in ["single", "double"] {
            for strength in EspressoStrength::LABELS {
                for shots in 1..=4 {
                    let result = calc_latte_from_shots(strength, size, shots).unwrap();
                    let per_shot = if size == "single" { 8.0 } else { 16.0 };
                    let ratio = if strength == "stronger" { 2.0 } else { 2.5 };

                    assert_close(result.grounds_mass_g(), f64::from(shots) * per_shot);
                    assert_close(result.espresso_volume_ml(), result.grounds_mass_g() * ratio);
                    assert_close(result.espresso_servings(), result.espresso_volume_ml() / 240.0);
                }
            }
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            calc_latte_from_shots("stronger", "single", 0),
            Err(CalcError::NonPositiveShots(0))
        );
        assert_eq!(
            calc_latte_from_shots("stronger", "single", -3),
            Err(CalcError::NonPositiveShots(-3))
        );
        assert_eq!(
            calc_latte_from_shots("stronger", "triple", 1),
            Err(CalcError::UnknownShotSize("triple".to_string()))
        );
        assert_eq!(
            calc_latte_from_shots("medium", "single", 1),
            Err(CalcError::UnknownStrength("medium".to_string()))
        );
    }

    #[test]
    fn test_milk_target_derivation() {
        let espresso = calc_latte_from_shots("weaker", "single", 2).unwrap();
        // 16 g * 2.5 = 40 mL espresso
        let latte = espresso.with_milk_target("latte", 3.0).unwrap();

        assert!(latte.has_milk_target());
        assert_eq!(latte.milk_style_label(), "latte");
        assert_close(latte.milk_to_espresso_ratio(), 3.0);
        assert_close(latte.milk_volume_ml(), 120.0);
        assert_close(latte.milk_servings(), 0.5);
        assert_close(latte.final_volume_ml(), 160.0);
        assert_close(latte.final_servings(), 160.0 / 240.0);

        // Espresso fields untouched
        assert_close(latte.espresso_volume_ml(), 40.0);
        assert!(!espresso.has_milk_target());
    }

    #[test]
    fn test_milk_style_none_clears_target() {
        let latte = calc_latte_from_shots("stronger", "double", 1)
            .unwrap()
            .with_milk_target("cortado", 1.0)
            .unwrap();
        assert!(latte.has_milk_target());

        let plain = latte.with_milk_target("None", 5.0).unwrap();
        assert!(!plain.has_milk_target());
        assert_eq!(plain.milk_volume_ml(), 0.0);
        assert_eq!(plain.final_volume_ml(), 0.0);
        assert_eq!(plain.milk_style_label(), "");
    }

    #[test]
    fn test_negative_custom_ratio_rejected() {
        let espresso = calc_latte_from_shots("stronger", "single", 1).unwrap();
        assert_eq!(
            espresso.with_milk_target("custom", -1.0),
            Err(CalcError::NegativeMilkRatio(-1.0))
        );
    }

    #[test]
    fn test_custom_ratio_zero_keeps_target() {
        let latte = calc_latte_from_shots("stronger", "single", 1)
            .unwrap()
            .with_milk_target("custom", 0.0)
            .unwrap();
        assert!(latte.has_milk_target());
        assert_close(latte.final_volume_ml(), latte.espresso_volume_ml());
    }
}
