//! Add-on adjustments applied after a base calculation
//!
//! Each function takes a finished result and returns a new, fully derived
//! one. Applying an adjustment again compounds it: icing a drink twice
//! lowers the water (or espresso ratio) twice.

use super::units::ml_to_servings;
use super::{CoffeeBrewResult, LatteResult};

/// Water kept when a brewed coffee is made iced
pub const ICED_COFFEE_WATER_FACTOR: f64 = 0.85;

/// Brew ratio kept when a latte is made iced
pub const ICED_LATTE_RATIO_FACTOR: f64 = 0.8;

/// Add-ons for a brewed coffee
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoffeeAddons {
    pub iced: bool,
    /// Descriptive only
    pub topping: Option<String>,
}

/// Add-ons for a latte
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatteAddons {
    pub iced: bool,
    pub extra_shots: u32,
    /// Descriptive only
    pub topping: Option<String>,
}

/// Apply coffee add-ons
///
/// Iced uses less water for the same grounds, so grounds, ratio and scoops
/// are kept and only the water and echoed serving count drop.
pub fn apply_coffee_addons(coffee: &CoffeeBrewResult, addons: &CoffeeAddons) -> CoffeeBrewResult {
    let mut adjusted = coffee.clone();

    if addons.iced {
        adjusted.water_volume_ml *= ICED_COFFEE_WATER_FACTOR;
        adjusted.serving_count_requested = ml_to_servings(adjusted.water_volume_ml);
        log::debug!(
            "Iced coffee: water {:.1} -> {:.1} mL",
            coffee.water_volume_ml,
            adjusted.water_volume_ml
        );
    }

    if let Some(topping) = &addons.topping {
        log::debug!("Coffee topping: {}", topping);
    }

    adjusted
}

/// Apply latte add-ons
///
/// Extra shots are added before icing. Any milk target is carried over and
/// re-derived from the new espresso volume.
pub fn apply_latte_addons(latte: &LatteResult, addons: &LatteAddons) -> LatteResult {
    let mut shot_count = latte.shot_count();
    let mut brew_ratio = latte.brew_ratio();

    if addons.extra_shots > 0 {
        shot_count = shot_count.saturating_add(addons.extra_shots);
        log::debug!(
            "Extra shots: {} -> {} x {}",
            latte.shot_count(),
            shot_count,
            latte.shot_size()
        );
    }

    if addons.iced {
        brew_ratio *= ICED_LATTE_RATIO_FACTOR;
        log::debug!("Iced latte: ratio {} -> {}", latte.brew_ratio(), brew_ratio);
    }

    if let Some(topping) = &addons.topping {
        log::debug!("Latte topping: {}", topping);
    }

    // Re-derive everything, milk included, from the new shots and ratio
    LatteResult::derive(shot_count, latte.shot_size(), brew_ratio, latte.milk_settings())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{calc_coffee, calc_latte_from_shots};
    use crate::test_fixtures::assert_close;

    fn iced_coffee() -> CoffeeAddons {
        CoffeeAddons {
            iced: true,
            topping: None,
        }
    }

    #[test]
    fn test_iced_coffee_reduces_water_only() {
        let coffee = calc_coffee("bolder", "light", 2.0).unwrap();
        let iced = apply_coffee_addons(&coffee, &iced_coffee());

        assert_close(iced.water_volume_ml, 480.0 * 0.85);
        assert_close(iced.serving_count_requested, 1.7);
        // Same grounds for less water
        assert_close(iced.grounds_mass_g, coffee.grounds_mass_g);
        assert_close(iced.brew_ratio, coffee.brew_ratio);
        assert_close(iced.grounds_scoops, coffee.grounds_scoops);
    }

    #[test]
    fn test_iced_coffee_compounds_when_applied_twice() {
        let coffee = calc_coffee("medium", "medium", 1.0).unwrap();
        let once = apply_coffee_addons(&coffee, &iced_coffee());
        let twice = apply_coffee_addons(&once, &iced_coffee());

        assert_close(twice.water_volume_ml, 240.0 * 0.85 * 0.85);
        assert!(twice.water_volume_ml < once.water_volume_ml);
        assert_close(twice.serving_count_requested, 0.85 * 0.85);
    }

    #[test]
    fn test_coffee_topping_changes_nothing() {
        let coffee = calc_coffee("weaker", "dark", 3.0).unwrap();
        let addons = CoffeeAddons {
            iced: false,
            topping: Some("cinnamon".to_string()),
        };
        assert_eq!(apply_coffee_addons(&coffee, &addons), coffee);
    }

    #[test]
    fn test_adjustment_leaves_input_untouched() {
        let coffee = calc_coffee("bolder", "medium", 1.0).unwrap();
        let snapshot = coffee.clone();
        let _ = apply_coffee_addons(&coffee, &iced_coffee());
        assert_eq!(coffee, snapshot);
    }

    #[test]
    fn test_extra_shots_rederive_milk_target() {
        let latte = calc_latte_from_shots("stronger", "single", 1)
            .unwrap()
            .with_milk_target("flatwhite", 2.0)
            .unwrap();
        let addons = LatteAddons {
            extra_shots: 2,
            ..Default::default()
        };
        let adjusted = apply_latte_addons(&latte, &addons);

        assert_eq!(adjusted.shot_count(), 3);
        assert_close(adjusted.grounds_mass_g(), 24.0);
        assert_close(adjusted.grounds_scoops(), 1.5);
        assert_close(adjusted.espresso_volume_ml(), 48.0);
        assert_close(adjusted.espresso_servings(), 0.2);
        assert_close(adjusted.milk_volume_ml(), 96.0);
        assert_close(
            adjusted.final_volume_ml(),
            adjusted.espresso_volume_ml() + adjusted.milk_volume_ml(),
        );
        assert_close(adjusted.final_servings(), adjusted.final_volume_ml() / 240.0);
        assert_eq!(adjusted.milk_style_label(), "flatwhite");
    }

    #[test]
    fn test_extra_shots_without_milk_target() {
        let latte = calc_latte_from_shots("weaker", "double", 1).unwrap();
        let addons = LatteAddons {
            extra_shots: 1,
            ..Default::default()
        };
        let adjusted = apply_latte_addons(&latte, &addons);

        assert_eq!(adjusted.shot_count(), 2);
        assert_close(adjusted.espresso_volume_ml(), 80.0);
        assert!(!adjusted.has_milk_target());
    }

    #[test]
    fn test_iced_latte_lowers_ratio_keeps_grounds() {
        let latte = calc_latte_from_shots("weaker", "double", 2)
            .unwrap()
            .with_milk_target("latte", 3.0)
            .unwrap();
        let addons = LatteAddons {
            iced: true,
            ..Default::default()
        };
        let iced = apply_latte_addons(&latte, &addons);

        assert_close(iced.brew_ratio(), 2.0);
        assert_close(iced.grounds_mass_g(), 32.0);
        assert_close(iced.espresso_volume_ml(), 64.0);
        assert_close(iced.milk_volume_ml(), 192.0);
        assert_close(iced.final_volume_ml(), 256.0);
    }

    #[test]
    fn test_iced_latte_compounds_when_applied_twice() {
        let latte = calc_latte_from_shots("weaker", "single", 1).unwrap();
        let addons = LatteAddons {
            iced: true,
            ..Default::default()
        };
        let twice = apply_latte_addons(&apply_latte_addons(&latte, &addons), &addons);
        assert_close(twice.brew_ratio(), 2.5 * 0.8 * 0.8);
    }

    #[test]
    fn test_extra_shots_applied_before_icing() {
        let latte = calc_latte_from_shots("stronger", "double", 1).unwrap();
        let addons = LatteAddons {
            iced: true,
            extra_shots: 1,
            topping: Some("chocolate".to_string()),
        };
        let adjusted = apply_latte_addons(&latte, &addons);

        assert_eq!(adjusted.shot_count(), 2);
        assert_close(adjusted.espresso_volume_ml(), 32.0 * 2.0 * 0.8);
    }

    #[test]
    fn test_empty_addons_change_nothing() {
        let coffee = calc_coffee("medium", "medium", 1.0).unwrap();
        assert_eq!(apply_coffee_addons(&coffee, &CoffeeAddons::default()), coffee);

        let latte = calc_latte_from_shots("stronger", "single", 2).unwrap();
        assert_eq!(apply_latte_addons(&latte, &LatteAddons::default()), latte);
    }
}
