//! Brewed coffee calculation
//!
//! Converts a strength, roast and serving count into the water volume and
//! grounds mass for a pot of drip/pour-over coffee.

use super::lookup::{roast_adjustment, BrewStrength};
use super::units::{grams_to_scoops, VOLUME_PER_SERVING};
use super::CalcError;

/// Result of a brewed coffee calculation
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeBrewResult {
    /// Cups requested (echoed back, lowered by the iced add-on)
    pub serving_count_requested: f64,
    /// Water to brew with in mL
    pub water_volume_ml: f64,
    /// Grounds in grams
    pub grounds_mass_g: f64,
    /// Water-to-grounds ratio after the roast adjustment
    pub brew_ratio: f64,
    /// Grounds expressed in scoops
    pub grounds_scoops: f64,
}

/// Calculate water and grounds for a brewed coffee
///
/// Strength is validated; roast is not. An unrecognized roast brews with the
/// unadjusted strength ratio.
pub fn calc_coffee(
    strength: &str,
    roast: &str,
    serving_count: f64,
) -> Result<CoffeeBrewResult, CalcError> {
    let Some(strength_kind) = BrewStrength::parse(strength) else {
        log::warn!("Rejected coffee strength {:?}", strength);
        return Err(CalcError::UnknownStrength(strength.to_string()));
    };

    if !serving_count.is_finite() || serving_count <= 0.0 {
        log::warn!("Rejected coffee serving count {}", serving_count);
        return Err(CalcError::NonPositiveServings(serving_count));
    }

    // Unknown roasts adjust by nothing
    let brew_ratio = strength_kind.base_ratio() + roast_adjustment(roast);
    let water_volume_ml = serving_count * VOLUME_PER_SERVING;
    let grounds_mass_g = water_volume_ml / brew_ratio;

    log::debug!(
        "Coffee: {} cup(s), strength {}, roast {} -> 1:{} ({:.1} g)",
        serving_count,
        strength,
        roast,
        brew_ratio,
        grounds_mass_g
    );

    Ok(CoffeeBrewResult {
        serving_count_requested: serving_count,
        water_volume_ml,
        grounds_mass_g,
        brew_ratio,
        grounds_scoops: grams_to_scoops(grounds_mass_g),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lookup::Roast;
    use crate::test_fixtures::assert_close;

    #[test]
    fn test_bolder_light_two_cups() {
        let result = calc_coffee("bolder", "light", 2.0).unwrap();
        assert_close(result.brew_ratio, 15.0);
        assert_close(result.water_volume_ml, 480.0);
        assert_close(result.grounds_mass_g, 32.0);
        assert_close(result.grounds_scoops, 2.0);
        assert_close(result.serving_count_requested, 2.0);
    }

    #[test]
    fn test_all_valid_combinations() {
        for strength in BrewStrength::LABELS {
            for roast in Roast::LABELS {
                for cups in [0.5, 1.0, 1.5, 4.0] {
                    let result = calc_coffee(strength, roast, cups).unwrap();
                    let ratio = BrewStrength::parse(strength).unwrap().base_ratio()
                        + Roast::parse(roast).unwrap().ratio_adjustment();

                    assert_close(result.brew_ratio, ratio);
                    assert_close(result.water_volume_ml, cups * 240.0);
                    assert_close(result.grounds_mass_g, result.water_volume_ml / ratio);
                    assert_close(result.grounds_scoops, result.grounds_mass_g / 16.0);
                }
            }
        }
    }

    #[test]
    fn test_non_positive_servings_fail() {
        for strength in BrewStrength::LABELS {
            for roast in Roast::LABELS {
                assert_eq!(
                    calc_coffee(strength, roast, 0.0),
                    Err(CalcError::NonPositiveServings(0.0))
                );
                assert_eq!(
                    calc_coffee(strength, roast, -1.0),
                    Err(CalcError::NonPositiveServings(-1.0))
                );
            }
        }
        assert!(calc_coffee("medium", "medium", f64::NAN).is_err());
        assert!(calc_coffee("medium", "medium", f64::INFINITY).is_err());
    }

    #[test]
    fn test_unknown_strength_fails() {
        assert_eq!(
            calc_coffee("invalid", "medium", 2.0),
            Err(CalcError::UnknownStrength("invalid".to_string()))
        );
    }

    #[test]
    fn test_strength_checked_before_servings() {
        assert!(matches!(
            calc_coffee("invalid", "medium", 0.0),
            Err(CalcError::UnknownStrength(_))
        ));
    }

    #[test]
    fn test_unknown_roast_is_not_an_error() {
        let result = calc_coffee("medium", "espresso-roast", 1.0).unwrap();
        assert_close(result.brew_ratio, 16.0);
        assert_close(result.grounds_mass_g, 15.0);
    }

    #[test]
    fn test_selectors_are_case_insensitive() {
        let lower = calc_coffee("weaker", "dark", 3.0).unwrap();
        let upper = calc_coffee("WEAKER", "Dark", 3.0).unwrap();
        assert_eq!(lower, upper);
        assert_close(upper.brew_ratio, 17.0);
    }
}
