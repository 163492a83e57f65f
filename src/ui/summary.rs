//! Text summaries for calculated drinks and presets

use std::fmt::Write as _;

use crate::core::{AppSettings, CoffeeAddons, CoffeeBrewResult, LatteAddons, LatteResult};
use crate::presets::{DrinkParams, Preset, PresetStore};

/// Format a number with the configured decimals
fn num(value: f64, settings: &AppSettings) -> String {
    format!("{:.*}", settings.decimal_places, value)
}

/// Grams, with scoops appended when enabled
fn grounds(grams: f64, scoops: f64, settings: &AppSettings) -> String {
    if settings.show_scoops {
        format!("{} g ({} tbsp)", num(grams, settings), num(scoops, settings))
    } else {
        format!("{} g", num(grams, settings))
    }
}

pub fn format_coffee_summary(
    result: &CoffeeBrewResult,
    roast: &str,
    strength: &str,
    addons: &CoffeeAddons,
    settings: &AppSettings,
) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "\n--- Coffee Summary ---");
    let _ = writeln!(s, "Roast Type:         {}", roast);
    let _ = writeln!(s, "Strength:           {} (1:{})", strength, num(result.brew_ratio, settings));
    let _ = writeln!(
        s,
        "Required Water:     {} cup(s) ({} mL)",
        num(result.serving_count_requested, settings),
        num(result.water_volume_ml, settings)
    );
    let _ = writeln!(
        s,
        "Coffee Grounds:     {}",
        grounds(result.grounds_mass_g, result.grounds_scoops, settings)
    );
    if addons.iced {
        let _ = writeln!(s, "Served:             iced");
    }
    if let Some(topping) = &addons.topping {
        let _ = writeln!(s, "Topping:            {}", topping);
    }
    let _ = writeln!(s, "Enjoy your coffee!");
    s
}

pub fn format_latte_summary(
    result: &LatteResult,
    strength: &str,
    addons: &LatteAddons,
    settings: &AppSettings,
) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "\n--- Latte Summary ---");
    let _ = writeln!(
        s,
        "Strength (brew):      {} (espresso 1:{})",
        strength,
        num(result.brew_ratio(), settings)
    );
    let _ = writeln!(
        s,
        "Shot Plan:            {} x {} shot(s)",
        result.shot_count(),
        result.shot_size_label()
    );
    let _ = writeln!(
        s,
        "Coffee Grounds:       {}",
        grounds(result.grounds_mass_g(), result.grounds_scoops(), settings)
    );
    let _ = writeln!(
        s,
        "Espresso Output:      {} cup(s) ({} mL)",
        num(result.espresso_servings(), settings),
        num(result.espresso_volume_ml(), settings)
    );

    if result.has_milk_target() {
        let _ = writeln!(
            s,
            "Milk Style Target:    {} (milk:espresso = {}:1)",
            result.milk_style_label(),
            num(result.milk_to_espresso_ratio(), settings)
        );
        let _ = writeln!(
            s,
            "Milk Volume:          {} cup(s) ({} mL)",
            num(result.milk_servings(), settings),
            num(result.milk_volume_ml(), settings)
        );
        let _ = writeln!(
            s,
            "Estimated Final Size: {} cup(s) ({} mL)",
            num(result.final_servings(), settings),
            num(result.final_volume_ml(), settings)
        );
    } else {
        let _ = writeln!(
            s,
            "Milk:                 to taste (add milk to reach your preferred latte size)"
        );
    }

    if addons.iced {
        let _ = writeln!(s, "Served:               iced");
    }
    if let Some(topping) = &addons.topping {
        let _ = writeln!(s, "Topping:              {}", topping);
    }
    let _ = writeln!(s, "Enjoy your latte!");
    s
}

/// Stored inputs of a preset
pub fn format_preset(preset: &Preset, settings: &AppSettings) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "\n=== Preset: {} ===", preset.name());
    let _ = writeln!(s, "Created: {}", preset.created());

    match preset.params() {
        Some(DrinkParams::Coffee(p)) => {
            let _ = writeln!(s, "Type: coffee");
            let _ = writeln!(s, "Roast:            {}", p.roast);
            let _ = writeln!(s, "Strength:         {}", p.strength);
            let _ = writeln!(s, "Cups:             {}", num(p.serving_count, settings));
        }
        Some(DrinkParams::Latte(p)) => {
            let _ = writeln!(s, "Type: latte");
            let _ = writeln!(s, "Shot Size:        {}", p.shot_size);
            let _ = writeln!(s, "Shots:            {}", p.shot_count);
            let _ = writeln!(s, "Strength:         {}", p.strength);
            let _ = writeln!(s, "Milk Style:       {}", p.milk_style);
            let _ = writeln!(s, "Milk Ratio:       {}", num(p.milk_ratio, settings));
        }
        None => {
            let _ = writeln!(s, "Type: (not set)");
        }
    }
    s
}

/// One line per preset: name and drink kind
pub fn format_preset_list(store: &PresetStore) -> String {
    if store.is_empty() {
        return "\nNo presets saved.\n".to_string();
    }

    let mut s = String::from("\n--- Saved Presets ---\n");
    for preset in store.iter() {
        let kind = preset
            .drink_kind()
            .map_or_else(|| "not set".to_string(), |k| k.to_string());
        let _ = writeln!(s, "• {} ({})", preset.name(), kind);
    }
    s
}
