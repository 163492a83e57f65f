//! Unit conversion constants
//!
//! Brewed volumes are reported in servings (cups) and grounds in scoops
//! (tablespoons) alongside the metric values.

/// Volume of one serving (cup) in mL
pub const VOLUME_PER_SERVING: f64 = 240.0;

/// Mass of one scoop (tablespoon) of grounds in grams
pub const MASS_PER_SCOOP: f64 = 16.0;

/// Convert a volume in mL to servings
pub fn ml_to_servings(ml: f64) -> f64 {
    ml / VOLUME_PER_SERVING
}

/// Convert a grounds mass in grams to scoops
pub fn grams_to_scoops(grams: f64) -> f64 {
    grams / MASS_PER_SCOOP
}
