//! Core calculation logic
//!
//! This module contains:
//! - Unit constants (serving volume, scoop mass)
//! - Strength, roast, shot size and milk style lookups
//! - Brewed coffee and espresso/latte calculators
//! - Add-on adjustments applied after a calculation
//! - Application settings

mod addons;
mod brew;
mod error;
mod espresso;
mod lookup;
mod state;
mod units;

pub use addons::{apply_coffee_addons, apply_latte_addons, CoffeeAddons, LatteAddons};
pub use brew::{calc_coffee, CoffeeBrewResult};
pub use error::CalcError;
pub use espresso::{calc_latte_from_shots, LatteResult};
pub use lookup::{
    milk_style_to_ratio, BrewStrength, EspressoStrength, Roast, ShotSize, CUSTOM_RATIO_SENTINEL,
    INVALID_STYLE_SENTINEL,
};
pub use state::AppSettings;

pub(crate) use lookup::{is_no_milk, validate_milk_ratio};
