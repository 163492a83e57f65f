//! Strength, roast, shot size and milk style lookups
//!
//! Every selector is matched case-insensitively against a fixed vocabulary.
//! Brew strength and shot size reject unknown input; roast does not (an
//! unrecognized roast simply gets no ratio adjustment).

use super::CalcError;

/// Returned by [`milk_style_to_ratio`] for `custom`: the caller must supply a ratio
pub const CUSTOM_RATIO_SENTINEL: f64 = -1.0;

/// Returned by [`milk_style_to_ratio`] for a style outside the vocabulary
pub const INVALID_STYLE_SENTINEL: f64 = -2.0;

/// Strength of a brewed coffee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrewStrength {
    Bolder,
    Medium,
    Weaker,
}

impl BrewStrength {
    pub const LABELS: [&'static str; 3] = ["bolder", "medium", "weaker"];

    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "bolder" => Some(Self::Bolder),
            "medium" => Some(Self::Medium),
            "weaker" => Some(Self::Weaker),
            _ => None,
        }
    }

    /// Water-to-grounds ratio before the roast adjustment
    pub fn base_ratio(self) -> f64 {
        match self {
            Self::Bolder => 14.0,
            Self::Medium => 16.0,
            Self::Weaker => 18.0,
        }
    }
}

/// Bean roast level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roast {
    Light,
    Medium,
    Dark,
}

impl Roast {
    pub const LABELS: [&'static str; 3] = ["light", "medium", "dark"];

    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "medium" => Some(Self::Medium),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Additive change to the brew ratio for this roast
    pub fn ratio_adjustment(self) -> f64 {
        match self {
            Self::Light => 1.0,
            Self::Medium => 0.0,
            Self::Dark => -1.0,
        }
    }
}

/// Ratio adjustment for a roast label; unrecognized labels adjust by nothing
pub fn roast_adjustment(label: &str) -> f64 {
    Roast::parse(label).map_or(0.0, Roast::ratio_adjustment)
}

/// Strength of an espresso pull
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EspressoStrength {
    Stronger,
    Weaker,
}

impl EspressoStrength {
    pub const LABELS: [&'static str; 2] = ["stronger", "weaker"];

    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "stronger" => Some(Self::Stronger),
            "weaker" => Some(Self::Weaker),
            _ => None,
        }
    }

    /// Espresso liquid (mL) per gram of grounds
    pub fn brew_ratio(self) -> f64 {
        match self {
            Self::Stronger => 2.0,
            Self::Weaker => 2.5,
        }
    }
}

/// Size of one espresso shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotSize {
    Single,
    Double,
}

impl ShotSize {
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    /// Grams of grounds per shot
    pub fn mass_per_shot(self) -> f64 {
        match self {
            Self::Single => 8.0,
            Self::Double => 16.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

impl std::fmt::Display for ShotSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Named milk-to-espresso target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilkStyle {
    None,
    Cortado,
    FlatWhite,
    Latte,
    Custom,
}

impl MilkStyle {
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "none" => Some(Self::None),
            "cortado" => Some(Self::Cortado),
            "flatwhite" | "flat_white" => Some(Self::FlatWhite),
            "latte" => Some(Self::Latte),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Fixed milk:espresso ratio, or None for `custom`
    pub fn ratio(self) -> Option<f64> {
        match self {
            Self::None => Some(0.0),
            Self::Cortado => Some(1.0),
            Self::FlatWhite => Some(2.0),
            Self::Latte => Some(3.0),
            Self::Custom => None,
        }
    }
}

/// Map a milk style label to its milk:espresso ratio
///
/// Returns [`CUSTOM_RATIO_SENTINEL`] for `custom` and
/// [`INVALID_STYLE_SENTINEL`] for anything outside the vocabulary.
pub fn milk_style_to_ratio(label: &str) -> f64 {
    match MilkStyle::parse(label) {
        Some(style) => style.ratio().unwrap_or(CUSTOM_RATIO_SENTINEL),
        None => INVALID_STYLE_SENTINEL,
    }
}

pub(crate) fn validate_milk_ratio(ratio: f64) -> Result<f64, CalcError> {
    if ratio.is_finite() && ratio >= 0.0 {
        Ok(ratio)
    } else {
        Err(CalcError::NegativeMilkRatio(ratio))
    }
}

/// True when a milk style label means "no milk target"
pub(crate) fn is_no_milk(label: &str) -> bool {
    label.eq_ignore_ascii_case("none")
}
