//! Preset types for saving and replaying drink inputs

use thiserror::Error;

use crate::core::{
    calc_coffee, calc_latte_from_shots, is_no_milk, validate_milk_ratio, CalcError,
    CoffeeBrewResult, LatteResult,
};

/// Which calculator a preset replays through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrinkKind {
    Coffee,
    Latte,
}

impl DrinkKind {
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "coffee" => Some(Self::Coffee),
            "latte" => Some(Self::Latte),
            _ => None,
        }
    }
}

impl std::fmt::Display for DrinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrinkKind::Coffee => write!(f, "coffee"),
            DrinkKind::Latte => write!(f, "latte"),
        }
    }
}

/// Saved inputs for a brewed coffee
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeParams {
    pub roast: String,
    pub strength: String,
    pub serving_count: f64,
}

/// Saved inputs for a latte
#[derive(Debug, Clone, PartialEq)]
pub struct LatteParams {
    pub shot_size: String,
    pub shot_count: i32,
    pub strength: String,
    /// Style label as entered; "none" means no milk target
    pub milk_style: String,
    /// Ratio resolved when the preset was created (custom values included)
    pub milk_ratio: f64,
}

/// The drink a preset describes
#[derive(Debug, Clone, PartialEq)]
pub enum DrinkParams {
    Coffee(CoffeeParams),
    Latte(LatteParams),
}

impl DrinkParams {
    pub fn kind(&self) -> DrinkKind {
        match self {
            DrinkParams::Coffee(_) => DrinkKind::Coffee,
            DrinkParams::Latte(_) => DrinkKind::Latte,
        }
    }
}

/// Result of replaying a preset
#[derive(Debug, Clone, PartialEq)]
pub enum DrinkResult {
    Coffee(CoffeeBrewResult),
    Latte(LatteResult),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PresetError {
    #[error("Preset '{name}' is a {actual} preset, not {expected}")]
    WrongKind {
        name: String,
        expected: DrinkKind,
        actual: DrinkKind,
    },

    #[error("Preset '{0}' has no drink set")]
    Unpopulated(String),

    #[error("Preset '{0}' already has a drink set")]
    AlreadyPopulated(String),

    #[error("Error calculating preset: {0}")]
    Calc(#[from] CalcError),
}

/// A named, reusable set of drink inputs
///
/// Created with a name only, then filled in once with either
/// [`set_coffee`](Preset::set_coffee) or [`set_latte`](Preset::set_latte).
/// Inputs are stored as entered and validated on replay.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    name: String,
    /// When this preset was created (RFC 3339)
    created: String,
    drink: Option<DrinkParams>,
}

impl Preset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created: chrono::Utc::now().to_rfc3339(),
            drink: None,
        }
    }

    /// Tag this preset as a coffee and store its inputs
    pub fn set_coffee(
        &mut self,
        roast: &str,
        strength: &str,
        serving_count: f64,
    ) -> Result<(), PresetError> {
        self.populate(DrinkParams::Coffee(CoffeeParams {
            roast: roast.to_string(),
            strength: strength.to_string(),
            serving_count,
        }))
    }

    /// Tag this preset as a latte and store its inputs
    ///
    /// A negative or non-finite milk ratio is rejected unless the style is
    /// `none`, leaving the preset unpopulated.
    pub fn set_latte(
        &mut self,
        shot_size: &str,
        shot_count: i32,
        strength: &str,
        milk_style: &str,
        milk_ratio: f64,
    ) -> Result<(), PresetError> {
        if !is_no_milk(milk_style) {
            validate_milk_ratio(milk_ratio)?;
        }
        self.populate(DrinkParams::Latte(LatteParams {
            shot_size: shot_size.to_string(),
            shot_count,
            strength: strength.to_string(),
            milk_style: milk_style.to_string(),
            milk_ratio,
        }))
    }

    fn populate(&mut self, params: DrinkParams) -> Result<(), PresetError> {
        if self.drink.is_some() {
            return Err(PresetError::AlreadyPopulated(self.name.clone()));
        }
        log::debug!("Preset '{}' set as {}", self.name, params.kind());
        self.drink = Some(params);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    /// None until one of the setters has run
    pub fn drink_kind(&self) -> Option<DrinkKind> {
        self.drink.as_ref().map(DrinkParams::kind)
    }

    pub fn params(&self) -> Option<&DrinkParams> {
        self.drink.as_ref()
    }

    pub fn coffee(&self) -> Result<&CoffeeParams, PresetError> {
        match &self.drink {
            Some(DrinkParams::Coffee(params)) => Ok(params),
            Some(other) => Err(self.wrong_kind(DrinkKind::Coffee, other.kind())),
            None => Err(PresetError::Unpopulated(self.name.clone())),
        }
    }

    pub fn latte(&self) -> Result<&LatteParams, PresetError> {
        match &self.drink {
            Some(DrinkParams::Latte(params)) => Ok(params),
            Some(other) => Err(self.wrong_kind(DrinkKind::Latte, other.kind())),
            None => Err(PresetError::Unpopulated(self.name.clone())),
        }
    }

    fn wrong_kind(&self, expected: DrinkKind, actual: DrinkKind) -> PresetError {
        PresetError::WrongKind {
            name: self.name.clone(),
            expected,
            actual,
        }
    }

    /// Re-run the calculator matching this preset's drink
    ///
    /// Lattes get their stored milk ratio applied directly, without looking
    /// the style up again.
    pub fn replay(&self) -> Result<DrinkResult, PresetError> {
        match &self.drink {
            Some(DrinkParams::Coffee(p)) => {
                let result = calc_coffee(&p.strength, &p.roast, p.serving_count)?;
                Ok(DrinkResult::Coffee(result))
            }
            Some(DrinkParams::Latte(p)) => {
                let espresso = calc_latte_from_shots(&p.strength, &p.shot_size, p.shot_count)?;
                let latte = espresso.with_milk_target(&p.milk_style, p.milk_ratio)?;
                Ok(DrinkResult::Latte(latte))
            }
            None => Err(PresetError::Unpopulated(self.name.clone())),
        }
    }
}
