use thiserror::Error;

/// Reasons a drink calculation is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Unknown strength: {0}")]
    UnknownStrength(String),

    #[error("Unknown shot size: {0} (expected single or double)")]
    UnknownShotSize(String),

    #[error("Serving count must be positive, got {0}")]
    NonPositiveServings(f64),

    #[error("Shot count must be positive, got {0}")]
    NonPositiveShots(i32),

    #[error("Milk ratio must be a non-negative number, got {0}")]
    NegativeMilkRatio(f64),
}
