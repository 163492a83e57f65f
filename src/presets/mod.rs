// Presets module - named drink inputs kept for the session

pub mod store;
pub mod types;

pub use store::PresetStore;
pub use types::{DrinkKind, DrinkParams, DrinkResult, Preset, PresetError};
