//! UI module - text-menu front end
//!
//! This module contains all user-facing code:
//! - `menu` - Interactive session that prompts for inputs and owns the presets
//! - `summary` - Text summaries for drinks and presets

pub mod menu;
pub mod summary;

pub use menu::Session;
