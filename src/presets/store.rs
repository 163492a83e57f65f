//! In-memory preset store
//!
//! Presets live for the session only. Names are not required to be unique;
//! lookups return the first preset added under a name.

use super::types::Preset;

/// Ordered collection of presets, owned by the session that created it
#[derive(Debug, Clone, Default)]
pub struct PresetStore {
    presets: Vec<Preset>,
}

impl PresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a preset (duplicate names are accepted)
    pub fn add(&mut self, preset: Preset) {
        if self.find_by_name(preset.name()).is_some() {
            log::warn!(
                "Preset name '{}' already used; lookups keep returning the first one",
                preset.name()
            );
        }
        log::info!("Saved preset '{}'", preset.name());
        self.presets.push(preset);
    }

    /// First preset with exactly this name
    pub fn find_by_name(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name() == name)
    }

    /// Preset names in insertion order
    pub fn list_names(&self) -> Vec<&str> {
        self.presets.iter().map(Preset::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }
}
