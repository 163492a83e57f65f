//! Main menu actions
//!
//! Actions the user can pick from the main menu by number.

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    MakeDrink,
    CreatePreset,
    LoadPreset,
    ListPresets,
    Quit,
}

impl MenuAction {
    /// All actions in menu order
    pub const ALL: [MenuAction; 5] = [
        MenuAction::MakeDrink,
        MenuAction::CreatePreset,
        MenuAction::LoadPreset,
        MenuAction::ListPresets,
        MenuAction::Quit,
    ];

    /// Parse a 1-based menu number
    pub fn from_choice(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::MakeDrink => "Make a drink",
            MenuAction::CreatePreset => "Create a preset",
            MenuAction::LoadPreset => "Load a preset",
            MenuAction::ListPresets => "List presets",
            MenuAction::Quit => "Quit",
        }
    }
}
