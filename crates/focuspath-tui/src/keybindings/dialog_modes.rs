use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct EditDialogProvider;

impl KeybindingProvider for EditDialogProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Edit Task",
            vec![
                Keybinding::new("Tab/↓", "next", "Next field"),
                Keybinding::new("Shift+Tab/↑", "prev", "Previous field"),
                Keybinding::new("Enter", "save", "Save changes"),
                Keybinding::new("Esc", "cancel", "Discard changes"),
            ],
        )
    }
}

pub struct FilterDialogProvider;

impl KeybindingProvider for FilterDialogProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Filter Tasks",
            vec![
                Keybinding::new("Tab/↓", "next", "Next filter"),
                Keybinding::new("←/→", "adjust", "Lower or raise a threshold"),
                Keybinding::new("1-9,0", "set", "Set a threshold (0 is 10)"),
                Keybinding::new("r", "reset", "Reset the focused filter"),
                Keybinding::new("Enter/Esc", "close", "Close the filter panel"),
            ],
        )
    }
}

pub struct SearchModeProvider;

impl KeybindingProvider for SearchModeProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Search Mode",
            vec![
                Keybinding::new("Esc", "clear", "Clear search"),
                Keybinding::new("Enter", "keep", "Keep search and return"),
                Keybinding::new("Type", "query", "Enter search query"),
            ],
        )
    }
}
