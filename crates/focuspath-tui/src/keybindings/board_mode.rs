use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct BoardModeProvider;

impl KeybindingProvider for BoardModeProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Priority Matrix",
            vec![
                Keybinding::new("?", "help", "Show help"),
                Keybinding::new("q", "quit", "Quit application"),
                Keybinding::new("hjkl/arrows", "move", "Move between tasks and quadrants"),
                Keybinding::new("Tab", "quadrant", "Cycle quadrants"),
                Keybinding::new("Space", "pick up", "Pick up the selected task"),
                Keybinding::new("e/Enter", "edit", "Edit the selected task"),
                Keybinding::new("f", "filter", "Filter by urgency and importance"),
                Keybinding::new("/", "search", "Search titles and reasoning"),
                Keybinding::new("c", "clear", "Clear all filters"),
                Keybinding::new("i", "input", "Back to the brain dump"),
                Keybinding::new("n", "new", "Start fresh"),
            ],
        )
    }
}

/// While a task is picked up with the keyboard.
pub struct CarryModeProvider;

impl KeybindingProvider for CarryModeProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Moving Task",
            vec![
                Keybinding::new("hjkl/arrows", "aim", "Choose where to drop"),
                Keybinding::new("Tab", "quadrant", "Cycle quadrants"),
                Keybinding::new("Space", "drop", "Drop before the selected task"),
                Keybinding::new("Enter", "drop at end", "Drop at the end of the quadrant"),
                Keybinding::new("Esc", "cancel", "Put the task back"),
            ],
        )
    }
}
