use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct InputModeProvider {
    pub has_plan: bool,
    pub loading: bool,
}

impl KeybindingProvider for InputModeProvider {
    fn get_context(&self) -> KeybindingContext {
        let mut bindings = vec![];
        if self.loading {
            bindings.push(Keybinding::new("Esc", "cancel", "Cancel the running analysis"));
        } else {
            bindings.push(Keybinding::new("Ctrl+S", "analyze", "Organize the brain dump"));
        }
        bindings.push(Keybinding::new("Enter", "newline", "Start a new line"));
        if self.has_plan {
            bindings.push(Keybinding::new("Tab/Esc", "board", "Focus the matrix"));
        }
        bindings.push(Keybinding::new("Ctrl+Q", "quit", "Quit application"));

        KeybindingContext::new("Brain Dump", bindings)
    }
}
