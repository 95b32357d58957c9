use crossterm::event::KeyCode;
use focuspath_core::TextBuffer;

/// Single-line editing shared by the dialogs. Enter confirms and Esc cancels.
pub fn handle_dialog_input(
    input: &mut TextBuffer,
    key_code: KeyCode,
    allow_empty: bool,
) -> DialogAction {
    match key_code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter => {
            if allow_empty || !input.is_empty() {
                DialogAction::Confirm
            } else {
                DialogAction::None
            }
        }
        KeyCode::Char(c) => {
            input.insert_char(c);
            DialogAction::Changed
        }
        KeyCode::Backspace => {
            input.backspace();
            DialogAction::Changed
        }
        KeyCode::Delete => {
            input.delete();
            DialogAction::Changed
        }
        KeyCode::Left => {
            input.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            input.move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            input.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            input.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    /// The text was edited.
    Changed,
    Cancel,
    Confirm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_confirm() {
        let mut input = TextBuffer::new();
        assert_eq!(
            handle_dialog_input(&mut input, KeyCode::Enter, false),
            DialogAction::None
        );
        for c in "milk".chars() {
            assert_eq!(
                handle_dialog_input(&mut input, KeyCode::Char(c), false),
                DialogAction::Changed
            );
        }
        handle_dialog_input(&mut input, KeyCode::Backspace, false);
        assert_eq!(input.as_str(), "mil");
        assert_eq!(
            handle_dialog_input(&mut input, KeyCode::Enter, false),
            DialogAction::Confirm
        );
        assert_eq!(
            handle_dialog_input(&mut input, KeyCode::Esc, false),
            DialogAction::Cancel
        );
    }
}
