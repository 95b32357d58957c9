use super::{
    board_mode::{BoardModeProvider, CarryModeProvider},
    dialog_modes::{EditDialogProvider, FilterDialogProvider, SearchModeProvider},
    input_mode::InputModeProvider,
    KeybindingProvider,
};
use crate::app::{App, AppMode};

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_provider(app: &App) -> Box<dyn KeybindingProvider> {
        Self::get_provider_for_mode(&app.mode, app)
    }

    fn get_provider_for_mode(mode: &AppMode, app: &App) -> Box<dyn KeybindingProvider> {
        match mode {
            AppMode::Input => Box::new(InputModeProvider {
                has_plan: app.store.has_plan(),
                loading: app.is_loading(),
            }),
            AppMode::Board if app.carrying.is_some() => Box::new(CarryModeProvider),
            AppMode::Board => Box::new(BoardModeProvider),
            AppMode::EditTask => Box::new(EditDialogProvider),
            AppMode::Filter => Box::new(FilterDialogProvider),
            AppMode::Search => Box::new(SearchModeProvider),
            AppMode::Help(previous) => Self::get_provider_for_mode(previous, app),
        }
    }
}
