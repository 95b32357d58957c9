pub mod analysis;
pub mod app;
pub mod board;
pub mod components;
pub mod dialog;
pub mod drag;
pub mod edit_dialog;
pub mod events;
pub mod filter_dialog;
pub mod handlers;
pub mod keybindings;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode};
