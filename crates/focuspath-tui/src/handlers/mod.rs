pub mod board_handlers;
pub mod dialog_handlers;
pub mod filter_handlers;
pub mod input_handlers;
pub mod mouse_handlers;
