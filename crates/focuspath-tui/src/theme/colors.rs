use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;
pub const DROP_TARGET: Color = Color::Yellow;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const DO_FIRST: Color = Color::Red;
pub const SCHEDULE: Color = Color::Blue;
pub const DELEGATE: Color = Color::Yellow;
pub const ELIMINATE: Color = Color::Gray;

pub const URGENCY_BAR: Color = Color::LightRed;
pub const IMPORTANCE_BAR: Color = Color::LightBlue;
pub const EMPTY_BAR: Color = Color::DarkGray;

pub const POPUP_BG: Color = Color::Black;
pub const ERROR_COLOR: Color = Color::Red;
pub const INFO_COLOR: Color = Color::Cyan;
pub const SUCCESS_COLOR: Color = Color::Green;
