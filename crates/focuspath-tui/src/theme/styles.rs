use super::colors::*;
use focuspath_domain::Quadrant;
use ratatui::style::{Color, Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn drop_target_border() -> Style {
    Style::default()
        .fg(DROP_TARGET)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn hint_text() -> Style {
    Style::default()
        .fg(LABEL_TEXT)
        .add_modifier(Modifier::ITALIC)
}

pub fn quadrant_color(quadrant: Quadrant) -> Color {
    match quadrant {
        Quadrant::DoFirst => DO_FIRST,
        Quadrant::Schedule => SCHEDULE,
        Quadrant::Delegate => DELEGATE,
        Quadrant::Eliminate => ELIMINATE,
    }
}

pub fn quadrant_title(quadrant: Quadrant) -> Style {
    Style::default()
        .fg(quadrant_color(quadrant))
        .add_modifier(Modifier::BOLD)
}

/// Card being carried by mouse or keyboard.
pub fn carried_card() -> Style {
    Style::default()
        .fg(LABEL_TEXT)
        .add_modifier(Modifier::ITALIC)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
