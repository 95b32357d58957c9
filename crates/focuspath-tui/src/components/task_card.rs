use crate::theme::*;
use focuspath_domain::Task;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows taken by one card, including the spacer below it.
pub const CARD_HEIGHT: u16 = 4;

const BAR_WIDTH: u16 = 10;

pub struct TaskCardConfig<'a> {
    pub task: &'a Task,
    pub is_selected: bool,
    pub is_focused: bool,
    pub is_carried: bool,
    pub is_drop_target: bool,
}

/// Filled cells proportional to `score` out of 10.
pub fn score_bar(score: u8, width: u16) -> (String, String) {
    let filled = (u16::from(score.min(10)) * width) / 10;
    (
        "█".repeat(filled as usize),
        "░".repeat(width.saturating_sub(filled) as usize),
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn render_task_card(frame: &mut Frame, area: Rect, config: TaskCardConfig) {
    let task = config.task;
    let width = area.width as usize;

    let mut title_style = normal_text().add_modifier(Modifier::BOLD);
    let mut base_style = Style::default();
    if config.is_carried {
        title_style = carried_card();
    }
    if config.is_selected && config.is_focused {
        base_style = base_style.bg(SELECTED_BG);
        title_style = title_style.bg(SELECTED_BG);
    }

    let marker = if config.is_drop_target {
        Span::styled("▶ ", drop_target_border())
    } else if config.is_carried {
        Span::styled("⇅ ", highlight_text())
    } else {
        Span::styled("● ", quadrant_title(task.quadrant))
    };

    let (urgency_filled, urgency_empty) = score_bar(task.urgency_score, BAR_WIDTH);
    let (importance_filled, importance_empty) = score_bar(task.importance_score, BAR_WIDTH);

    let lines = vec![
        Line::from(vec![
            marker,
            Span::styled(truncate(&task.title, width.saturating_sub(2)), title_style),
        ])
        .style(base_style),
        Line::from(vec![
            Span::styled("  U ", label_text()),
            Span::styled(urgency_filled, Style::default().fg(URGENCY_BAR)),
            Span::styled(urgency_empty, Style::default().fg(EMPTY_BAR)),
            Span::styled(format!(" {:>2}", task.urgency_score), label_text()),
            Span::styled("  I ", label_text()),
            Span::styled(importance_filled, Style::default().fg(IMPORTANCE_BAR)),
            Span::styled(importance_empty, Style::default().fg(EMPTY_BAR)),
            Span::styled(format!(" {:>2}", task.importance_score), label_text()),
            Span::styled(format!("  {}", task.estimated_time), highlight_text()),
        ]),
        Line::from(Span::styled(
            format!("  {}", truncate(&task.reasoning, width.saturating_sub(2))),
            hint_text(),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
