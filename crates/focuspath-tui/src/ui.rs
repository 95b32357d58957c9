use crate::app::{App, AppMode};
use crate::components::{
    centered_rect, render_input_popup, render_popup_with_block, render_task_card, score_bar,
    QuadrantPanel, TaskCardConfig, CARD_HEIGHT,
};
use crate::edit_dialog::EditField;
use crate::filter_dialog::FilterField;
use crate::keybindings::KeybindingRegistry;
use crate::theme::*;
use focuspath_domain::{BoardView, DropTarget, Plan, Quadrant, QuadrantView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Terminal coordinates are `u16`; anything past that pins to the edge.
fn cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

pub fn render(app: &mut App, frame: &mut Frame) {
    app.layout.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[0]);

    render_input_panel(app, frame, main[0]);

    if app.store.has_plan() {
        render_board(app, frame, main[1]);
    } else {
        render_empty_state(app, frame, main[1]);
    }

    render_footer(app, frame, chunks[1]);

    if let Some(banner) = &app.banner {
        let area = Rect {
            x: chunks[0].x + 1,
            y: chunks[0].bottom().saturating_sub(3),
            width: chunks[0].width.saturating_sub(2),
            height: 3.min(chunks[0].height),
        };
        banner.render(frame, area);
    }

    match &app.mode {
        AppMode::EditTask => render_edit_dialog(app, frame),
        AppMode::Filter => render_filter_dialog(app, frame),
        AppMode::Help(_) => render_help_popup(app, frame),
        _ => {}
    }
}

fn spinner_frame(app: &App) -> &'static str {
    let millis = app
        .analysis
        .as_ref()
        .map(|pending| pending.elapsed().as_millis())
        .unwrap_or(0);
    SPINNER[(millis / 100) as usize % SPINNER.len()]
}

fn render_input_panel(app: &mut App, frame: &mut Frame, area: Rect) {
    app.layout.set_input_area(area);

    let is_focused = app.mode == AppMode::Input;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if is_focused {
            focused_border()
        } else {
            unfocused_border()
        })
        .title(if is_focused {
            "Brain Dump (typing)"
        } else {
            "Brain Dump"
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    let text_area = chunks[0];

    let input = app.store.input();
    let (line, col) = input.cursor_line_col();
    let scroll = cell(line).saturating_sub(text_area.height.saturating_sub(1));

    let content = if input.is_empty() {
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Dump everything on your mind, one task per line.",
                hint_text(),
            )),
            Line::from(Span::styled(
                "Press Ctrl+S and the AI sorts it into the matrix.",
                hint_text(),
            )),
        ])
        .wrap(Wrap { trim: true })
    } else {
        Paragraph::new(input.as_str())
            .style(normal_text())
            .scroll((scroll, 0))
    };
    frame.render_widget(content, text_area);

    let status = if let Some(pending) = &app.analysis {
        let label = if pending.is_cancelling() {
            "Cancelling...".to_string()
        } else {
            format!(
                "{} Analyzing... {}s  (Esc to cancel)",
                spinner_frame(app),
                pending.elapsed().as_secs()
            )
        };
        Line::from(Span::styled(label, bold_highlight()))
    } else {
        Line::from(Span::styled(
            format!("{} lines", input.line_count()),
            label_text(),
        ))
    };
    frame.render_widget(Paragraph::new(status), chunks[1]);

    if is_focused && !app.is_loading() && text_area.height > 0 {
        let x = text_area
            .x
            .saturating_add(cell(col))
            .min(text_area.right().saturating_sub(1));
        let y = text_area.y.saturating_add(cell(line).saturating_sub(scroll));
        frame.set_cursor_position((x, y));
    }
}

fn render_empty_state(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(unfocused_border())
        .title("Priority Matrix");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = if app.is_loading() {
        vec![
            Line::from(Span::styled(
                format!("{} Sorting your tasks...", spinner_frame(app)),
                bold_highlight(),
            )),
            Line::from(""),
            Line::from(Span::styled("Esc to cancel", hint_text())),
        ]
    } else {
        vec![
            Line::from(Span::styled("No plan yet", bold_highlight())),
            Line::from(""),
            Line::from(Span::styled(
                "Write your brain dump on the left, then press Ctrl+S.",
                hint_text(),
            )),
        ]
    };

    let height = cell(lines.len());
    let centered = Rect {
        y: inner.y + inner.height.saturating_sub(height) / 2,
        height: height.min(inner.height),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}

fn render_summary(plan: &Plan, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Today's Critical Task: ", label_text()),
            Span::styled(plan.top_priority.clone(), bold_highlight()),
        ]),
        Line::from(Span::styled(plan.executive_summary.clone(), normal_text())),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(unfocused_border())
        .title("Summary");
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

/// Board heading, e.g. `Priority Matrix (3 of 7 shown, I>=5)`.
pub fn build_board_title(app: &App, view: &BoardView) -> String {
    let filters = app.store.filters();
    match filters.summary() {
        Some(summary) => format!(
            "Priority Matrix ({} of {} shown, {})",
            view.visible_count(),
            view.total_count(),
            summary
        ),
        None => format!("Priority Matrix ({} tasks)", view.total_count()),
    }
}

fn render_board(app: &mut App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    if let Some(plan) = app.store.plan() {
        render_summary(plan, frame, chunks[0]);
    }

    let view = app.view();
    let title_style = if app.store.filters().is_active() {
        highlight_text()
    } else {
        label_text()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            build_board_title(app, &view),
            title_style.add_modifier(Modifier::BOLD),
        )),
        chunks[1],
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    let cells: Vec<_> = rows
        .iter()
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row)
        })
        .collect();

    for quadrant in Quadrant::ALL {
        let (row, col) = quadrant.grid_position();
        render_quadrant(app, frame, cells[row][col], view.get(quadrant));
    }
}

fn render_quadrant(app: &mut App, frame: &mut Frame, area: Rect, quadrant_view: &QuadrantView) {
    let quadrant = quadrant_view.quadrant;
    app.layout.set_quadrant(quadrant, area);

    let is_focused = app.mode == AppMode::Board && app.cursor.quadrant == quadrant;
    let hover = app.drag.hover();
    let is_drop_target = match hover {
        Some(DropTarget::Quadrant(q)) => q == quadrant,
        Some(DropTarget::Card(_)) => false,
        None => app.carrying.is_some() && is_focused && quadrant_view.is_empty(),
    };

    let block = QuadrantPanel::new(quadrant, quadrant_view.len(), quadrant_view.total)
        .focused(is_focused)
        .drop_target(is_drop_target)
        .block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if quadrant_view.is_empty() {
        let hint = if quadrant_view.is_filtered_empty() {
            "All tasks here are hidden by filters"
        } else {
            "Drop tasks here"
        };
        let style = if is_drop_target {
            drop_target_border()
        } else {
            hint_text()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, style)).alignment(Alignment::Center),
            Rect {
                y: inner.y + inner.height / 2,
                height: 1.min(inner.height),
                ..inner
            },
        );
        return;
    }

    let capacity = (inner.height / CARD_HEIGHT).max(1) as usize;
    let first = if is_focused {
        app.cursor.row.saturating_sub(capacity - 1)
    } else {
        0
    };

    let carried = app.drag.dragged_task().or(app.carrying);
    let selected = app.selected_task();

    for (slot, id) in quadrant_view
        .task_ids
        .iter()
        .skip(first)
        .take(capacity)
        .enumerate()
    {
        let Some(task) = app.store.task(*id) else {
            continue;
        };
        let y = inner.y.saturating_add(cell(slot).saturating_mul(CARD_HEIGHT));
        let card_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: (CARD_HEIGHT - 1).min(inner.bottom().saturating_sub(y)),
        };
        app.layout.push_card(*id, card_area);

        let is_selected = selected == Some(*id) && is_focused;
        let is_card_target = match hover {
            Some(DropTarget::Card(target)) => target == *id,
            _ => app.carrying.is_some_and(|c| c != *id) && is_selected,
        };
        render_task_card(
            frame,
            card_area,
            TaskCardConfig {
                task,
                is_selected,
                is_focused,
                is_carried: carried == Some(*id),
                is_drop_target: is_card_target,
            },
        );
    }

    let hidden_below = quadrant_view.len().saturating_sub(first + capacity);
    if hidden_below > 0 && inner.height > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("+{} more", hidden_below), label_text()))
                .alignment(Alignment::Right),
            Rect {
                y: inner.bottom() - 1,
                height: 1,
                ..inner
            },
        );
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    if app.mode == AppMode::Search {
        let line = Line::from(vec![
            Span::styled(format!("/{}", app.search_input.as_str()), normal_text()),
            Span::styled("   Enter: keep | Esc: clear", label_text()),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
        let (_, col) = app.search_input.cursor_line_col();
        let x = area
            .x
            .saturating_add(2)
            .saturating_add(cell(col))
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
        return;
    }

    let context = KeybindingRegistry::get_provider(app).get_context();
    let help = Paragraph::new(Span::styled(context.footer_text(), label_text())).block(block);
    frame.render_widget(help, area);
}

fn render_edit_dialog(app: &App, frame: &mut Frame) {
    let Some(state) = &app.edit_dialog else {
        return;
    };
    let inner = render_popup_with_block(frame, "Edit Task", 60, 80);

    let mut constraints: Vec<Constraint> =
        EditField::ALL.iter().map(|_| Constraint::Length(4)).collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);

    for (i, field) in EditField::ALL.iter().enumerate() {
        let input = state.input(*field);
        let cursor = (state.field == *field).then(|| input.cursor_line_col().1);
        render_input_popup(frame, chunks[i], field.label(), input.as_str(), cursor);
    }

    if let Some(hint) = chunks.last() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Tab: next field | Enter: save | Esc: cancel",
                label_text(),
            )),
            *hint,
        );
    }
}

fn threshold_line(label: &str, value: u8, focused: bool) -> Line<'static> {
    let (filled, empty) = score_bar(value, 10);
    Line::from(vec![
        Span::styled(format!("{:<16}", label), label_text()),
        Span::styled("◀ ", hint_text()),
        Span::styled(format!("{:>2}", value), bold_highlight()),
        Span::styled(" ▶  ", hint_text()),
        Span::styled(filled, highlight_text()),
        Span::styled(empty, Style::default().fg(EMPTY_BAR)),
    ])
    .style(selected_item(focused))
}

fn render_filter_dialog(app: &App, frame: &mut Frame) {
    let Some(state) = &app.filter_dialog else {
        return;
    };
    let criteria = app.store.filters();
    let view = app.view();
    let inner = render_popup_with_block(frame, "Filter Tasks", 50, 50);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(threshold_line(
            "Min urgency",
            criteria.min_urgency,
            state.field == FilterField::MinUrgency,
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(threshold_line(
            "Min importance",
            criteria.min_importance,
            state.field == FilterField::MinImportance,
        )),
        chunks[1],
    );

    let search_cursor =
        (state.field == FilterField::Search).then(|| state.search.cursor_line_col().1);
    render_input_popup(
        frame,
        chunks[3],
        "Search title or rationale",
        state.search.as_str(),
        search_cursor,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(
                "Showing {} of {} tasks",
                view.visible_count(),
                view.total_count()
            ),
            normal_text(),
        )),
        chunks[4],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "←/→: adjust | r: reset | Tab: next | Enter: close",
            label_text(),
        )),
        chunks[5],
    );
}

fn render_help_popup(app: &App, frame: &mut Frame) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Help - Keybindings for Current Context")
        .borders(Borders::ALL)
        .border_style(focused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let context = KeybindingRegistry::get_provider(app).get_context();

    let mut lines = vec![
        Line::from(Span::styled(
            context.name.clone(),
            Style::default()
                .fg(FOCUSED_BORDER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for binding in &context.bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", binding.key), highlight_text()),
            Span::styled(binding.description.clone(), normal_text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ESC or ? to close help",
        hint_text(),
    )));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0)])
        .split(inner);
    frame.render_widget(Paragraph::new(lines), chunks[0]);
}
