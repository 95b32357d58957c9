use crate::theme::{
    drop_target_border, focused_border, label_text, quadrant_color, quadrant_title,
};
use focuspath_domain::Quadrant;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Frame around one cell of the priority matrix.
pub struct QuadrantPanel {
    pub quadrant: Quadrant,
    pub visible: usize,
    pub total: usize,
    pub is_focused: bool,
    pub is_drop_target: bool,
}

impl QuadrantPanel {
    pub fn new(quadrant: Quadrant, visible: usize, total: usize) -> Self {
        Self {
            quadrant,
            visible,
            total,
            is_focused: false,
            is_drop_target: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn drop_target(mut self, drop_target: bool) -> Self {
        self.is_drop_target = drop_target;
        self
    }

    /// Drop highlight wins over focus; otherwise the quadrant's accent.
    pub fn border_style(&self) -> Style {
        if self.is_drop_target {
            drop_target_border()
        } else if self.is_focused {
            focused_border()
        } else {
            Style::default().fg(quadrant_color(self.quadrant))
        }
    }

    /// `"3"` when nothing is hidden, `"1/3"` while filters hide tasks.
    pub fn count_label(&self) -> String {
        if self.visible == self.total {
            self.total.to_string()
        } else {
            format!("{}/{}", self.visible, self.total)
        }
    }

    pub fn title_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!(" {} ", self.quadrant.title()),
                quadrant_title(self.quadrant),
            ),
            Span::styled(
                format!("{} ({}) ", self.quadrant.subtitle(), self.count_label()),
                label_text(),
            ),
        ])
    }

    pub fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(self.title_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label_shows_hidden_tasks() {
        assert_eq!(QuadrantPanel::new(Quadrant::DoFirst, 3, 3).count_label(), "3");
        assert_eq!(QuadrantPanel::new(Quadrant::DoFirst, 1, 3).count_label(), "1/3");
        assert_eq!(QuadrantPanel::new(Quadrant::Eliminate, 0, 0).count_label(), "0");
    }

    #[test]
    fn test_border_prefers_drop_target() {
        let panel = QuadrantPanel::new(Quadrant::Schedule, 1, 1)
            .focused(true)
            .drop_target(true);
        assert_eq!(panel.border_style(), drop_target_border());

        let panel = QuadrantPanel::new(Quadrant::Schedule, 1, 1).focused(true);
        assert_eq!(panel.border_style(), focused_border());

        let panel = QuadrantPanel::new(Quadrant::Delegate, 1, 1);
        assert_eq!(
            panel.border_style(),
            Style::default().fg(quadrant_color(Quadrant::Delegate))
        );
    }

    #[test]
    fn test_title_names_quadrant_and_count() {
        let panel = QuadrantPanel::new(Quadrant::DoFirst, 2, 5);
        let text: String = panel
            .title_line()
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(text.contains(Quadrant::DoFirst.title()));
        assert!(text.contains(Quadrant::DoFirst.subtitle()));
        assert!(text.contains("(2/5)"));
    }
}
