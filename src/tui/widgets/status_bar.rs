//! Status Bar Widget
//!
//! Key hints on the left, current mode on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::analysis::AnalysisMode;
use crate::tui::theme::Theme;

const HINTS: [(&str, &str); 4] = [
    ("Enter", "analyze"),
    ("Alt+Enter", "newline"),
    ("Tab", "mode"),
    ("Esc", "quit"),
];

pub struct StatusBar<'a> {
    mode: AnalysisMode,
    is_loading: bool,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: AnalysisMode, theme: &'a Theme) -> Self {
        Self {
            mode,
            is_loading: false,
            theme,
        }
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(area);

        let mut spans = Vec::new();
        for (key, action) in HINTS {
            spans.push(Span::styled(key, Style::default().fg(self.theme.cyan)));
            spans.push(Span::styled(
                format!(" {}  ", action),
                Style::default().fg(self.theme.text_muted),
            ));
        }
        Paragraph::new(Line::from(spans)).render(left, buf);

        let status = if self.is_loading {
            Span::styled("Analyzing...", Style::default().fg(self.theme.cyan))
        } else {
            Span::styled(
                self.mode.tab_label(),
                Style::default().fg(self.theme.purple),
            )
        };
        Paragraph::new(Line::from(status))
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_line(bar: StatusBar<'_>) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| f.render_widget(bar, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        (0..100)
            .map(|x| buffer.cell((x, 0)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn test_status_bar_shows_mode() {
        let theme = Theme::default();
        let line = render_line(StatusBar::new(AnalysisMode::Sentence, &theme));
        assert!(line.contains("Single Sentence"));
        assert!(line.contains("Tab mode"));
    }

    #[test]
    fn test_status_bar_while_loading() {
        let theme = Theme::default();
        let line = render_line(StatusBar::new(AnalysisMode::Paragraph, &theme).loading(true));
        assert!(line.contains("Analyzing..."));
    }
}
