//! Mode Selector Widget
//!
//! Two tabs, "Single Sentence" and "Paragraph", with the active one filled.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

use crate::analysis::AnalysisMode;
use crate::tui::theme::Theme;

pub struct ModeTabs<'a> {
    active: AnalysisMode,
    theme: &'a Theme,
}

impl<'a> ModeTabs<'a> {
    pub fn new(active: AnalysisMode, theme: &'a Theme) -> Self {
        Self { active, theme }
    }
}

impl Widget for ModeTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 2 {
            return;
        }

        let modes = AnalysisMode::all();
        let cells = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .spacing(1)
            .split(area);

        for (mode, cell) in modes.iter().zip(cells.iter()) {
            let style = if *mode == self.active {
                Style::default()
                    .fg(self.theme.bg_main)
                    .bg(self.theme.purple)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(self.theme.text_secondary)
                    .bg(self.theme.bg_dark)
            };

            Paragraph::new(Span::raw(mode.tab_label()))
                .style(style)
                .alignment(Alignment::Center)
                .render(*cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_both_tabs_rendered_and_active_highlighted() {
        let backend = TestBackend::new(50, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| f.render_widget(ModeTabs::new(AnalysisMode::Sentence, &theme), f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let line: String = (0..50)
            .map(|x| buffer.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(line.contains("Single Sentence"));
        assert!(line.contains("Paragraph"));

        let first = line.find("Single").unwrap() as u16;
        assert_eq!(buffer.cell((first, 0)).unwrap().bg, theme.purple);
        let second = line.find("Paragraph").unwrap() as u16;
        assert_eq!(buffer.cell((second, 0)).unwrap().bg, theme.bg_dark);
    }
}
