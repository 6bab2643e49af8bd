//! Header Widget
//!
//! Form title and the service the form talks to.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

pub const FORM_TITLE: &str = "Transliterated Marathi Sentiment Analysis";

pub struct Header<'a> {
    service_url: &'a str,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(service_url: &'a str, theme: &'a Theme) -> Self {
        Self { service_url, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let mut lines = vec![Line::from(Span::styled(
            FORM_TITLE,
            Style::default()
                .fg(self.theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ))];
        if area.height > 1 {
            lines.push(Line::from(Span::styled(
                self.service_url,
                Style::default().fg(self.theme.text_muted),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_header_renders_title_and_url() {
        let backend = TestBackend::new(60, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| {
                let header = Header::new("http://127.0.0.1:8000", &theme);
                f.render_widget(header, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..60)
                .map(|x| buffer.cell((x, y)).unwrap().symbol().to_string())
                .collect()
        };

        assert!(row(0).contains("Sentiment Analysis"));
        assert!(row(1).contains("127.0.0.1:8000"));
    }
}
