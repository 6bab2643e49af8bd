//! Input Widget
//!
//! Multi-line text area for the sentence or paragraph being analyzed. The
//! block title doubles as the submit action label.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::tui::theme::Theme;

pub struct InputWidget<'a> {
    content: &'a str,
    /// Cursor position as a byte offset into `content`
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
    placeholder: &'a str,
    title: &'a str,
}

impl<'a> InputWidget<'a> {
    pub fn new(content: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            content,
            cursor,
            focused: false,
            theme,
            placeholder: "",
            title: "",
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn text_style(&self) -> Style {
        Style::default().fg(self.theme.text_primary)
    }

    fn cursor_style(&self) -> Style {
        if self.focused {
            Style::default()
                .fg(self.theme.bg_main)
                .bg(self.theme.text_primary)
                .add_modifier(Modifier::SLOW_BLINK)
        } else {
            self.text_style()
        }
    }

    /// Split content into lines, drawing the cursor on the line that holds it
    fn lines(&self) -> Vec<Line<'a>> {
        let cursor = clamp_to_boundary(self.content, self.cursor);
        let mut lines = Vec::new();
        let mut offset = 0;

        for raw in self.content.split('\n') {
            let start = offset;
            let end = start + raw.len();
            offset = end + 1;

            if cursor < start || cursor > end {
                lines.push(Line::from(Span::styled(raw, self.text_style())));
                continue;
            }

            let (before, after) = raw.split_at(cursor - start);
            let cursor_char = after.chars().next();
            let rest = cursor_char.map(|c| &after[c.len_utf8()..]).unwrap_or("");
            let cursor_text = cursor_char.map(String::from).unwrap_or_else(|| " ".into());

            lines.push(Line::from(vec![
                Span::styled(before, self.text_style()),
                Span::styled(cursor_text, self.cursor_style()),
                Span::styled(rest, self.text_style()),
            ]));
        }

        lines
    }
}

fn clamp_to_boundary(s: &str, mut idx: usize) -> usize {
    idx = idx.min(s.len());
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.title));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        let text = if self.content.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(" ", self.cursor_style()));
            }
            spans.push(Span::styled(
                self.placeholder,
                Style::default().fg(self.theme.text_muted),
            ));
            vec![Line::from(spans)]
        } else {
            self.lines()
        };

        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
