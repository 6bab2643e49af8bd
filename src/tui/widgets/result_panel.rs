//! Result Panel Widget
//!
//! Renders a finished analysis. The frame is coloured by the score bucket and
//! labels by their tone; the two are independent and are not reconciled.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::analysis::{format_score, AnalysisResult, SentimentTone};
use crate::api::{ParagraphResult, SentenceResult};
use crate::tui::theme::Theme;

pub struct ResultPanel<'a> {
    result: &'a AnalysisResult,
    /// Text the user submitted, for the "Processed text" comparison
    input: &'a str,
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> ResultPanel<'a> {
    pub fn new(result: &'a AnalysisResult, input: &'a str, theme: &'a Theme) -> Self {
        Self {
            result,
            input,
            scroll: 0,
            theme,
        }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    fn field(&self, name: &'a str, value: Span<'a>) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                format!("{}: ", name),
                Style::default().fg(self.theme.text_secondary),
            ),
            value,
        ])
    }

    fn label_span(&self, label: &'a str) -> Span<'a> {
        Span::styled(
            label,
            Style::default()
                .fg(self.theme.tone_color(SentimentTone::from_label(label)))
                .add_modifier(Modifier::BOLD),
        )
    }

    fn score_span(&self, score: f64) -> Span<'a> {
        Span::styled(
            format_score(score),
            Style::default()
                .fg(self.theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )
    }

    fn sentence_lines(&self, r: &'a SentenceResult) -> Vec<Line<'a>> {
        let mut lines = vec![
            self.field("Sentiment", self.label_span(&r.label)),
            self.field("Score", self.score_span(r.score)),
        ];
        if let Some(processed) = r.processed_text(self.input) {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(
                    "Processed text: ",
                    Style::default().fg(self.theme.text_muted),
                ),
                Span::styled(processed, Style::default().fg(self.theme.text_muted)),
            ]));
        }
        lines
    }

    fn paragraph_lines(&self, r: &'a ParagraphResult) -> Vec<Line<'a>> {
        let mut lines = vec![
            self.field("Average Sentiment", self.label_span(&r.average_label)),
            self.field("Average Score", self.score_span(r.average_score)),
        ];

        if let Some(rows) = self.result.breakdown() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Sentence Breakdown",
                Style::default()
                    .fg(self.theme.text_primary)
                    .add_modifier(Modifier::UNDERLINED),
            )));
            for row in rows {
                let marker = Style::default().fg(self.theme.bucket_color(row.detail.bucket()));
                let tone = Style::default().fg(self.theme.tone_color(row.detail.tone()));
                lines.push(Line::from(vec![
                    Span::styled("▌ ", marker),
                    Span::styled(
                        format!("Sentence {}: ", row.index),
                        Style::default().fg(self.theme.text_secondary),
                    ),
                    Span::styled(row.detail.raw, tone),
                ]));
            }
        }
        lines
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, lines) = match self.result {
            AnalysisResult::Sentence(r) => (" Analysis Result ", self.sentence_lines(r)),
            AnalysisResult::Paragraph(r) => (" Overall Sentiment ", self.paragraph_lines(r)),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.bucket_color(self.result.bucket())))
            .title(title);

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
