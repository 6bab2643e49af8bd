//! Status Message Strip Widget
//!
//! A single-line strip between the input and the results: a pulse while a
//! request is in flight, a card for errors and validation notices.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::tui::theme::Theme;

const DOT_SMALL: char = '·';
const DOT_LARGE: char = '●';

/// Working bar characters (thin to thick)
const WORKING_BAR_THIN: char = '─';
const WORKING_BAR_MEDIUM: char = '═';
const WORKING_BAR_THICK: char = '━';

/// Maximum animation frame for the working pulse
pub const MAX_FRAME: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashBarState {
    /// Single muted center dot
    #[default]
    Idle,
    /// Pulse bar while the service is working
    Working,
    /// Red card: the last request failed
    Error,
    /// Yellow card: the submission was rejected before sending
    Notice,
}

pub struct FlashBar<'a> {
    message: Option<&'a str>,
    kind: FlashBarState,
    animation_frame: u8,
    theme: &'a Theme,
}

impl<'a> FlashBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            message: None,
            kind: FlashBarState::Idle,
            animation_frame: 0,
            theme,
        }
    }

    pub fn message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }

    pub fn kind(mut self, kind: FlashBarState) -> Self {
        self.kind = kind;
        self
    }

    pub fn animation_frame(mut self, frame: u8) -> Self {
        self.animation_frame = frame;
        self
    }

    fn state_style(&self) -> Style {
        let fg = match self.kind {
            FlashBarState::Idle => self.theme.text_muted,
            FlashBarState::Working => self.theme.cyan,
            FlashBarState::Error => self.theme.red,
            FlashBarState::Notice => self.theme.yellow,
        };
        Style::default().fg(fg).bg(self.theme.bg_dark)
    }

    fn fill(&self, area: Rect, buf: &mut Buffer, style: Style) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_style(style);
            }
        }
    }
}

impl Widget for FlashBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match self.kind {
            FlashBarState::Idle => self.render_idle(area, buf),
            FlashBarState::Working => self.render_working(area, buf),
            FlashBarState::Error | FlashBarState::Notice => self.render_message_state(area, buf),
        }
    }
}

impl FlashBar<'_> {
    fn render_idle(&self, area: Rect, buf: &mut Buffer) {
        self.fill(area, buf, Style::default().bg(self.theme.bg_dark));

        let center_x = area.left() + area.width / 2;
        buf[(center_x, area.top())]
            .set_char(DOT_SMALL)
            .set_style(self.state_style());
    }

    /// Pulse expanding from the center as the frame advances
    fn render_working(&self, area: Rect, buf: &mut Buffer) {
        self.fill(area, buf, Style::default().bg(self.theme.bg_dark));

        let frame = self.animation_frame.min(MAX_FRAME);
        let width = area.width as f32;
        let center = area.left() as f32 + (width - 1.0) / 2.0;
        let t = frame as f32 / MAX_FRAME as f32;
        let radius = 1.0 + ((width * 0.5).max(1.0) - 1.0) * t;
        let pulse_strength = 0.45 + 0.55 * t;

        for x in area.left()..area.right() {
            let dist = ((x as f32) - center).abs();
            let falloff = (1.0 - (dist / radius)).clamp(0.0, 1.0);
            let strength = (0.18 + pulse_strength * falloff).clamp(0.0, 1.0);
            let ch = if falloff >= 0.66 {
                WORKING_BAR_THICK
            } else if falloff >= 0.33 {
                WORKING_BAR_MEDIUM
            } else {
                WORKING_BAR_THIN
            };
            let fg = blend_color(self.theme.bg_dark, self.theme.cyan, strength);
            buf[(x, area.top())]
                .set_char(ch)
                .set_style(Style::default().fg(fg).bg(self.theme.bg_dark));
        }
    }

    /// Bordered card with an indicator and the centered message
    fn render_message_state(&self, area: Rect, buf: &mut Buffer) {
        let message = self.message.unwrap_or_default();
        let state_style = self.state_style();
        self.fill(area, buf, state_style);

        let inner_width = area.width.saturating_sub(2) as usize;
        let indicator = format!("{} {} ", DOT_LARGE, DOT_SMALL);
        let indicator_width = indicator.chars().count();

        let mut inside = String::new();
        if indicator_width >= inner_width {
            inside.extend(indicator.chars().take(inner_width));
        } else {
            inside.push_str(&indicator);
            let available = inner_width - indicator_width;
            let message_trimmed: String = message.chars().take(available).collect();
            let message_len = message_trimmed.chars().count();
            let left_pad = available.saturating_sub(message_len) / 2;
            let right_pad = available.saturating_sub(message_len + left_pad);
            inside.push_str(&" ".repeat(left_pad));
            inside.push_str(&message_trimmed);
            inside.push_str(&" ".repeat(right_pad));
        }

        let content = format!("│{}│", inside);
        for (i, ch) in content.chars().enumerate() {
            let x = area.left() + i as u16;
            if x < area.right() {
                buf[(x, area.top())].set_char(ch).set_style(state_style);
            }
        }
    }
}

fn blend_color(base: Color, accent: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (base, accent) {
        (Color::Rgb(br, bg, bb), Color::Rgb(ar, ag, ab)) => {
            let mix = |b: u8, a: u8| (b as f32 + (a as f32 - b as f32) * t).round() as u8;
            Color::Rgb(mix(br, ar), mix(bg, ag), mix(bb, ab))
        }
        _ => accent,
    }
}
