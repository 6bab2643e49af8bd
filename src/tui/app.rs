//! TUI Application state and main loop
//!
//! Key handling lives on [`AppState`] so it can be driven without a terminal.
//! Requests run on spawned tasks and report back over a channel; the loop
//! hands each outcome to the orchestrator, which drops stale ones.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;

use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyEvent, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Event, EventHandler};
use super::theme::Theme;
use super::widgets::{
    FlashBar, FlashBarState, Header, InputWidget, ModeTabs, ResultPanel, StatusBar, MAX_FRAME,
};
use crate::analysis::{
    AnalysisMode, AnalysisOrchestrator, AnalysisResult, AnalysisTicket, PendingAnalysis,
    ViewState,
};
use crate::api::{ApiError, SentimentApi};

/// What the caller should do after a key press
#[derive(Debug)]
pub enum Action {
    Nothing,
    Redraw,
    /// A validated submission to send to the service
    Submit(PendingAnalysis),
}

/// Outcome of a spawned request
pub type Completion = (AnalysisTicket, Result<AnalysisResult, ApiError>);

/// Application state for the analysis form
#[derive(Debug)]
pub struct AppState {
    pub orchestrator: AnalysisOrchestrator,
    /// Input cursor as a byte offset
    pub cursor: usize,
    pub theme: Theme,
    pub service_url: String,
    pub should_quit: bool,
    /// Frame of the working pulse
    pub animation_frame: u8,
    pub result_scroll: u16,
}

impl AppState {
    pub fn new(mode: AnalysisMode, service_url: impl Into<String>, theme: Theme) -> Self {
        Self {
            orchestrator: AnalysisOrchestrator::new(mode),
            cursor: 0,
            theme,
            service_url: service_url.into(),
            should_quit: false,
            animation_frame: 0,
            result_scroll: 0,
        }
    }

    pub fn text(&self) -> &str {
        self.orchestrator.text()
    }

    pub fn handle_event(&mut self, event: Event) -> Action {
        if event.is_quit() {
            self.should_quit = true;
            return Action::Nothing;
        }

        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => {
                self.insert_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
                Action::Redraw
            }
            Event::Resize(_, _) => Action::Redraw,
            Event::Tick => {
                if self.orchestrator.is_loading() {
                    self.animation_frame = (self.animation_frame + 1) % (MAX_FRAME + 1);
                    Action::Redraw
                } else {
                    Action::Nothing
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let newline_mod = key
            .modifiers
            .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.switch_mode(self.orchestrator.mode().toggle());
            }
            KeyCode::Enter if newline_mod => self.insert_char('\n'),
            KeyCode::Char('j') if ctrl => self.insert_char('\n'),
            KeyCode::Enter => return self.submit(),
            KeyCode::Char('u') if ctrl => self.clear_input(),
            KeyCode::Char(c) if !ctrl => self.insert_char(c),
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => self.delete_char_at(),
            KeyCode::Left => self.cursor = prev_boundary(self.text(), self.cursor),
            KeyCode::Right => self.cursor = next_boundary(self.text(), self.cursor),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text().len(),
            KeyCode::PageUp => self.result_scroll = self.result_scroll.saturating_sub(5),
            KeyCode::PageDown => self.result_scroll = self.result_scroll.saturating_add(5),
            _ => return Action::Nothing,
        }
        Action::Redraw
    }

    /// Start an analysis unless one is already running
    pub fn submit(&mut self) -> Action {
        if self.orchestrator.is_loading() {
            return Action::Nothing;
        }
        self.result_scroll = 0;
        self.animation_frame = 0;
        match self.orchestrator.begin() {
            Ok(pending) => Action::Submit(pending),
            Err(_) => Action::Redraw,
        }
    }

    pub fn switch_mode(&mut self, mode: AnalysisMode) {
        self.orchestrator.set_mode(mode);
        self.result_scroll = 0;
    }

    /// Hand a finished request to the orchestrator
    pub fn apply_completion(&mut self, (ticket, outcome): Completion) -> bool {
        self.orchestrator.complete(ticket, outcome)
    }

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        self.orchestrator.text_mut().insert(cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        let cursor = self.cursor;
        self.orchestrator.text_mut().insert_str(cursor, s);
        self.cursor += s.len();
    }

    pub fn delete_char_before(&mut self) {
        if self.cursor > 0 {
            let prev = prev_boundary(self.text(), self.cursor);
            self.orchestrator.text_mut().remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete_char_at(&mut self) {
        if self.cursor < self.text().len() {
            let cursor = self.cursor;
            self.orchestrator.text_mut().remove(cursor);
        }
    }

    pub fn clear_input(&mut self) {
        self.orchestrator.set_text(String::new());
        self.cursor = 0;
    }
}

fn prev_boundary(s: &str, cursor: usize) -> usize {
    s[..cursor]
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(s: &str, cursor: usize) -> usize {
    s[cursor..]
        .chars()
        .next()
        .map(|c| cursor + c.len_utf8())
        .unwrap_or(cursor)
}

/// Draw the whole form
pub fn draw(frame: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let orch = &state.orchestrator;
    let mode = orch.mode();
    let input_height = match mode {
        AnalysisMode::Sentence => 5,
        AnalysisMode::Paragraph => 8,
    };

    let [header, tabs, _, input, flash, result, status] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(input_height),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(Header::new(&state.service_url, theme), header);
    frame.render_widget(ModeTabs::new(mode, theme), tabs);

    let placeholder = mode.placeholder();
    let title = if orch.is_loading() {
        "Analyzing..."
    } else {
        mode.submit_label()
    };
    frame.render_widget(
        InputWidget::new(orch.text(), state.cursor, theme)
            .focused(true)
            .placeholder(&placeholder)
            .title(title),
        input,
    );

    let notice = orch.notice().map(|n| n.to_string());
    let bar = match (orch.view(), notice.as_deref()) {
        (ViewState::Loading, _) => FlashBar::new(theme)
            .kind(FlashBarState::Working)
            .animation_frame(state.animation_frame),
        (_, Some(notice)) => FlashBar::new(theme)
            .kind(FlashBarState::Notice)
            .message(notice),
        (ViewState::Error(message), None) => FlashBar::new(theme)
            .kind(FlashBarState::Error)
            .message(message),
        _ => FlashBar::new(theme),
    };
    frame.render_widget(bar, flash);

    if let Some(analysis) = orch.view().result() {
        frame.render_widget(
            ResultPanel::new(analysis, orch.text(), theme).scroll(state.result_scroll),
            result,
        );
    }

    frame.render_widget(
        StatusBar::new(mode, theme).loading(orch.is_loading()),
        status,
    );
}

/// Main TUI Application
pub struct TuiApp<B: Backend> {
    terminal: Terminal<B>,
    pub state: AppState,
    events: EventHandler,
    api: Arc<dyn SentimentApi>,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl<B: Backend> TuiApp<B> {
    pub fn new(terminal: Terminal<B>, state: AppState, api: Arc<dyn SentimentApi>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            terminal,
            state,
            events: EventHandler::default(),
            api,
            tx,
            rx,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn render(&mut self) -> io::Result<()> {
        let state = &self.state;
        self.terminal.draw(|frame| draw(frame, state))?;
        Ok(())
    }

    /// Send a submission on a background task
    pub fn spawn_request(&self, pending: PendingAnalysis) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let PendingAnalysis { ticket, request } = pending;
            let outcome = api.analyze(&request).await;
            if tx.send((ticket, outcome)).is_err() {
                tracing::debug!("UI closed before the response arrived");
            }
        });
    }

    /// Apply every finished request; returns true if anything changed
    pub fn drain_completions(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.rx.try_recv() {
            changed |= self.state.apply_completion(completion);
        }
        changed
    }

    /// Run the main event loop until the user quits
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.render()?;

        while !self.state.should_quit {
            let mut needs_redraw = self.drain_completions();

            match self.state.handle_event(self.events.poll()?) {
                Action::Submit(pending) => {
                    self.spawn_request(pending);
                    needs_redraw = true;
                }
                Action::Redraw => needs_redraw = true,
                Action::Nothing => {}
            }

            if needs_redraw {
                self.render()?;
            }
        }

        Ok(())
    }
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Take over the terminal and run the form
    pub async fn run_in_terminal(state: AppState, api: Arc<dyn SentimentApi>) -> anyhow::Result<()> {
        install_panic_hook();
        let terminal = setup_terminal()?;
        let mut app = TuiApp::new(terminal, state, api);
        let result = app.run().await;
        restore_terminal(&mut app.terminal)?;
        result
    }
}

/// Restore the terminal before the default panic output is printed
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;
    Ok(())
}
