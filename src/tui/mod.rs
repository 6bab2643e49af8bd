//! Terminal User Interface (TUI) for the analysis form
//!
//! A single screen: mode tabs, a text area, the flash bar and the latest
//! result. Built on ratatui/crossterm.

mod app;
mod events;
mod theme;
pub mod widgets;

use std::sync::Arc;

use crate::api::SentimentApi;
use crate::config::Config;

pub use app::{draw, Action, AppState, Completion, TuiApp};
pub use events::{Event, EventHandler};
pub use theme::{Theme, ThemePreset};

/// Run the interactive form against the configured service
pub async fn run_tui(config: &Config) -> anyhow::Result<()> {
    let client = config.service.client();
    tracing::info!(
        "Starting TUI against {} ({} theme)",
        client.base_url(),
        config.ui.theme.display_name()
    );

    let state = AppState::new(
        config.ui.default_mode,
        client.base_url(),
        Theme::from_preset(config.ui.theme),
    );
    let api: Arc<dyn SentimentApi> = Arc::new(client);
    TuiApp::run_in_terminal(state, api).await
}
