//! TUI Widgets - Reusable UI components

mod flash_bar;
mod header;
mod input;
mod mode_tabs;
mod result_panel;
mod status_bar;

pub use flash_bar::{FlashBar, FlashBarState, MAX_FRAME};
pub use header::{Header, FORM_TITLE};
pub use input::InputWidget;
pub use mode_tabs::ModeTabs;
pub use result_panel::ResultPanel;
pub use status_bar::StatusBar;
