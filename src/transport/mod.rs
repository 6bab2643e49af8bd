//! Transport layer for one-shot terminal commands

pub mod cli;

pub use cli::{run_analyze, run_config, run_health, OutputFormat};
