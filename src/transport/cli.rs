//! CLI transport for one-shot analysis from the terminal

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::analysis::{
    format_score, AnalysisMode, AnalysisOrchestrator, AnalysisResult, BreakdownEntry,
    ScoreBucket, SentimentTone, ViewState,
};
use crate::config::Config;

/// How `senti analyze` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Machine-readable form of a finished analysis
#[derive(Debug, Serialize)]
struct AnalysisReport<'a> {
    mode: AnalysisMode,
    label: &'a str,
    score: f64,
    tone: SentimentTone,
    bucket: ScoreBucket,
    #[serde(skip_serializing_if = "Option::is_none")]
    processed_text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<Vec<BreakdownEntry>>,
}

impl<'a> AnalysisReport<'a> {
    fn new(result: &'a AnalysisResult, input: &'a str) -> Self {
        let processed_text = match result {
            AnalysisResult::Sentence(r) => r.processed_text(input),
            AnalysisResult::Paragraph(_) => None,
        };
        Self {
            mode: result.mode(),
            label: result.label(),
            score: result.score(),
            tone: result.tone(),
            bucket: result.bucket(),
            processed_text,
            breakdown: result.breakdown(),
        }
    }
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Score")]
    score: i64,
    #[tabled(rename = "Detail")]
    raw: String,
}

/// Analyze `text` (or stdin when absent) and print the result
pub async fn run_analyze(
    config: &Config,
    mode: AnalysisMode,
    format: OutputFormat,
    text: Option<String>,
) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_stdin()?,
    };

    let client = config.service.client();
    let mut orchestrator = AnalysisOrchestrator::new(mode);
    orchestrator.set_text(text);
    orchestrator.analyze(&client).await?;

    match orchestrator.view() {
        ViewState::Result(result) => {
            let report = AnalysisReport::new(result, orchestrator.text());
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => print_report(&report),
            }
            Ok(())
        }
        ViewState::Error(message) => bail!("{}", message),
        ViewState::Idle | ViewState::Loading => bail!("{}", crate::api::GENERIC_FAILURE),
    }
}

fn read_stdin() -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("{}", "Reading text from stdin, end with Ctrl-D".dimmed());
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    Ok(text)
}

fn tone_colored(label: &str, tone: SentimentTone) -> ColoredString {
    match tone {
        SentimentTone::Positive => label.green().bold(),
        SentimentTone::Negative => label.red().bold(),
        SentimentTone::Neutral => label.yellow().bold(),
    }
}

fn bucket_colored(score: f64, bucket: ScoreBucket) -> ColoredString {
    let text = format_score(score);
    match bucket {
        ScoreBucket::Positive => text.as_str().green(),
        ScoreBucket::Negative => text.as_str().red(),
        ScoreBucket::Neutral => text.as_str().yellow(),
    }
}

fn print_report(report: &AnalysisReport<'_>) {
    match report.mode {
        AnalysisMode::Sentence => {
            println!("{}", "=== Analysis Result ===".bold().cyan());
            println!("Sentiment: {}", tone_colored(report.label, report.tone));
            println!("Score:     {}", bucket_colored(report.score, report.bucket));
            if let Some(processed) = report.processed_text {
                println!("\n{} {}", "Processed text:".dimmed(), processed.dimmed());
            }
        }
        AnalysisMode::Paragraph => {
            println!("{}", "=== Overall Sentiment ===".bold().cyan());
            println!(
                "Average Sentiment: {}",
                tone_colored(report.label, report.tone)
            );
            println!(
                "Average Score:     {}",
                bucket_colored(report.score, report.bucket)
            );

            if let Some(rows) = &report.breakdown {
                println!("\n{}", "Sentence Breakdown".bold());
                let rows: Vec<BreakdownRow> = rows
                    .iter()
                    .map(|row| BreakdownRow {
                        index: row.index,
                        label: row.detail.label.clone(),
                        score: row.detail.score,
                        raw: row.detail.raw.clone(),
                    })
                    .collect();
                let mut table = Table::new(rows);
                table.with(Style::rounded());
                println!("{}", table);
            }
        }
    }
}

/// Probe the service and report whether the model is loaded
pub async fn run_health(config: &Config) -> Result<()> {
    let client = config.service.client();
    println!("{} {}", "Service:".bold(), client.base_url());

    let health = match client.health().await {
        Ok(health) => health,
        Err(e) if e.is_unavailable() => {
            bail!("Service is up but its sentiment model is unavailable: {}", e)
        }
        Err(e) => return Err(e.into()),
    };
    let model = if health.model_ready() {
        health.model_status.as_str().green()
    } else {
        health.model_status.as_str().red()
    };
    println!("{} {}", "Status:".bold(), health.status);
    println!("{} {}", "Model:".bold(), model);
    if !health.message.is_empty() {
        println!("{}", health.message.as_str().dimmed());
    }

    if !health.model_ready() {
        bail!("Model is not loaded ({})", health.model_status);
    }
    Ok(())
}

/// Print the effective configuration as TOML, optionally writing it to `path`
pub fn run_config(config: &Config, path: Option<&Path>, save: bool) -> Result<()> {
    if save {
        let path = path.context("No config file location available")?;
        config.save_to(path)?;
        println!("{} {}", "Saved".green(), path.display());
        return Ok(());
    }

    match path {
        Some(path) => println!("# {}", path.display()),
        None => println!("# no config file location available"),
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
