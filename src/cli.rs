//! Terminal front-end: parses arguments and drives a `SummaryController`.

use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::SummarizerConfig;
use crate::pipeline::samples::{sample_case, SAMPLE_CASES};
use crate::pipeline::service::SummaryService;
use crate::view::controller::{SummaryController, ViewError, ViewState};
use crate::view::render::{
    render_architecture, render_samples, render_status, render_view, DISCLAIMER,
};

#[derive(Parser, Debug)]
#[command(name = "dualsum", version)]
#[command(about = "Patient-friendly and clinician-focused summaries of clinical text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize clinical text (argument, bundled sample, or stdin)
    Summarize {
        /// Text to summarize; read from stdin when omitted
        text: Option<String>,
        /// Use bundled sample case N instead of TEXT
        #[arg(long, conflicts_with = "text")]
        sample: Option<usize>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Highlight one citation (e.g. prov_3) in the submitted text
        #[arg(long)]
        select: Option<String>,
        /// Skip the simulated delays
        #[arg(long)]
        no_delay: bool,
        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },
    /// List the bundled sample notes
    Samples,
    /// Show the architecture diagram
    Architecture,
    /// Show the safety disclaimer
    Disclaimer,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("No sample case {0}; choose 1-{max}", max = SAMPLE_CASES.len())]
    UnknownSample(usize),

    #[error("Failed to read stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("Summarization failed; see log output for details")]
    NoResult,
}

/// Text to submit: explicit argument, bundled sample, or all of stdin.
pub fn resolve_input(text: Option<String>, sample: Option<usize>) -> Result<String, CliError> {
    if let Some(number) = sample {
        return sample_case(number)
            .map(|case| case.text.to_string())
            .ok_or(CliError::UnknownSample(number));
    }
    match text {
        Some(text) => Ok(text),
        None => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}

/// Submit `input` through a fresh controller and return the final view state.
///
/// `select` toggles one citation after the result arrives; an unknown id is
/// logged and ignored. A request that produced no result is `NoResult`.
pub async fn summarize_input(
    service: SummaryService,
    config: &SummarizerConfig,
    input: String,
    select: Option<&str>,
    on_status: impl FnMut(&ViewState),
) -> Result<ViewState, CliError> {
    let mut controller = SummaryController::new(service, config);
    controller.set_input(input);
    controller.submit(on_status).await?;

    let result = controller.state().summary.as_ref().ok_or(CliError::NoResult)?;
    if let Some(id) = select {
        if result.find_provenance(id).is_some() {
            controller.select_provenance(id);
        } else {
            tracing::warn!(id, "Selected citation not found");
        }
    }
    Ok(controller.state().clone())
}

pub async fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Summarize {
            text,
            sample,
            json,
            select,
            no_delay,
            no_color,
        } => {
            let color = !no_color && !json && std::io::stdout().is_terminal();
            let config = if no_delay {
                SummarizerConfig::without_delays()
            } else {
                SummarizerConfig::from_env()?
            };

            let input = resolve_input(text, sample)?;
            let service = SummaryService::with_templates(&config);
            let state = summarize_input(service, &config, input, select.as_deref(), |state| {
                let line = render_status(state, color);
                if !json && !line.is_empty() {
                    eprintln!("{line}");
                }
            })
            .await?;

            match state.summary.as_ref() {
                Some(result) if json => println!("{}", serde_json::to_string_pretty(result)?),
                _ => print!("{}", render_view(&state, color)),
            }
        }
        Commands::Samples => print!("{}", render_samples()),
        Commands::Architecture => {
            let color = std::io::stdout().is_terminal();
            print!("{}", render_architecture(false, color));
        }
        Commands::Disclaimer => println!("{DISCLAIMER}"),
    }
    Ok(())
}
