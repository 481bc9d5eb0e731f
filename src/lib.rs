pub mod cli;
pub mod config;
pub mod pipeline; // Extraction, templates, provenance, service facade
pub mod view; // Controller state, progress script, terminal rendering

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Binary entry point: logging, argument parsing, single-threaded runtime.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (stderr, so stdout stays clean for --json)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(config::LOG_ENV_VAR)
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cli = cli::Cli::parse();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(cli::execute(cli))
}
