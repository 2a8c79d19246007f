//! Binary entry point for `homework-bot`.
//!
//! This module provides the command-line interface for homework-bot with options
//! for configuration file paths and logging verbosity. It checks the required
//! credentials before starting the poll loop.

use clap::Parser;
use homework_bot::base::{config::Config, logging::LineFormat, types::Void};
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Homework-bot – Practicum review status notifications in Telegram.
///
/// Credentials come from the environment (`PRACTICUM_TOKEN`, `TELEGRAM_TOKEN`,
/// `TELEGRAM_CHAT_ID`), a `.env` file, or a TOML config file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the bot will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Main entry point for the homework-bot binary.
///
/// Loads configuration, sets up logging based on verbosity, validates the
/// credentials, and starts the bot.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.

    let stdout = tracing_subscriber::fmt::layer().event_format(LineFormat).with_writer(std::io::stdout);

    // Prepare the otlp layer, if a collector is configured.

    let otel = match config.otlp_endpoint.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        Some(endpoint) => {
            let exporter = opentelemetry_otlp::SpanExporter::builder()
                .with_http()
                .with_protocol(Protocol::HttpBinary)
                .with_endpoint(endpoint)
                .build()?;
            let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_batch_exporter(exporter).build();
            let tracer = provider.tracer("homework-bot");
            opentelemetry::global::set_tracer_provider(provider);

            Some(tracing_opentelemetry::layer().with_tracer(tracer))
        }
        None => None,
    };

    tracing_subscriber::registry().with(otel).with(level_filter).with(stdout).init();

    if !config.check_tokens() {
        error!("Missing required environment variables: {}", config.missing_tokens().join(", "));
        std::process::exit(1);
    }

    homework_bot::start(config).await
}
