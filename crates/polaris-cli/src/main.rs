//! Polaris CLI - pipeline DAG validation service and checker.

mod check;
mod colors;
mod serve;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use polaris_server::{DEFAULT_MAX_BODY_BYTES, ServerConfig};

#[derive(Parser)]
#[command(name = "polaris")]
#[command(about = "Validate data pipeline graphs before they are scheduled")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the pipeline validation HTTP server
    Serve {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Browser origin allowed to call the API (repeatable; defaults to localhost dev origins)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,

        /// Largest accepted request body in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
        max_body_bytes: usize,
    },

    /// Check a pipeline JSON file ({"nodes": [...], "edges": [...]})
    Check {
        /// Path to the pipeline file, or "-" for stdin
        file: String,

        /// Print the API response body instead of a summary
        #[arg(long)]
        json: bool,
    },
}

/// Exit status for invalid input or unreadable files.
const EXIT_INVALID: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            allow_origins,
            max_body_bytes,
        } => {
            let mut config = ServerConfig {
                host,
                port,
                max_body_bytes,
                ..ServerConfig::default()
            };
            if !allow_origins.is_empty() {
                config.allowed_origins = allow_origins;
            }
            serve::execute(config).await.map(|()| ExitCode::SUCCESS)
        }

        Commands::Check { file, json } => check::execute(&file, json).await,
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}error:{} {}", colors::RED, colors::RESET, format_error(&err));
            ExitCode::from(EXIT_INVALID)
        }
    }
}

/// Format polaris-core errors with their recovery hints.
fn format_error(err: &anyhow::Error) -> String {
    if let Some(core_err) = err.downcast_ref::<polaris_core::Error>() {
        core_err.with_hint()
    } else {
        format!("{err:#}")
    }
}
