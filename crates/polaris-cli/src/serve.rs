//! Serve command implementation for Polaris CLI.
//!
//! Starts the pipeline validation HTTP server.

use polaris_server::ServerConfig;

use crate::colors;

/// Start the validation server and block until Ctrl+C.
pub async fn execute(config: ServerConfig) -> anyhow::Result<()> {
    let app = polaris_server::create_router(&config)?;

    println!(
        "\n{}Polaris Server{} - Pipeline Validation",
        colors::BOLD,
        colors::RESET
    );
    println!("{}", "─".repeat(50));

    println!(
        "{}  ◆ Endpoint:{} http://{}:{}/pipelines/parse",
        colors::CYAN,
        colors::RESET,
        config.host,
        config.port
    );
    println!(
        "{}  ◆ Origins:{} {}",
        colors::CYAN,
        colors::RESET,
        config.allowed_origins.join(", ")
    );
    println!("{}", "─".repeat(50));
    println!("{}Press Ctrl+C to stop{}", colors::GREEN, colors::RESET);
    println!();

    polaris_server::serve_app(app, &config).await?;

    Ok(())
}
