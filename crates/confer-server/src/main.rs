//! Entry point for the confer server binary.

use anyhow::Context;
use clap::Parser;
use confer_config::resolve_dialog_binary;
use confer_dialog::DialogLauncher;
use confer_server::{Service, serve};
use confer_tools::builtin_tool_registry;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Duration;

/// Command-line options for the confer server.
#[derive(Parser)]
#[command(name = "confer-server", version)]
struct Cli {
    /// Optional path to a confer.json5 config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Default timeout in seconds for user responses
    #[arg(long)]
    timeout: Option<u64>,
    /// Path to the dialog front-end binary
    #[arg(long)]
    binary_path: Option<PathBuf>,
    /// Accepted for launcher compatibility; stdio is the only transport
    #[arg(long)]
    stdio: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();

    let cli = Cli::parse();
    if cli.stdio {
        debug!("--stdio flag accepted; stdio is the only transport");
    }

    let config = if let Some(path) = cli.config.as_ref() {
        confer_config::load_from_path(path).context("failed to load config")?
    } else {
        let cwd =
            std::env::current_dir().context("failed to resolve current working directory")?;
        confer_config::load_default(&cwd).context("failed to load config")?
    };

    let timeout_sec = cli.timeout.unwrap_or(config.timeout_sec);
    let binary = resolve_dialog_binary(
        cli.binary_path
            .as_deref()
            .or(config.dialog.binary.as_deref()),
    );
    info!(
        "confer server running on stdio (binary={}, default_timeout_sec={})",
        binary.display(),
        timeout_sec
    );

    let registry =
        builtin_tool_registry(DialogLauncher::new(binary), Duration::from_secs(timeout_sec));
    let service = Service::new(registry);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(stdin, stdout, &service)
        .await
        .context("stdio serve loop failed")?;
    info!("input closed, shutting down");
    Ok(())
}
