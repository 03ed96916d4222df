//! armory - hero statistics boards from the command line.
//!
//! This binary is the host boundary: it plays the role of the chat-bot
//! command surface, turning free-text tokens into a status line plus a PNG
//! board, or a plain warning when no data exists.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(version, about = "Generate OW CN-server hero statistics boards")]
struct Cli {
    /// Free-text query tokens: a hero name, or rank / role / sort keywords
    tokens: Vec<String>,

    /// Config file (TOML; created with defaults when missing)
    #[arg(short, long, default_value = "armory.toml")]
    config: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "board.png")]
    out: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match commands::run(&cli.tokens, &cli.config, &cli.out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
