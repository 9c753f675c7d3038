use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use reportvoice::commands::{App, AppError, Command};
use reportvoice::config::Config;
use reportvoice::storage::FileStorage;
use reportvoice::{shell, watch};
use tokio::io::BufReader;
use tokio::sync::{Mutex, mpsc};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    App(#[from] AppError),
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "reportvoice", about = "Local feedback and voting board")]
struct Cli {
    /// Directory holding this client's stored data
    #[arg(long, env = "REPORTVOICE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Interactive shell with periodic admin session rechecks (default).
    Shell,
    #[command(flatten)]
    Board(Command),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn,reportvoice=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::from_env().with_data_dir(cli.data_dir);

    let storage = FileStorage::new(&config.data_dir);
    tracing::debug!(root = %storage.root().display(), "file storage ready");
    let mut app = App::open(storage, config.admin.clone());

    match cli.command.unwrap_or(CliCommand::Shell) {
        CliCommand::Board(command) => {
            let out = app.execute(command)?;
            writeln!(std::io::stdout(), "{out}")?;
            Ok(())
        }
        CliCommand::Shell => {
            let app = Arc::new(Mutex::new(app));
            let (tx, rx) = mpsc::channel(8);
            let watcher = watch::spawn_session_watch(Arc::clone(&app), config.session_check, tx);

            let result = shell::run(app, BufReader::new(tokio::io::stdin()), &mut tokio::io::stdout(), rx).await;
            watcher.abort();
            Ok(result?)
        }
    }
}
