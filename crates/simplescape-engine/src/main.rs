//! Session binary for the `SimpleScape` simulation.
//!
//! This is the main entry point that wires a game session to its save
//! storage and to the terminal. Commands arrive one per line on stdin
//! (see [`driver`]); every log line the game produces is written to
//! stdout as it happens. Diagnostics go to stderr through `tracing`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `simplescape-config.yaml` (or the path in
//!    `SIMPLESCAPE_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Open the configured save storage
//! 4. Open the session, restoring the saved game if there is one
//! 5. Print the opening log and start streaming new lines
//! 6. Read commands until `quit` or end of input

mod driver;
mod error;
mod store;

use std::path::PathBuf;

use simplescape_core::config::{LogFormat, LoggingConfig};
use simplescape_core::{Session, SessionHandle, SimplescapeConfig};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::driver::Input;
use crate::error::EngineError;
use crate::store::Store;

/// Config file read when `SIMPLESCAPE_CONFIG` is not set.
const DEFAULT_CONFIG_PATH: &str = "simplescape-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if startup fails or stdin/stdout break.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let config_path = std::env::var("SIMPLESCAPE_CONFIG")
        .map_or_else(|_unset| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = SimplescapeConfig::load_or_default(&config_path)?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!(
        config = %config_path.display(),
        backend = ?config.storage.backend,
        seed = config.session.seed,
        "simplescape-engine starting"
    );

    // 3. Open save storage.
    let store = Store::open(&config.storage).await?;

    // 4. Open the session.
    let session = Session::open(&config, store).await;
    let mut stdout = tokio::io::stdout();
    for line in &session.state().log {
        stdout.write_all(format!("{line}\n").as_bytes()).await?;
    }
    stdout.flush().await?;

    // 5. Stream log lines.
    let lines = session.subscribe();
    let (handle, task) = session.spawn();
    let printer = tokio::spawn(print_lines(lines));

    // 6. Drive the session from stdin.
    drive(&handle).await?;

    drop(handle);
    let final_state = task.await.map_err(|e| EngineError::Task {
        message: format!("session task failed: {e}"),
    })?;
    printer.await.map_err(|e| EngineError::Task {
        message: format!("log printer failed: {e}"),
    })??;

    info!(
        activity = ?final_state.activity,
        log_lines = final_state.log.len(),
        "simplescape-engine stopped"
    );
    Ok(())
}

/// Install the global tracing subscriber on stderr.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Read stdin line by line until `quit` or end of input.
async fn drive(handle: &SessionHandle) -> Result<(), EngineError> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = input.next_line().await? {
        let parsed = match driver::parse_line(&line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(err) => {
                warn!(error = %err, "Unrecognized input");
                continue;
            }
        };

        match parsed {
            Input::Command(command) => handle.send(command).await?,
            Input::Save => handle.save().await?,
            Input::Load => handle.load().await?,
            Input::State => {
                let state = handle.state().await?;
                let json = serde_json::to_string(&state)?;
                stdout.write_all(format!("{json}\n").as_bytes()).await?;
                stdout.flush().await?;
            }
            Input::Quit => break,
        }
    }

    info!("Input closed");
    Ok(())
}

/// Write each broadcast log line to stdout until the session closes.
async fn print_lines(mut lines: broadcast::Receiver<String>) -> Result<(), EngineError> {
    let mut stdout = tokio::io::stdout();
    loop {
        match lines.recv().await {
            Ok(line) => {
                stdout.write_all(format!("{line}\n").as_bytes()).await?;
                stdout.flush().await?;
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "Log output fell behind, lines dropped");
            }
            Err(RecvError::Closed) => return Ok(()),
        }
    }
}
