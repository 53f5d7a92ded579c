//! Startup helpers for the NeuraChat terminal client.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::chat::core::config::ChatConfig;
use crate::chat::responder::classifier::ResponseClassifier;
use crate::chat::session::chat_session::ChatSession;
use crate::chat::storage::file_kv::FileKvStore;
use crate::chat::store::conversation_store::ConversationStore;
use crate::terminal::{TerminalView, run_session};

/// Default directory for the slot files.
pub const DEFAULT_DATA_DIR: &str = ".neurachat";

/// Run the interactive client on stdin/stdout.
///
/// # Returns
/// `ExitCode::SUCCESS` on `/quit` or end of input, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    init_tracing();
    tracing::info!("Starting NeuraChat v{}", env!("CARGO_PKG_VERSION"));

    match try_run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("NeuraChat failed: {e:#}");
            ExitCode::from(1)
        }
    }
}

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Data directory from `NEURACHAT_DATA_DIR`, or [`DEFAULT_DATA_DIR`].
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var("NEURACHAT_DATA_DIR")
        .map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from)
}

fn try_run() -> anyhow::Result<()> {
    let config = ChatConfig::default().with_env_overrides();
    config.validate().context("invalid configuration")?;

    let dir = data_dir();
    let storage = FileKvStore::open(&dir)
        .with_context(|| format!("cannot open data directory {}", dir.display()))?;
    tracing::info!("Data directory: {}", dir.display());

    let store = ConversationStore::open(storage, config.clone());
    let view = TerminalView::new(std::io::stdin().lock(), std::io::stdout(), &config);
    let mut session = ChatSession::new(store, ResponseClassifier::new(), view);

    let rt = tokio::runtime::Runtime::new().context("failed to create runtime")?;
    rt.block_on(run_session(&mut session))
        .context("terminal input failed")?;
    Ok(())
}
