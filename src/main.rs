//! todo-widget - terminal preview of the todo home-screen widget.
//!
//! Renders the shared store through both widget engines side by side. Set
//! `TODO_WIDGET_LOG` to a file path to capture diagnostics, and
//! `TODO_WIDGET_SAMPLE` to preview the built-in sample document instead of
//! the on-disk store.

use std::{fs::File, sync::Mutex};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use widget_config::WidgetConfig;
use widget_protocol::{TODOS_KEY, sample::SAMPLE_DOCUMENT};
use widget_render::{App, terminal};
use widget_store::{FileStore, MemoryStore, SharedStore};

const ENV_LOG_FILE: &str = "TODO_WIDGET_LOG";
const ENV_SAMPLE: &str = "TODO_WIDGET_SAMPLE";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = WidgetConfig::load().context("failed to load widget configuration")?;
    info!(group = %config.group_id, "starting preview");

    if std::env::var_os(ENV_SAMPLE).is_some() {
        let store = MemoryStore::new(&config.group_id).with_value(TODOS_KEY, SAMPLE_DOCUMENT);
        return run(store, config).await;
    }

    let store = match &config.store_dir {
        Some(dir) => FileStore::with_path(dir, &config.group_id)?,
        None => FileStore::new(&config.group_id)?,
    };
    info!(path = %store.path().display(), "reading file store");
    run(store, config).await
}

async fn run<S: SharedStore + Clone>(store: S, config: WidgetConfig) -> anyhow::Result<()> {
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(store, config);
    let result = app.run(&mut terminal).await;

    // Restore even when the loop failed.
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Logs to the file named by `TODO_WIDGET_LOG`; the terminal belongs to the UI.
fn init_logging() -> anyhow::Result<()> {
    let Some(path) = std::env::var_os(ENV_LOG_FILE) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
