//! Terminal character sheet entry point.
use anyhow::{Context, Result};
use charsheet_core::core_api::{FileStorage, Store};
use charsheet_tui::config::LOG_FILE_NAME;
use charsheet_tui::{App, TuiConfig, terminal};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    let config = TuiConfig::from_env();
    setup_logging(&config)?;

    tracing::info!(path = %config.store.path.display(), "opening character store");
    let mut app = App::new(Store::open(FileStorage::new(&config.store.path)));

    let mut tui = terminal::init().context("failed to initialise terminal")?;
    let _guard = terminal::TerminalGuard;
    app.run(&mut tui)
}

/// Logs go to a file; stdout belongs to the terminal UI.
fn setup_logging(config: &TuiConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            config.log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false),
        )
        .init();

    // Keep the writer alive for the whole process.
    std::mem::forget(guard);

    tracing::info!(
        "log file: {}",
        config.log_dir.join(LOG_FILE_NAME).display()
    );
    Ok(())
}
