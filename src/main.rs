use stathlete::activity::SampleActivityProvider;
use stathlete::app::App;
use stathlete::config::AppConfig;
use stathlete::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(config: &AppConfig) -> Result<()> {
    // The terminal belongs to the UI, so events only go to the log file.
    let Some(log_path) = config.effective_log_path() else {
        return Ok(());
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    info!(path = %log_path.display(), "Logging initialized");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config)?;
    info!(store = %config.store_path.display(), "Starting stathlete");

    let mut app = App::new(&config, Arc::new(SampleActivityProvider))?;
    app.init()?;

    let result = app.run().await;
    app.restore()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application error");
    }
    result
}
