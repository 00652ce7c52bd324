use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("student_records=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("student_records=warn,warn"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log a collection read from disk
pub fn log_records_loaded(path: &Path, count: usize) {
    tracing::debug!(path = %path.display(), count = count, "Student records loaded");
}

/// Log a collection written to disk
pub fn log_records_saved(path: &Path, count: usize) {
    tracing::info!(path = %path.display(), count = count, "Student records saved");
}

/// Log a freshly created config file
pub fn log_config_created(path: &Path, data_file: &str) {
    tracing::info!(
        path = %path.display(),
        data_file = data_file,
        "Config file created"
    );
}

/// Log the totals of an import run
pub fn log_import_summary(path: &Path, added: usize, updated: usize, skipped: usize) {
    tracing::info!(
        path = %path.display(),
        added = added,
        updated = updated,
        skipped = skipped,
        "Import finished"
    );
}
