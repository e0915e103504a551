//! Tracing setup

use crate::config::Config;

/// Keeps the file writer flushing until dropped
#[cfg(not(target_arch = "wasm32"))]
pub type LogGuard = Option<tracing_appender::non_blocking::WorkerGuard>;

#[cfg(target_arch = "wasm32")]
pub type LogGuard = ();

/// Initialize tracing with console and daily-rolled file output
#[cfg(not(target_arch = "wasm32"))]
pub fn init(config: &Config) -> LogGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::builder()
        .with_default_directive(config.level().into())
        .from_env_lossy();

    let console = fmt::layer().with_writer(std::io::stdout);

    let (file, guard) = match log_dir() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(&dir, "specscope.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
    {
        eprintln!("Failed to install tracing subscriber: {e}");
    }

    guard
}

/// Browser console logging through the Dioxus logger
#[cfg(target_arch = "wasm32")]
pub fn init(config: &Config) -> LogGuard {
    // Only fails when a subscriber is already installed
    let _ = dioxus::logger::init(config.level());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_dir() -> Option<std::path::PathBuf> {
    let dir = dirs::data_local_dir()
        .or_else(dirs::home_dir)?
        .join("SpecScope")
        .join("logs");

    match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(dir),
        Err(e) => {
            eprintln!("Failed to create log dir {dir:?}: {e}");
            None
        }
    }
}
