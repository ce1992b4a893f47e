use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILE: &str = "flashcard_match.log";

/// Sends tracing output to `path`. The terminal belongs to the UI, so nothing
/// is written to stdout. `RUST_LOG` overrides the default `info` level.
/// Calling it again once a subscriber is installed does nothing.
pub fn init(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_init_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join(DEFAULT_LOG_FILE);
        init(&path).unwrap();
        assert!(path.exists());

        // Second call is harmless.
        init(&path).unwrap();
        tracing::info!("Test log message");
    }
}
