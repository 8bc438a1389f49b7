use std::path::PathBuf;

use thiserror::Error;

/// Failure loading host data from disk.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid taxonomy catalog")]
    Catalog(#[from] config::ConfigError),
}
