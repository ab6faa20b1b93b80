use std::path::PathBuf;
use thiserror::Error;

/// A UI asset could not be loaded
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("texture {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Startup and front-end failures
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] std::io::Error),
}
