use std::io;
use std::path::PathBuf;

use pano_core::ConfigError;
use thiserror::Error;

/// Failure to produce a usable [`pano_core::CanvasConfig`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read config from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config json {origin}: {source}")]
    ParseJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: String, value: String },

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
