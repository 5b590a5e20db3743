//! File loading and layering.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use pano_core::CanvasConfig;

use crate::env::apply_env_overrides;
use crate::error::LoadError;

/// Names an explicit config path, overriding the default file search.
pub const CONFIG_PATH_VAR: &str = "PANO_CONFIG_PATH";

/// Where the file layer of a loaded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path taken from `PANO_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// First default candidate found on disk.
    Discovered(PathBuf),
    /// No file; compiled defaults only.
    Default,
}

/// Defaults, then the file at `path` if any, then the process environment.
pub fn load(path: Option<&Path>) -> Result<CanvasConfig, LoadError> {
    load_with_env(path, env::vars())
}

/// [`load`] with an explicit set of environment pairs.
pub fn load_with_env<I>(
    path: Option<&Path>,
    vars: I,
) -> Result<CanvasConfig, LoadError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let base = match path {
        Some(path) => load_from_file(path)?,
        None => CanvasConfig::default(),
    };
    let config = apply_env_overrides(base, vars)?;
    config.validate()?;
    Ok(config)
}

/// Resolve the config file without an explicit path.
///
/// Evaluation order:
/// 1) `$PANO_CONFIG_PATH`,
/// 2) the first of [`find_default_file`]'s candidates that exists,
/// 3) defaults.
///
/// Environment overrides and validation apply in every case.
pub fn load_default() -> Result<(CanvasConfig, ConfigSource), LoadError> {
    let source = match env::var(CONFIG_PATH_VAR) {
        Ok(path) if !path.trim().is_empty() => {
            ConfigSource::EnvPath(PathBuf::from(path))
        }
        _ => find_default_file()
            .map(ConfigSource::Discovered)
            .unwrap_or(ConfigSource::Default),
    };
    let path = match &source {
        ConfigSource::EnvPath(path) | ConfigSource::Discovered(path) => {
            Some(path.as_path())
        }
        ConfigSource::Default => None,
    };
    let config = load(path)?;
    log::debug!("loaded canvas config from {source:?}");
    Ok((config, source))
}

/// Read one file. `.json` is parsed as JSON, `.toml` as TOML, anything
/// else tries both. The result is not validated.
pub fn load_from_file(path: &Path) -> Result<CanvasConfig, LoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            serde_json::from_str(&contents).map_err(|source| {
                LoadError::ParseJson { origin, source }
            })
        }
        Some("toml") | Some("tml") => toml::from_str(&contents)
            .map_err(|source| LoadError::Parse { origin, source }),
        _ => parse_from_str(&contents, &origin),
    }
}

/// Parse a TOML document. Missing fields take their defaults.
pub fn from_toml_str(contents: &str) -> Result<CanvasConfig, LoadError> {
    toml::from_str(contents).map_err(|source| LoadError::Parse {
        origin: "<inline>".to_string(),
        source,
    })
}

pub fn from_json_str(contents: &str) -> Result<CanvasConfig, LoadError> {
    serde_json::from_str(contents).map_err(|source| LoadError::ParseJson {
        origin: "<inline>".to_string(),
        source,
    })
}

/// Try TOML first, then JSON. Reports the TOML error if both fail.
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<CanvasConfig, LoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            log::debug!("{origin} is neither toml nor json: {json_err}");
            LoadError::Parse {
                origin: origin.to_string(),
                source: toml_err,
            }
        })
    })
}

/// First existing default config file relative to the working directory.
pub fn find_default_file() -> Option<PathBuf> {
    const CANDIDATES: &[&str] = &[
        "pano.toml",
        "pano.json",
        "config/pano.toml",
        "config/pano.json",
    ];

    CANDIDATES
        .iter()
        .map(Path::new)
        .find(|path| path.exists())
        .map(Path::to_path_buf)
}
