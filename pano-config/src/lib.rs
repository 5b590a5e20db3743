//! Configuration loading for the Pano canvas engine.
//!
//! [`CanvasConfig`] values come from three layers, later ones winning:
//! compiled defaults, an optional TOML (or JSON) file, and `PANO_*`
//! environment overrides. The merged result is validated before it is
//! returned.

#![allow(missing_docs)]

pub mod env;
pub mod error;
pub mod loader;

pub use env::{ENV_PREFIX, apply_env_overrides};
pub use error::LoadError;
pub use loader::{
    ConfigSource, find_default_file, from_json_str, from_toml_str, load,
    load_default, load_from_file, load_with_env, parse_from_str,
};

pub use pano_core::{CanvasConfig, ConfigError};
