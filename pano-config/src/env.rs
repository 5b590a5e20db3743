//! `PANO_*` environment overrides.

use std::str::FromStr;

use pano_core::CanvasConfig;

use crate::error::LoadError;

/// Prefix shared by every override variable.
pub const ENV_PREFIX: &str = "PANO_";

/// Apply overrides from `(name, value)` pairs onto `config`.
///
/// Only the recognised `PANO_*` names are read; everything else, including
/// blank values, is ignored. A value that does not parse is rejected with
/// [`LoadError::InvalidEnv`]. Range checks are left to
/// [`CanvasConfig::validate`].
pub fn apply_env_overrides<I>(
    mut config: CanvasConfig,
    vars: I,
) -> Result<CanvasConfig, LoadError>
where
    I: IntoIterator<Item = (String, String)>,
{
    for (key, value) in vars {
        let Some(name) = key.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        let raw = value.trim();
        if raw.is_empty() {
            continue;
        }
        match name {
            "COLUMNS" => config.columns = parse(&key, raw)?,
            "GAP" => config.gap = parse(&key, raw)?,
            "DRAG_EASE" => config.drag_ease = parse(&key, raw)?,
            "BUFFER_ZONE" => config.buffer_zone = parse(&key, raw)?,
            "EDGE_THRESHOLD" => config.edge_threshold = parse(&key, raw)?,
            "MAX_SCROLL_SPEED" => config.max_scroll_speed = parse(&key, raw)?,
            "IDLE_SPEED" => config.idle_speed = parse(&key, raw)?,
            _ => continue,
        }
        log::debug!("config override {key}={raw}");
    }
    Ok(config)
}

fn parse<T: FromStr>(key: &str, raw: &str) -> Result<T, LoadError> {
    raw.parse().map_err(|_| {
        log::warn!("rejected config override {key}={raw:?}");
        LoadError::InvalidEnv {
            key: key.to_string(),
            value: raw.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn recognised_keys_override_fields() {
        let config = apply_env_overrides(
            CanvasConfig::default(),
            vars(&[
                ("PANO_COLUMNS", "6"),
                ("PANO_GAP", "12.5"),
                ("PANO_DRAG_EASE", " 0.2 "),
                ("PANO_BUFFER_ZONE", "2"),
                ("PANO_EDGE_THRESHOLD", "90"),
                ("PANO_MAX_SCROLL_SPEED", "40"),
                ("PANO_IDLE_SPEED", "0.004"),
            ]),
        )
        .expect("valid overrides");
        assert_eq!(config.columns, 6);
        assert_eq!(config.gap, 12.5);
        assert_eq!(config.drag_ease, 0.2);
        assert_eq!(config.buffer_zone, 2.0);
        assert_eq!(config.edge_threshold, 90.0);
        assert_eq!(config.max_scroll_speed, 40.0);
        assert_eq!(config.idle_speed, 0.004);
    }

    #[test]
    fn unrelated_and_blank_values_are_ignored() {
        let config = apply_env_overrides(
            CanvasConfig::default(),
            vars(&[
                ("HOME", "/root"),
                ("PANO_CONFIG_PATH", "pano.toml"),
                ("PANO_UNKNOWN", "1"),
                ("PANO_GAP", "   "),
            ]),
        )
        .expect("nothing to reject");
        assert_eq!(config, CanvasConfig::default());
    }

    #[test]
    fn unparsable_value_is_rejected() {
        let err = apply_env_overrides(
            CanvasConfig::default(),
            vars(&[("PANO_COLUMNS", "four")]),
        )
        .unwrap_err();
        match err {
            LoadError::InvalidEnv { key, value } => {
                assert_eq!(key, "PANO_COLUMNS");
                assert_eq!(value, "four");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn later_pairs_win() {
        let config = apply_env_overrides(
            CanvasConfig::default(),
            vars(&[("PANO_GAP", "10"), ("PANO_GAP", "20")]),
        )
        .expect("valid overrides");
        assert_eq!(config.gap, 20.0);
    }
}
