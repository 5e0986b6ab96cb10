use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level shelly-profiles configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Register the built-in profiles before any extra files.
    pub builtin: bool,
    /// Additional catalog files, applied in order after the built-ins.
    pub extra: Vec<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            extra: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print JSON instead of tables, as if `--json` were always given.
    pub json: bool,
    /// Colorize human-readable output.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            color: true,
        }
    }
}

const SYSTEM_CONFIG: &str = "/etc/shelly-profiles/config.toml";

fn user_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("shelly-profiles").join("config.toml"))
}

/// One config layer as raw TOML; missing or unreadable files are skipped.
fn read_layer(path: &Path) -> Option<toml::Value> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config layer");
            None
        }
    }
}

/// Overlay `upper` onto `lower`. Nested tables combine per key; for any
/// other value, including arrays, `upper` wins outright.
fn merge_values(lower: toml::Value, upper: toml::Value) -> toml::Value {
    match (lower, upper) {
        (toml::Value::Table(mut table), toml::Value::Table(upper_table)) => {
            for (key, upper_val) in upper_table {
                let merged = match table.remove(&key) {
                    Some(lower_val) => merge_values(lower_val, upper_val),
                    None => upper_val,
                };
                table.insert(key, merged);
            }
            toml::Value::Table(table)
        }
        (_, upper) => upper,
    }
}

/// Parse a config document, reporting failures instead of defaulting.
pub fn parse(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
}

fn load_from_path(path: &Path) -> Config {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read config");
            return Config::default();
        }
    };
    parse(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "failed to parse config");
        Config::default()
    })
}

/// Resolve the effective config. An explicit `--config` file stands alone;
/// otherwise the user file is layered over `/etc`. Never fails: problems
/// are logged and defaults fill the gaps.
pub fn load(override_path: Option<&Path>) -> Config {
    if let Some(path) = override_path {
        return load_from_path(path);
    }

    let layers = [Some(PathBuf::from(SYSTEM_CONFIG)), user_config_path()];
    let merged = layers
        .iter()
        .flatten()
        .filter_map(|path| read_layer(path))
        .reduce(merge_values);

    let Some(value) = merged else {
        return Config::default();
    };
    value.try_into().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to deserialize config");
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog.builtin);
        assert!(config.catalog.extra.is_empty());
        assert!(!config.output.json);
        assert!(config.output.color);
    }

    #[test]
    fn test_merge_values_tables() {
        let base: toml::Value = toml::from_str(
            r#"
            [catalog]
            builtin = true
            extra = ["/etc/shelly-profiles/site.toml"]
            [output]
            color = true
        "#,
        )
        .unwrap();

        let overlay: toml::Value = toml::from_str(
            r#"
            [output]
            json = true
        "#,
        )
        .unwrap();

        let merged = merge_values(base, overlay);
        let config: Config = merged.try_into().unwrap();

        assert!(config.output.json);
        assert!(config.output.color);
        assert_eq!(config.catalog.extra.len(), 1);
    }

    #[test]
    fn test_merge_values_overlay_replaces_arrays() {
        let base: toml::Value = toml::from_str("extra = [\"a.toml\", \"b.toml\"]").unwrap();
        let overlay: toml::Value = toml::from_str("extra = [\"c.toml\"]").unwrap();
        let merged = merge_values(base, overlay);
        assert_eq!(merged["extra"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse("[catalog]\nbuiltin = false\n").unwrap();
        assert!(!config.catalog.builtin);
        assert!(config.output.color);
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        assert!(matches!(parse("[catalog]\nbuiltin = \"yes\"\n"), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[output]\njson = true\ncolor = false\n").unwrap();

        let config = load(Some(&path));
        assert!(config.output.json);
        assert!(!config.output.color);
    }

    #[test]
    fn test_read_layer_skips_missing_and_malformed() {
        let tmp = tempfile::tempdir().unwrap();
        let bad = tmp.path().join("bad.toml");
        std::fs::write(&bad, "[catalog\nbuiltin = ").unwrap();
        assert!(read_layer(&bad).is_none());
        assert!(read_layer(&tmp.path().join("absent.toml")).is_none());

        let good = tmp.path().join("good.toml");
        std::fs::write(&good, "[output]\ncolor = false\n").unwrap();
        let config: Config = read_layer(&good).unwrap().try_into().unwrap();
        assert!(!config.output.color);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let config = load_from_path(Path::new("/nonexistent/config.toml"));
        assert!(config.catalog.builtin);
    }

    #[test]
    fn test_roundtrip_serialize() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.catalog.builtin, deserialized.catalog.builtin);
        assert_eq!(config.output.color, deserialized.output.color);
    }
}
