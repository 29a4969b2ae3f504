// src/config/loader.rs
//! Layered configuration loader
//!
//! Built-in defaults, then every existing TOML file in search order, then
//! `ESDIGI_*` environment overrides. The merged table is validated before it
//! is handed out.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{constants::paths, DigitizerConfig};
use crate::utils::validation::ValidationError;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Configuration validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Configuration loader
pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    current_config: DigitizerConfig,
}

impl ConfigLoader {
    /// Loader over the standard search paths
    pub fn new() -> Self {
        Self::with_paths(Self::discover_config_paths())
    }

    /// Create loader with custom paths, later paths take precedence
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            config_paths: paths,
            current_config: DigitizerConfig::default(),
        }
    }

    pub fn config_paths(&self) -> &[PathBuf] {
        &self.config_paths
    }

    /// Load, merge and validate configuration
    pub fn load(&mut self) -> Result<DigitizerConfig, ConfigError> {
        let config = self.load_and_merge_configs()?;
        debug!(summary = %config.summary(), "configuration loaded");
        self.current_config = config.clone();
        Ok(config)
    }

    /// Last successfully loaded configuration
    pub fn current(&self) -> &DigitizerConfig {
        &self.current_config
    }

    /// Validate a single file on top of the defaults, without loading it
    pub fn validate_config_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let mut merged = toml::Value::try_from(DigitizerConfig::default())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        merge_toml_values(&mut merged, self.load_config_file(path)?);

        let config: DigitizerConfig = merged
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(())
    }

    /// Export current configuration to file
    pub fn export_config<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let toml_content = toml::to_string_pretty(&self.current_config)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, toml_content)?;
        Ok(())
    }

    fn load_and_merge_configs(&self) -> Result<DigitizerConfig, ConfigError> {
        let mut merged = toml::Value::try_from(DigitizerConfig::default())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        for config_path in &self.config_paths {
            match self.load_config_file(config_path) {
                Ok(file_config) => {
                    debug!(path = %config_path.display(), "merging configuration file");
                    merge_toml_values(&mut merged, file_config);
                }
                // Missing files in the search list are optional
                Err(ConfigError::FileNotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        apply_environment_overrides(&mut merged, std::env::vars());

        let config: DigitizerConfig = merged.try_into().map_err(|e: toml::de::Error| {
            ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
        })?;
        config.validate()?;

        Ok(config)
    }

    fn load_config_file<P: AsRef<Path>>(&self, path: P) -> Result<toml::Value, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: toml::Value = toml::from_str(&content)?;

        Ok(config)
    }

    fn discover_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        paths.push(PathBuf::from(paths::SYSTEM_CONFIG_PATH));

        if let Some(home_dir) = home_dir() {
            paths.push(home_dir.join(paths::USER_CONFIG_DIR).join("config.toml"));
        }

        // Local configurations (in order of precedence)
        paths.push(PathBuf::from(paths::DEFAULT_CONFIG_FILE));
        paths.push(PathBuf::from(paths::LOCAL_CONFIG_FILE));

        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_toml_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(&key) {
                    merge_toml_values(base_value, value);
                } else {
                    base_table.insert(key, value);
                }
            }
        }
        (base_value, overlay_value) => {
            *base_value = overlay_value;
        }
    }
}

/// `ESDIGI_<PATH>=value` sets the config key at `<PATH>`.
///
/// Underscores are ambiguous between nesting and field names, so the path is
/// resolved against the tables already present in `config`:
/// `ESDIGI_ELECTRONICS_ADC_BOUNDS_MAX` lands on `[electronics.adc_bounds] max`.
/// Names that match no field are inserted as-is and rejected when the merged
/// table is deserialized.
fn apply_environment_overrides<I>(config: &mut toml::Value, vars: I)
where
    I: IntoIterator<Item = (String, String)>,
{
    for (key, value) in vars {
        let Some(rest) = key.strip_prefix(paths::ENV_PREFIX) else {
            continue;
        };
        let name = rest.to_lowercase();
        if name.is_empty() {
            warn!(variable = %key, "ignoring environment override without a key");
            continue;
        }

        let path = resolve_env_path(config, &name);
        debug!(variable = %key, path = %path.join("."), "applying environment override");
        set_nested_value(config, &path, parse_env_value(&value));
    }
}

/// Split `name` into table keys, following the longest matching sub-table at
/// each level. The remainder is the field name.
fn resolve_env_path(config: &toml::Value, name: &str) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = config;
    let mut rest = name;

    while let Some(table) = current.as_table() {
        let next = table
            .iter()
            .filter(|(key, value)| {
                value.is_table()
                    && rest
                        .strip_prefix(key.as_str())
                        .map_or(false, |tail| tail.starts_with('_'))
            })
            .max_by_key(|(key, _)| key.len());

        let Some((key, value)) = next else {
            break;
        };
        path.push(key.clone());
        rest = &rest[key.len() + 1..];
        current = value;
    }

    path.push(rest.to_string());
    path
}

fn set_nested_value(config: &mut toml::Value, path: &[String], value: toml::Value) {
    let mut current = config;

    for (i, part) in path.iter().enumerate() {
        let toml::Value::Table(table) = current else {
            return;
        };
        if i == path.len() - 1 {
            table.insert(part.clone(), value);
            return;
        }
        current = table
            .entry(part.clone())
            .or_insert_with(|| toml::Value::Table(toml::value::Table::new()));
    }
}

fn parse_env_value(value: &str) -> toml::Value {
    if let Ok(int_val) = value.parse::<i64>() {
        toml::Value::Integer(int_val)
    } else if let Ok(float_val) = value.parse::<f64>() {
        toml::Value::Float(float_val)
    } else if let Ok(bool_val) = value.parse::<bool>() {
        toml::Value::Boolean(bool_val)
    } else {
        toml::Value::String(value.to_string())
    }
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("USERPROFILE").map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("HOME").map(PathBuf::from)
    }
}
