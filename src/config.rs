//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/famtree/famtree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `FAMTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::RenderStyle;

#[derive(Error, Debug)]
#[error("config error: {message}")]
pub struct SettingsError {
    pub message: String,
}

impl SettingsError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Unified configuration for famtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory searched for family files given by name (default: ./data)
    pub data_dir: PathBuf,
    /// Extension tried when a family file is given without one (default: txt)
    pub file_extension: String,
    /// Rendering used by `show` when no `--style` is given
    pub style: RenderStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            file_extension: "txt".into(),
            style: RenderStyle::Indent,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_dir: Option<PathBuf>,
    pub file_extension: Option<String>,
    pub style: Option<RenderStyle>,
}

/// Get the XDG config directory for famtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "famtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("famtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, SettingsError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SettingsError::new(format!("read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| SettingsError::new(format!("parse {}: {}", path.display(), e)))
}

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables leave the input untouched.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

fn parse_style(value: &str) -> Result<RenderStyle, SettingsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "indent" => Ok(RenderStyle::Indent),
        "tree" => Ok(RenderStyle::Tree),
        other => Err(SettingsError::new(format!(
            "unknown style {other:?} (expected indent or tree)"
        ))),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/famtree/famtree.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `FAMTREE_*` prefix
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(SettingsError::new(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_dir: overlay
                .data_dir
                .clone()
                .unwrap_or_else(|| self.data_dir.clone()),
            file_extension: overlay
                .file_extension
                .clone()
                .unwrap_or_else(|| self.file_extension.clone()),
            style: overlay.style.unwrap_or(self.style),
        }
    }

    /// Apply FAMTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("FAMTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("data_dir") {
            settings.data_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("file_extension") {
            settings.file_extension = val;
        }
        if let Ok(val) = config.get_string("style") {
            settings.style = parse_style(&val)?;
        }

        Ok(settings)
    }

    /// Expand shell variables and tilde in `data_dir`.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.data_dir.to_string_lossy().as_ref());
        self.data_dir = PathBuf::from(expanded);
        self.file_extension = self.file_extension.trim_start_matches('.').to_string();
    }

    /// Locate a family file given as a path or as a name inside `data_dir`.
    ///
    /// Tries, in order: `name` itself, `data_dir/name`, and
    /// `data_dir/name.<file_extension>` when `name` has no extension.
    pub fn resolve_input(&self, name: &str) -> Option<PathBuf> {
        let direct = PathBuf::from(name);
        let mut candidates = vec![direct.clone(), self.data_dir.join(&direct)];
        if direct.extension().is_none() && !self.file_extension.is_empty() {
            candidates.push(
                self.data_dir
                    .join(format!("{}.{}", name, self.file_extension)),
            );
        }
        let found = candidates.into_iter().find(|path| path.is_file());
        debug!("resolve {:?} -> {:?}", name, found);
        found
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self)
            .map_err(|e| SettingsError::new(format!("serialize config: {e}")))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# famtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/famtree/famtree.toml
#   Explicit: famtree --config <file>
#   Env:      FAMTREE_* environment variables (e.g. FAMTREE_DATA_DIR)

# Directory searched for family files given by name
# data_dir = "data"

# Extension tried when a name has none ("royals" -> "royals.txt")
# file_extension = "txt"

# Default rendering for `famtree show`: "indent" or "tree"
# style = "indent"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError::new(e.to_string())
}
