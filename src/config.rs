//! Configuration file support for ferro-alteration.
//!
//! This module provides loading of `.ferro.toml` configuration files which
//! control how curator input is preprocessed before the grammars run.
//!
//! # Example Configuration
//!
//! ```toml
//! [protein-change]
//! strip-prefix = true
//! strip-annotation = true
//! exclusions = true
//! categorical = false
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. `.ferro.toml` in current directory
//! 2. `~/.config/ferro/config.toml`
//!
//! CLI flags take precedence over config file settings.

use crate::annotate::AnnotateConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed configuration from a .ferro.toml file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FerroConfig {
    /// Protein change preprocessing configuration.
    pub protein_change: ProteinChangeConfig,
}

/// `[protein-change]` section of the config file. Unset keys keep defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProteinChangeConfig {
    /// Strip a leading `p.`.
    pub strip_prefix: Option<bool>,
    /// Drop a trailing `[...]` annotation.
    pub strip_annotation: Option<bool>,
    /// Recognise `{excluding ...}` suffixes.
    pub exclusions: Option<bool>,
    /// Fall back to categorical alterations such as "Truncating Mutations".
    pub categorical: Option<bool>,
}

impl FerroConfig {
    /// Load configuration from the default locations.
    ///
    /// Searches for config in:
    /// 1. `.ferro.toml` in current directory
    /// 2. `~/.config/ferro/config.toml`
    pub fn load() -> Option<Self> {
        let cwd_config = PathBuf::from(".ferro.toml");
        if cwd_config.exists() {
            match Self::load_from_path(&cwd_config) {
                Ok(config) => return Some(config),
                Err(e) => tracing::warn!("Ignoring {}: {}", cwd_config.display(), e),
            }
        }

        if let Some(home) = dirs_home() {
            let home_config = home.join(".config").join("ferro").join("config.toml");
            if home_config.exists() {
                match Self::load_from_path(&home_config) {
                    Ok(config) => return Some(config),
                    Err(e) => tracing::warn!("Ignoring {}: {}", home_config.display(), e),
                }
            }
        }

        None
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Self::parse(&content)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        // Flat key = value sections only; no external TOML dependency.
        let mut config = FerroConfig::default();
        let mut in_protein_change = false;

        for line in content.lines() {
            let line = strip_comment(line).trim();

            if line.is_empty() {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let section = &line[1..line.len() - 1];
                in_protein_change = section.trim() == "protein-change";
                continue;
            }

            if !in_protein_change {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Parse(format!("expected key = value, found '{}'", line)));
            };
            let key = key.trim();
            let section = &mut config.protein_change;
            let slot = match key {
                "strip-prefix" => &mut section.strip_prefix,
                "strip-annotation" => &mut section.strip_annotation,
                "exclusions" => &mut section.exclusions,
                "categorical" => &mut section.categorical,
                _ => {
                    tracing::warn!("Unknown protein-change config key '{}'", key);
                    continue;
                }
            };
            *slot = Some(parse_bool(key, value.trim())?);
        }

        Ok(config)
    }

    /// Convert this config to an [`AnnotateConfig`].
    pub fn to_annotate_config(&self) -> AnnotateConfig {
        let defaults = AnnotateConfig::default();
        let section = &self.protein_change;
        AnnotateConfig {
            strip_prefix: section.strip_prefix.unwrap_or(defaults.strip_prefix),
            strip_annotation: section.strip_annotation.unwrap_or(defaults.strip_annotation),
            exclusions: section.exclusions.unwrap_or(defaults.exclusions),
            categorical: section.categorical.unwrap_or(defaults.categorical),
        }
    }

    /// Merge this config with CLI arguments.
    /// CLI arguments take precedence.
    pub fn merge_with_cli(&self, no_strip_prefix: bool, no_categorical: bool) -> AnnotateConfig {
        let mut config = self.to_annotate_config();
        if no_strip_prefix {
            config.strip_prefix = false;
        }
        if no_categorical {
            config.categorical = false;
        }
        config
    }
}

/// Configuration loading error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(String),
    /// Parse error in config file.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Remove a `#` comment that is not inside quotes.
fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' | '\'' => in_quotes = !in_quotes,
            '#' if !in_quotes => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim_matches('"').trim_matches('\'') {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ConfigError::Parse(format!(
            "'{}' must be true or false, found '{}'",
            key, other
        ))),
    }
}

/// Get the user's home directory.
fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
