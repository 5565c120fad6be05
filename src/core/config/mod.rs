//! Configuration types and management for classlint-rs.
//!
//! A configuration file is YAML with three sections: `analysis` (which files
//! are scanned), `naming` (grammar options) and `report` (output defaults).
//! Every field has a default, so an empty file is a valid configuration.

pub mod validation;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{ClasslintError, Result, ResultExt};
use crate::detectors::naming::NamingConfig;

pub use validation::{validate_non_empty, validate_positive_u64, validate_positive_usize};

/// File names looked up in the working directory when no `--config` is given.
pub const IMPLICIT_CONFIG_FILES: &[&str] = &[".classlint.yml", ".classlint.yaml"];

/// Main configuration for classlint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClasslintConfig {
    /// File discovery and scanning
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Naming grammar options
    #[serde(default)]
    pub naming: NamingConfig,

    /// Report defaults
    #[serde(default)]
    pub report: ReportConfig,
}

/// Configuration construction and I/O methods for [`ClasslintConfig`].
impl ClasslintConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text. Blank input yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()?;
        self.naming.validate()?;
        Ok(())
    }
}

/// File discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Stylesheet extensions scanned when walking directories
    #[serde(default = "AnalysisConfig::default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns a file must match (empty = everything)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Glob patterns excluded from scanning
    #[serde(default = "AnalysisConfig::default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Respect `.gitignore` and friends while walking directories
    #[serde(default = "AnalysisConfig::default_true")]
    pub respect_gitignore: bool,

    /// Maximum file size in bytes; larger files are skipped
    #[serde(default = "AnalysisConfig::default_max_file_size_bytes")]
    pub max_file_size_bytes: u64,

    /// Validate large batches on the rayon thread pool
    #[serde(default = "AnalysisConfig::default_true")]
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            extensions: Self::default_extensions(),
            include_patterns: Vec::new(),
            exclude_patterns: Self::default_exclude_patterns(),
            respect_gitignore: true,
            max_file_size_bytes: Self::default_max_file_size_bytes(),
            parallel: true,
        }
    }
}

/// Default values and validation for [`AnalysisConfig`].
impl AnalysisConfig {
    fn default_extensions() -> Vec<String> {
        vec!["scss".to_string(), "sass".to_string(), "css".to_string()]
    }

    fn default_exclude_patterns() -> Vec<String> {
        vec![
            "**/node_modules/**".to_string(),
            "**/vendor/**".to_string(),
            "**/*.min.css".to_string(),
        ]
    }

    const fn default_true() -> bool {
        true
    }

    /// Default maximum file size: 2MB
    pub const fn default_max_file_size_bytes() -> u64 {
        2 * 1024 * 1024
    }

    /// Whether a file extension is scanned (case-insensitive, leading dot optional).
    pub fn accepts_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        self.extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<()> {
        validate_non_empty(&self.extensions, "analysis.extensions")?;
        validate_positive_u64(self.max_file_size_bytes, "analysis.max_file_size_bytes")?;
        for pattern in self.include_patterns.iter().chain(&self.exclude_patterns) {
            globset::Glob::new(pattern).map_err(|e| {
                ClasslintError::config_field(
                    format!("Invalid glob pattern '{pattern}': {e}"),
                    "analysis",
                )
            })?;
        }
        Ok(())
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One failure per line, `<file>:<line>: <name> — <reason>`
    #[default]
    Pretty,
    /// Pretty-printed JSON document
    Json,
    /// One JSON object per failing name
    Jsonl,
    /// YAML document
    Yaml,
    /// Markdown table
    Markdown,
}

/// Report defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default output format
    #[serde(default)]
    pub format: ReportFormat,

    /// Treat warnings as failures
    #[serde(default)]
    pub strict: bool,
}

#[cfg(test)]
mod tests;
