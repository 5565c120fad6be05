//! Configuration for naming checks.

use serde::{Deserialize, Serialize};

use crate::core::config::validation::validate_positive_usize;
use crate::core::errors::{ClasslintError, Result};

use super::rules::RuleId;

/// Namespaces with built-in meaning that cannot be reused as project prefixes.
pub const RESERVED_NAMESPACES: &[&str] = &["u", "js", "is"];

/// Configuration for the naming grammar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Project prefixes allowed in front of component names (`tr-` in `tr-board`)
    #[serde(default)]
    pub project_namespaces: Vec<String>,
    /// Maximum descendant levels before the depth rule fires
    #[serde(default = "NamingConfig::default_max_descendant_depth")]
    pub max_descendant_depth: usize,
    /// Report excessive descendant depth as a failure instead of a warning
    #[serde(default)]
    pub deep_descendants_as_error: bool,
    /// Check `$variable` declarations
    #[serde(default = "NamingConfig::default_true")]
    pub check_variables: bool,
    /// Check `@mixin` names
    #[serde(default = "NamingConfig::default_true")]
    pub check_mixins: bool,
    /// Rules that are not evaluated
    #[serde(default)]
    pub disabled_rules: Vec<RuleId>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            project_namespaces: Vec::new(),
            max_descendant_depth: Self::default_max_descendant_depth(),
            deep_descendants_as_error: false,
            check_variables: true,
            check_mixins: true,
            disabled_rules: Vec::new(),
        }
    }
}

impl NamingConfig {
    const fn default_max_descendant_depth() -> usize {
        1
    }

    const fn default_true() -> bool {
        true
    }

    /// Whether a rule is evaluated.
    pub fn rule_enabled(&self, rule: RuleId) -> bool {
        !self.disabled_rules.contains(&rule)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        validate_positive_usize(self.max_descendant_depth, "naming.max_descendant_depth")?;

        for namespace in &self.project_namespaces {
            if namespace.is_empty()
                || !namespace
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            {
                return Err(ClasslintError::config_field(
                    format!("project namespace '{namespace}' must be lowercase alphanumeric"),
                    "naming.project_namespaces",
                ));
            }
            if RESERVED_NAMESPACES.contains(&namespace.as_str()) {
                return Err(ClasslintError::config_field(
                    format!("project namespace '{namespace}' is reserved"),
                    "naming.project_namespaces",
                ));
            }
        }

        Ok(())
    }
}
