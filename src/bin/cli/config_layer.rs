//! Configuration Layer Management
//!
//! Layers are applied lowest priority first: built-in defaults, then the
//! configuration file (`--config`, or `.classlint.yml`/`.classlint.yaml` in
//! the working directory), then CLI flags.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{CheckArgs, LintOptions};
use classlint_rs::core::config::{ClasslintConfig, ReportFormat, IMPLICIT_CONFIG_FILES};
use classlint_rs::detectors::naming::RuleId;

/// Trait for merging configuration layers
pub trait ConfigMerge<T> {
    /// Merge another configuration into this one, with the other taking priority
    fn merge_with(&mut self, other: T);
}

/// Convert CLI arguments to partial configuration overrides
pub trait FromCliArgs<T> {
    /// Create a partial configuration from CLI arguments
    fn from_cli_args(args: &T) -> Self;
}

/// Settings given explicitly on the command line. `None`/empty means "not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub format: Option<ReportFormat>,
    pub strict: Option<bool>,
    pub max_descendant_depth: Option<usize>,
    pub check_variables: Option<bool>,
    pub check_mixins: Option<bool>,
    pub project_namespaces: Vec<String>,
    pub disabled_rules: Vec<RuleId>,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl FromCliArgs<LintOptions> for CliOverrides {
    fn from_cli_args(args: &LintOptions) -> Self {
        Self {
            format: args.format.map(Into::into),
            strict: args.strict.then_some(true),
            max_descendant_depth: args.max_descendant_depth,
            check_variables: args.no_variables.then_some(false),
            check_mixins: args.no_mixins.then_some(false),
            project_namespaces: args.namespaces.clone(),
            disabled_rules: args.disabled_rules.clone(),
            ..Self::default()
        }
    }
}

impl FromCliArgs<CheckArgs> for CliOverrides {
    fn from_cli_args(args: &CheckArgs) -> Self {
        Self {
            include_patterns: args.include.clone(),
            exclude_patterns: args.exclude.clone(),
            ..Self::from_cli_args(&args.options)
        }
    }
}

/// Apply CLI overrides on top of a loaded configuration.
impl ConfigMerge<CliOverrides> for ClasslintConfig {
    fn merge_with(&mut self, other: CliOverrides) {
        if let Some(format) = other.format {
            self.report.format = format;
        }
        if let Some(strict) = other.strict {
            self.report.strict = strict;
        }
        if let Some(depth) = other.max_descendant_depth {
            self.naming.max_descendant_depth = depth;
        }
        if let Some(check_variables) = other.check_variables {
            self.naming.check_variables = check_variables;
        }
        if let Some(check_mixins) = other.check_mixins {
            self.naming.check_mixins = check_mixins;
        }

        extend_unique(&mut self.naming.project_namespaces, other.project_namespaces);
        extend_unique(&mut self.naming.disabled_rules, other.disabled_rules);

        // CLI include patterns replace the file's; excludes add to them.
        if !other.include_patterns.is_empty() {
            self.analysis.include_patterns = other.include_patterns;
        }
        extend_unique(&mut self.analysis.exclude_patterns, other.exclude_patterns);
    }
}

fn extend_unique<T: PartialEq>(target: &mut Vec<T>, items: Vec<T>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

/// The configuration file to load: explicit path, else an implicit one in `dir`.
pub fn resolve_config_path(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        IMPLICIT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    })
}

/// Load defaults and the configuration file, without CLI overrides.
pub fn load_configuration(explicit: Option<&Path>) -> anyhow::Result<ClasslintConfig> {
    let Some(path) = resolve_config_path(explicit, Path::new(".")) else {
        debug!("No configuration file found; using defaults");
        return Ok(ClasslintConfig::default());
    };

    debug!("Loading configuration from {}", path.display());
    ClasslintConfig::from_yaml_file(&path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load configuration from {}: {}",
            path.display(),
            e
        )
    })
}

/// Build the effective configuration for a lint command.
pub fn build_layered_config(
    explicit: Option<&Path>,
    overrides: CliOverrides,
) -> anyhow::Result<ClasslintConfig> {
    let mut config = load_configuration(explicit)?;
    config.merge_with(overrides);

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;

    Ok(config)
}
