//! CLI Argument Structures
//!
//! This module contains all CLI argument definitions, command structures,
//! and value enums used by the classlint binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use classlint_rs::core::config::ReportFormat;
use classlint_rs::detectors::naming::{RuleId, TokenKind};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Naming-convention linter for SCSS/CSS class, variable and mixin names
#[derive(Parser)]
#[command(name = "classlint")]
#[command(version = VERSION)]
#[command(about = "Classlint - naming-convention linter for stylesheets")]
#[command(long_about = "
Check class, variable and mixin names in SCSS/CSS sources against the
component naming grammar (components, --modifiers, -descendants, .is-states,
u- utilities, js- hooks, and -<property>-<variable> suffixes).

Common Usage:

  # Check every stylesheet under the current directory
  classlint check

  # Check specific files, directories or glob patterns
  classlint check src/styles 'legacy/**/*.scss'

  # Machine-readable output for CI
  classlint check --format json --out classlint.json

  # Validate names directly
  classlint names myComponent--primary btn_primary

  # Show the rule catalogue
  classlint list-rules
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan stylesheets and check every name found
    Check(CheckArgs),

    /// Check names given on the command line
    Names(NamesArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a classlint configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),

    /// List the naming rules in evaluation order
    #[command(name = "list-rules")]
    ListRules,
}

/// Options shared by every command that produces a report
#[derive(Args, Debug, Clone, Default)]
pub struct LintOptions {
    /// Configuration file path (defaults to .classlint.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [default: pretty, or report.format from the config file]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Suppress report output and the summary; only the exit code is reported
    #[arg(short, long)]
    pub quiet: bool,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,

    /// Maximum descendant levels before the depth rule fires
    #[arg(long)]
    pub max_descendant_depth: Option<usize>,

    /// Skip `$variable` declarations
    #[arg(long)]
    pub no_variables: bool,

    /// Skip `@mixin` names
    #[arg(long)]
    pub no_mixins: bool,

    /// Project namespace allowed in front of component names (repeatable)
    #[arg(long = "namespace", value_name = "PREFIX")]
    pub namespaces: Vec<String>,

    /// Rule to skip (repeatable); see `classlint list-rules`
    #[arg(long = "disable-rule", value_name = "RULE")]
    pub disabled_rules: Vec<RuleId>,
}

/// Arguments for `classlint check`
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Files, directories or glob patterns to scan
    #[arg(default_value = ".")]
    pub paths: Vec<String>,

    /// Only scan files matching this glob (repeatable)
    #[arg(long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    /// Skip files matching this glob (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    #[command(flatten)]
    pub options: LintOptions,
}

/// Arguments for `classlint names`
#[derive(Args, Debug, Clone)]
pub struct NamesArgs {
    /// Names to check
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Kind of name being checked
    #[arg(short, long, value_enum, default_value = "class")]
    pub kind: NameKind,

    /// Treat class names as standalone selectors
    #[arg(long)]
    pub standalone: bool,

    #[command(flatten)]
    pub options: LintOptions,
}

/// Arguments for `classlint init-config`
#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".classlint.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for `classlint validate-config`
#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Configuration file to validate
    #[arg(short, long, required = true)]
    pub config: PathBuf,

    /// Show detailed configuration breakdown
    #[arg(short, long)]
    pub verbose: bool,
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<file>:<line>: <name> — <reason>` lines
    Pretty,
    /// JSON document
    Json,
    /// One JSON object per failure
    Jsonl,
    /// YAML document
    Yaml,
    /// Markdown report
    Markdown,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Pretty => ReportFormat::Pretty,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Jsonl => ReportFormat::Jsonl,
            OutputFormat::Yaml => ReportFormat::Yaml,
            OutputFormat::Markdown => ReportFormat::Markdown,
        }
    }
}

/// Kinds of names accepted by `classlint names`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NameKind {
    /// Class selector name
    Class,
    /// `$variable` name
    Variable,
    /// `@mixin` name
    Mixin,
}

impl From<NameKind> for TokenKind {
    fn from(kind: NameKind) -> Self {
        match kind {
            NameKind::Class => TokenKind::Class,
            NameKind::Variable => TokenKind::Variable,
            NameKind::Mixin => TokenKind::Mixin,
        }
    }
}
