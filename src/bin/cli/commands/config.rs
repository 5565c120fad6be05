//! Configuration management commands.
//!
//! Initialization, validation, and printing defaults for classlint
//! configuration files.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use crate::cli::args::{InitConfigArgs, ValidateConfigArgs};
use crate::cli::config_layer::load_configuration;
use classlint_rs::core::config::ClasslintConfig;

/// Row type for settings tables.
#[derive(Tabled)]
struct SettingRow {
    setting: String,
    value: String,
}

impl SettingRow {
    fn new(setting: &str, value: impl ToString) -> Self {
        Self {
            setting: setting.to_string(),
            value: value.to_string(),
        }
    }
}

fn list_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}

fn summary_rows(config: &ClasslintConfig) -> Vec<SettingRow> {
    let disabled: Vec<String> = config
        .naming
        .disabled_rules
        .iter()
        .map(ToString::to_string)
        .collect();

    vec![
        SettingRow::new("analysis.extensions", config.analysis.extensions.join(", ")),
        SettingRow::new(
            "analysis.include_patterns",
            list_or_none(&config.analysis.include_patterns),
        ),
        SettingRow::new(
            "analysis.exclude_patterns",
            list_or_none(&config.analysis.exclude_patterns),
        ),
        SettingRow::new(
            "naming.project_namespaces",
            list_or_none(&config.naming.project_namespaces),
        ),
        SettingRow::new(
            "naming.max_descendant_depth",
            config.naming.max_descendant_depth,
        ),
        SettingRow::new("naming.disabled_rules", list_or_none(&disabled)),
        SettingRow::new("report.strict", config.report.strict),
    ]
}

/// Print default configuration in YAML format
pub async fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default classlint configuration".dimmed());
    println!(
        "{}",
        "# Save this to .classlint.yml and customize as needed".dimmed()
    );
    println!();

    let config = ClasslintConfig::default();
    let yaml_output = serde_yaml::to_string(&config)?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub async fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    let config = ClasslintConfig::default();
    let yaml_content = serde_yaml::to_string(&config)?;
    tokio::fs::write(&args.output, yaml_content).await?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Add your project namespaces under naming.project_namespaces");
    println!(
        "   2. Run the linter with: {}",
        format!("classlint check --config {} <paths>", args.output.display()).cyan()
    );

    Ok(())
}

/// Validate a classlint configuration file
pub async fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let config = load_configuration(Some(args.config.as_path())).and_then(|config| {
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .map(|()| config)
    });

    let config = match config {
        Ok(config) => {
            println!(
                "{}",
                "✅ Configuration file is valid!".bright_green().bold()
            );
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Configuration validation failed:".red(), e);
            eprintln!();
            eprintln!(
                "{}",
                "💡 Tip: Use 'classlint print-default-config' to see valid format".dimmed()
            );
            return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
        }
    };

    if args.verbose {
        println!("{}", "🔧 Detailed Settings".bright_blue().bold());
        println!();

        let mut table = Table::new(summary_rows(&config));
        table.with(TableStyle::rounded());
        println!("{}", table);
    }

    Ok(())
}
