//! Report output and terminal summaries.

use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;

use classlint_rs::core::config::ReportFormat;
use classlint_rs::io::reports::{render, write_report};
use classlint_rs::LintReport;

/// Render the report and send it to `out` or stdout.
pub fn emit_report(
    report: &LintReport,
    format: ReportFormat,
    out: Option<&Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    let content = render(report, format)?;

    match out {
        Some(path) => {
            write_report(path, &content)?;
            if !quiet {
                eprintln!(
                    "{} {}",
                    "📄 Report written to".bright_blue(),
                    path.display().to_string().cyan()
                );
            }
        }
        None if quiet => {}
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// One-line colored summary on stderr.
pub fn print_summary(report: &LintReport, strict: bool) {
    let failures = report.failures().len();
    let warnings = report.warnings().len();
    let file_errors = report.file_errors.len();

    let counts = format!(
        "{} names checked in {} files: {} passed, {} failed, {} warnings",
        report.total(),
        report.files_scanned,
        report.passed(),
        failures,
        warnings
    );

    if report.has_failures(strict) {
        eprintln!("{} {}", "✗".red().bold(), counts.red());
    } else if warnings > 0 {
        eprintln!("{} {}", "⚠".yellow().bold(), counts.yellow());
    } else {
        eprintln!("{} {}", "✓".green().bold(), counts.green());
    }

    if file_errors > 0 {
        eprintln!(
            "{}",
            format!("{file_errors} inputs could not be scanned").red()
        );
    }
}
