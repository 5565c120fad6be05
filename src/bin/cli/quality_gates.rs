//! Exit-status gate for lint commands.

use classlint_rs::LintReport;

use crate::cli::output::print_summary;

/// Print the summary (unless quiet) and fail when the report does not pass.
///
/// Returning an error makes the binary exit with status 1.
pub fn handle_gate_result(report: &LintReport, strict: bool, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        print_summary(report, strict);
    }

    if report.has_failures(strict) {
        let mut problems = Vec::new();
        if !report.failures().is_empty() {
            problems.push(format!("{} failing names", report.failures().len()));
        }
        if !report.file_errors.is_empty() {
            problems.push(format!("{} unreadable inputs", report.file_errors.len()));
        }
        if strict && !report.warnings().is_empty() {
            problems.push(format!("{} warnings (strict)", report.warnings().len()));
        }
        return Err(anyhow::anyhow!("Naming check failed: {}", problems.join(", ")));
    }

    Ok(())
}
