//! Report rendering.
//!
//! Every format renders the same [`LintReport`]; only the pretty format is
//! meant for terminals, the rest are machine readable.

use std::fs;
use std::path::Path;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::api::results::LintReport;
use crate::core::config::ReportFormat;
use crate::core::errors::{ClasslintError, Result};
use crate::detectors::naming::ReportEntry;

/// Render `report` in the requested format.
pub fn render(report: &LintReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Pretty => Ok(render_pretty(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Jsonl => render_jsonl(report),
        ReportFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        ReportFormat::Markdown => Ok(render_markdown(report)),
    }
}

/// Write rendered content to `path`, creating parent directories.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ClasslintError::io(
                format!("Failed to create report directory: {}", parent.display()),
                e,
            )
        })?;
    }
    fs::write(path, content).map_err(|e| {
        ClasslintError::io(format!("Failed to write report: {}", path.display()), e)
    })
}

/// `<file>:<line>: <name> — <reason>`, or `<name> — <reason>` without a location.
pub fn format_entry(entry: &ReportEntry) -> String {
    match &entry.location {
        Some(location) => format!("{location}: {} — {}", entry.name, entry.reason),
        None => format!("{} — {}", entry.name, entry.reason),
    }
}

/// One line per failure, then warnings and unreadable inputs.
pub fn render_pretty(report: &LintReport) -> String {
    let mut out = String::new();
    for entry in report.failures() {
        out.push_str(&format_entry(entry));
        out.push('\n');
    }
    for entry in report.warnings() {
        out.push_str("warning: ");
        out.push_str(&format_entry(entry));
        out.push('\n');
    }
    for error in &report.file_errors {
        out.push_str(&format!("error: {error}\n"));
    }
    out
}

fn render_jsonl(report: &LintReport) -> Result<String> {
    let mut out = String::new();
    for entry in report.failures() {
        out.push_str(&serde_json::to_string(entry)?);
        out.push('\n');
    }
    Ok(out)
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Rule")]
    rule: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

impl From<&ReportEntry> for EntryRow {
    fn from(entry: &ReportEntry) -> Self {
        Self {
            location: entry
                .location
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string()),
            name: format!("`{}`", entry.name),
            rule: entry
                .rule
                .map(|rule| rule.to_string())
                .unwrap_or_else(|| "malformed".to_string()),
            reason: entry.reason.replace('|', "\\|"),
        }
    }
}

fn entry_table(entries: &[ReportEntry]) -> String {
    let mut table = Table::new(entries.iter().map(EntryRow::from));
    table.with(Style::markdown());
    table.to_string()
}

fn render_markdown(report: &LintReport) -> String {
    let mut out = String::from("# Naming report\n\n");
    out.push_str(&format!(
        "- Generated: {}\n- Files scanned: {}\n- Names checked: {}\n- Passed: {}\n- Failures: {}\n- Warnings: {}\n",
        report.generated_at.to_rfc3339(),
        report.files_scanned,
        report.total(),
        report.passed(),
        report.failures().len(),
        report.warnings().len(),
    ));

    if !report.failures().is_empty() {
        out.push_str("\n## Failures\n\n");
        out.push_str(&entry_table(report.failures()));
        out.push('\n');
    }
    if !report.warnings().is_empty() {
        out.push_str("\n## Warnings\n\n");
        out.push_str(&entry_table(report.warnings()));
        out.push('\n');
    }
    if !report.file_errors.is_empty() {
        out.push_str("\n## Unreadable inputs\n\n");
        for error in &report.file_errors {
            out.push_str(&format!("- `{}`: {}\n", error.path.display(), error.message));
        }
    }
    out
}
