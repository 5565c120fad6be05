//! Lint results returned by the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::discovery::FileError;
use crate::detectors::naming::{NamingReport, ReportEntry};

/// Result of one lint run: naming verdicts plus file-level problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    /// Aggregated naming verdicts
    #[serde(flatten)]
    pub naming: NamingReport,

    /// Number of stylesheets scanned
    #[serde(default)]
    pub files_scanned: usize,

    /// Inputs that could not be scanned
    #[serde(default)]
    pub file_errors: Vec<FileError>,

    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl LintReport {
    /// Wrap a naming report produced without touching the filesystem.
    pub fn from_naming(naming: NamingReport) -> Self {
        Self {
            naming,
            files_scanned: 0,
            file_errors: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    /// Names validated.
    pub fn total(&self) -> usize {
        self.naming.total
    }

    /// Names that passed.
    pub fn passed(&self) -> usize {
        self.naming.passed
    }

    /// Failing names, in scan order.
    pub fn failures(&self) -> &[ReportEntry] {
        &self.naming.failures
    }

    /// Non-fatal findings, in scan order.
    pub fn warnings(&self) -> &[ReportEntry] {
        &self.naming.warnings
    }

    /// Whether the run should be treated as failed.
    ///
    /// Failing names and unreadable inputs always fail; warnings fail only in
    /// strict mode.
    pub fn has_failures(&self, strict: bool) -> bool {
        !self.naming.failures.is_empty()
            || !self.file_errors.is_empty()
            || (strict && !self.naming.warnings.is_empty())
    }
}
