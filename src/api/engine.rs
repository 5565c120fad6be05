//! Main lint engine implementation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::api::results::LintReport;
use crate::core::config::ClasslintConfig;
use crate::core::discovery::{FileDiscovery, FileError};
use crate::core::errors::Result;
use crate::core::file_utils::FileReader;
use crate::detectors::naming::{NameToken, Reporter, SourceLocation, Verdict};
use crate::lang::scss::{ScssScanner, Syntax};

type LocatedToken = (Option<SourceLocation>, NameToken);

/// Main classlint engine: discovery, scanning and validation.
pub struct ClasslintEngine {
    config: Arc<ClasslintConfig>,
    discovery: FileDiscovery,
    scanner: ScssScanner,
    reporter: Reporter,
}

impl ClasslintEngine {
    /// Create a new engine, validating the configuration first.
    pub fn new(config: ClasslintConfig) -> Result<Self> {
        config.validate()?;

        let discovery = FileDiscovery::new(&config.analysis)?;
        let scanner = ScssScanner::new(&config.naming);
        let reporter = Reporter::new(&config.naming).with_parallel(config.analysis.parallel);

        debug!("Classlint engine initialized");
        Ok(Self {
            config: Arc::new(config),
            discovery,
            scanner,
            reporter,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &ClasslintConfig {
        &self.config
    }

    /// Validate a single name.
    pub fn validate(&self, token: &NameToken) -> Verdict {
        self.reporter.validate(token)
    }

    /// Validate names that were not read from a file.
    pub fn check_names<I>(&self, tokens: I) -> LintReport
    where
        I: IntoIterator<Item = NameToken>,
    {
        let naming = self
            .reporter
            .report(tokens.into_iter().map(|token| (None, token)));
        LintReport::from_naming(naming)
    }

    /// Scan and validate stylesheet source attributed to `file`.
    pub fn check_source(&self, file: impl Into<PathBuf>, source: &str) -> LintReport {
        let file = file.into();
        let entries = self.scan_source(&file, source);
        let mut report = LintReport::from_naming(self.reporter.report(entries));
        report.files_scanned = 1;
        report
    }

    /// Resolve inputs (files, directories, globs), scan every stylesheet
    /// and validate the names found.
    ///
    /// Unreadable inputs are recorded in [`LintReport::file_errors`]; they
    /// never abort the run.
    pub fn check_paths<S: AsRef<str>>(&self, inputs: &[S]) -> LintReport {
        let discovered = self.discovery.discover(inputs);
        let mut file_errors = discovered.errors;

        info!("Scanning {} stylesheets", discovered.files.len());
        let scanned: Vec<std::result::Result<Option<Vec<LocatedToken>>, FileError>> =
            if self.config.analysis.parallel {
                discovered
                    .files
                    .par_iter()
                    .map(|file| self.scan_file(file))
                    .collect()
            } else {
                discovered
                    .files
                    .iter()
                    .map(|file| self.scan_file(file))
                    .collect()
            };

        let mut entries = Vec::new();
        let mut files_scanned = 0usize;
        for outcome in scanned {
            match outcome {
                Ok(Some(tokens)) => {
                    files_scanned += 1;
                    entries.extend(tokens);
                }
                Ok(None) => {}
                Err(error) => file_errors.push(error),
            }
        }

        let naming = self.reporter.report(entries);
        info!(
            "Checked {} names in {} files: {} failures, {} warnings",
            naming.total,
            files_scanned,
            naming.failures.len(),
            naming.warnings.len()
        );

        let mut report = LintReport::from_naming(naming);
        report.files_scanned = files_scanned;
        report.file_errors = file_errors;
        report
    }

    /// `Ok(None)` means the file was skipped as binary.
    fn scan_file(
        &self,
        file: &Path,
    ) -> std::result::Result<Option<Vec<LocatedToken>>, FileError> {
        match FileReader::is_likely_binary(file) {
            Ok(true) => {
                debug!("Skipping binary file: {}", file.display());
                return Ok(None);
            }
            Ok(false) => {}
            Err(err) => return Err(FileError::new(file, err.to_string())),
        }

        let source = FileReader::read_to_string(file).map_err(|err| {
            warn!("Failed to read {}: {err}", file.display());
            FileError::new(file, err.to_string())
        })?;

        Ok(Some(self.scan_source(file, &source)))
    }

    fn scan_source(&self, file: &Path, source: &str) -> Vec<LocatedToken> {
        self.scanner
            .scan_as(source, Syntax::from_path(file))
            .into_iter()
            .map(|scanned| {
                (
                    Some(SourceLocation::new(file, scanned.line)),
                    scanned.token,
                )
            })
            .collect()
    }
}
