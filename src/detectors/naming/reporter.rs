//! Batch validation and aggregation.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::NamingConfig;
use super::grammar::GrammarMatcher;
use super::rules::{RuleId, Verdict};
use super::tokenizer::Tokenizer;
use super::types::{NameToken, SourceLocation};

/// Batches smaller than this are validated on the calling thread.
const PARALLEL_THRESHOLD: usize = 256;

/// One failing (or warned) name in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// The name as written
    pub name: String,
    /// Where it was found
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<SourceLocation>,
    /// Violated rule; absent for malformed names
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rule: Option<RuleId>,
    /// Human-readable reason
    pub reason: String,
}

/// Aggregated verdicts for a batch of names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingReport {
    /// Names validated
    pub total: usize,
    /// Names that passed
    pub passed: usize,
    /// Failing names, in input order
    pub failures: Vec<ReportEntry>,
    /// Non-fatal findings on names, in input order
    #[serde(default)]
    pub warnings: Vec<ReportEntry>,
}

impl NamingReport {
    /// Whether every name passed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validates names and aggregates verdicts.
#[derive(Debug, Clone)]
pub struct Reporter {
    tokenizer: Tokenizer,
    matcher: GrammarMatcher,
    parallel: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(&NamingConfig::default())
    }
}

impl Reporter {
    /// Create a reporter from naming configuration.
    pub fn new(config: &NamingConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(config),
            matcher: GrammarMatcher::new(config),
            parallel: true,
        }
    }

    /// Enable or disable parallel validation of large batches.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate a single name.
    pub fn validate(&self, token: &NameToken) -> Verdict {
        match self.tokenizer.tokenize(token) {
            Ok(parsed) => self.matcher.check(&parsed, token.context()),
            Err(failure) => Verdict::fail(failure, Vec::new()),
        }
    }

    /// Validate a batch of located names and aggregate the verdicts.
    pub fn report<I>(&self, entries: I) -> NamingReport
    where
        I: IntoIterator<Item = (Option<SourceLocation>, NameToken)>,
    {
        let entries: Vec<(Option<SourceLocation>, NameToken)> = entries.into_iter().collect();

        let verdicts: Vec<Verdict> = if self.parallel && entries.len() >= PARALLEL_THRESHOLD {
            debug!("Validating {} names in parallel", entries.len());
            entries
                .par_iter()
                .map(|(_, token)| self.validate(token))
                .collect()
        } else {
            entries.iter().map(|(_, token)| self.validate(token)).collect()
        };

        let mut report = NamingReport {
            total: entries.len(),
            ..NamingReport::default()
        };

        for ((location, token), verdict) in entries.into_iter().zip(verdicts) {
            for warning in verdict.warnings() {
                report.warnings.push(ReportEntry {
                    name: token.text().to_string(),
                    location: location.clone(),
                    rule: Some(warning.rule),
                    reason: warning.reason.clone(),
                });
            }

            match verdict.failure() {
                None => report.passed += 1,
                Some(failure) => report.failures.push(ReportEntry {
                    name: token.text().to_string(),
                    location,
                    rule: failure.rule(),
                    reason: failure.to_string(),
                }),
            }
        }

        report
    }
}
