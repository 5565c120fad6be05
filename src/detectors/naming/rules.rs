//! Naming rules, violations and verdicts.
//!
//! Each rule is a tagged variant of [`RuleId`] with its own check function.
//! The matcher evaluates them in [`RuleId::ORDERED`] order and reports the
//! first failure, so a name never gets more than one failure reason.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Namespace, ParsedName, SelectorContext, TokenKind};

/// Identifier of a grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// Component, modifier, descendant, state, property and variable segments are camelCase
    CamelCase,
    /// Utility names use a lowercase `u-` and a single camelCase body
    UtilityNamespace,
    /// JS hooks use a lowercase `js-`
    JsHookNamespace,
    /// Adjoining state classes use a lowercase `is-`
    StatePrefix,
    /// State classes are never the only class in a selector
    StandaloneState,
    /// A class carries a modifier or a descendant, not both
    ModifierWithDescendant,
    /// Descendant nesting beyond the configured depth
    DescendantDepth,
    /// Variables and mixins end in `-<propertyName>-<variableName>`
    VariableSuffix,
}

impl RuleId {
    /// Evaluation order.
    pub const ORDERED: [RuleId; 8] = [
        RuleId::CamelCase,
        RuleId::UtilityNamespace,
        RuleId::JsHookNamespace,
        RuleId::StatePrefix,
        RuleId::StandaloneState,
        RuleId::ModifierWithDescendant,
        RuleId::DescendantDepth,
        RuleId::VariableSuffix,
    ];

    /// Kebab-case identifier used in config files and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CamelCase => "camel-case",
            Self::UtilityNamespace => "utility-namespace",
            Self::JsHookNamespace => "js-hook-namespace",
            Self::StatePrefix => "state-prefix",
            Self::StandaloneState => "standalone-state",
            Self::ModifierWithDescendant => "modifier-with-descendant",
            Self::DescendantDepth => "descendant-depth",
            Self::VariableSuffix => "variable-suffix",
        }
    }

    /// One-line description for `list-rules`.
    pub fn description(self) -> &'static str {
        match self {
            Self::CamelCase => {
                "Component, modifier, descendant, state, property and variable names are camelCase"
            }
            Self::UtilityNamespace => "Utility classes use `u-` followed by one camelCase segment",
            Self::JsHookNamespace => "JavaScript hooks use the lowercase `js-` namespace",
            Self::StatePrefix => "State classes use the lowercase `is-` prefix",
            Self::StandaloneState => "State classes are only applied next to a component class",
            Self::ModifierWithDescendant => {
                "A class name has either a --modifier or a -descendant, not both"
            }
            Self::DescendantDepth => "Descendant names nest at most the configured depth",
            Self::VariableSuffix => {
                "Variables and mixins end with -<propertyName>-<variableName>"
            }
        }
    }

    /// Which token kinds the rule applies to.
    pub fn applies_to(self, kind: TokenKind) -> bool {
        match self {
            Self::CamelCase | Self::DescendantDepth => true,
            Self::VariableSuffix => kind.uses_variable_grammar(),
            _ => kind == TokenKind::Class,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ORDERED
            .iter()
            .copied()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| format!("unknown rule '{s}'"))
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule that was violated
    pub rule: RuleId,
    /// Human-readable reason
    pub reason: String,
}

impl Violation {
    pub(crate) fn new(rule: RuleId, reason: impl Into<String>) -> Self {
        Self {
            rule,
            reason: reason.into(),
        }
    }
}

/// Why a name failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameFailure {
    /// The input could not be tokenized at all
    #[error("malformed name: {reason}")]
    MalformedName {
        /// What made the name untokenizable
        reason: String,
    },

    /// The name tokenized but broke a grammar rule
    #[error("{reason}")]
    RuleViolation {
        /// Rule that was violated
        rule: RuleId,
        /// Human-readable reason
        reason: String,
    },
}

impl NameFailure {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedName {
            reason: reason.into(),
        }
    }

    /// Rule identifier, when the failure is a rule violation.
    pub fn rule(&self) -> Option<RuleId> {
        match self {
            Self::MalformedName { .. } => None,
            Self::RuleViolation { rule, .. } => Some(*rule),
        }
    }
}

impl From<Violation> for NameFailure {
    fn from(violation: Violation) -> Self {
        Self::RuleViolation {
            rule: violation.rule,
            reason: violation.reason,
        }
    }
}

/// Result of validating one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    failure: Option<NameFailure>,
    warnings: Vec<Violation>,
}

impl Verdict {
    pub(crate) fn pass(warnings: Vec<Violation>) -> Self {
        Self {
            failure: None,
            warnings,
        }
    }

    pub(crate) fn fail(failure: NameFailure, warnings: Vec<Violation>) -> Self {
        Self {
            failure: Some(failure),
            warnings,
        }
    }

    /// Whether the name satisfies the grammar.
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }

    /// The failure, if any.
    pub fn failure(&self) -> Option<&NameFailure> {
        self.failure.as_ref()
    }

    /// Failure reason text, if any.
    pub fn reason(&self) -> Option<String> {
        self.failure.as_ref().map(ToString::to_string)
    }

    /// Violated rule, if the failure was a rule violation.
    pub fn rule(&self) -> Option<RuleId> {
        self.failure.as_ref().and_then(NameFailure::rule)
    }

    /// Non-fatal findings.
    pub fn warnings(&self) -> &[Violation] {
        &self.warnings
    }
}

/// Describe why a segment is not camelCase, or `None` if it is.
pub fn camel_case_problem(segment: &str) -> Option<&'static str> {
    let first = segment.chars().next()?;
    if segment.contains(['_', '-']) {
        return Some("not camelCase / unexpected separator");
    }
    if first.is_ascii_digit() {
        return Some("not camelCase / starts with a digit");
    }
    if !first.is_ascii_lowercase() {
        return Some("not camelCase / must start with a lowercase letter");
    }
    if !segment.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some("not camelCase / unexpected character");
    }
    None
}

pub(crate) fn check_camel_case(parsed: &ParsedName) -> Option<Violation> {
    parsed
        .segments()
        .iter()
        .filter(|segment| segment.role.requires_camel_case())
        .find_map(|segment| {
            camel_case_problem(&segment.text).map(|problem| {
                Violation::new(
                    RuleId::CamelCase,
                    format!("{} name {problem}", segment.role.label()),
                )
            })
        })
}

pub(crate) fn check_utility_namespace(parsed: &ParsedName) -> Option<Violation> {
    if parsed.namespace() != Some(Namespace::Utility) {
        return None;
    }
    if parsed.namespace_prefix() != Some("u") {
        return Some(Violation::new(
            RuleId::UtilityNamespace,
            "utility namespace must be lowercase `u-`",
        ));
    }
    let body = parsed.body().unwrap_or_default();
    if body.contains('-') {
        return Some(Violation::new(
            RuleId::UtilityNamespace,
            "utility name must be a single camelCase segment after `u-`",
        ));
    }
    camel_case_problem(body)
        .map(|problem| Violation::new(RuleId::UtilityNamespace, format!("utility name {problem}")))
}

pub(crate) fn check_js_hook_namespace(parsed: &ParsedName) -> Option<Violation> {
    if parsed.namespace() != Some(Namespace::JsHook) {
        return None;
    }
    if parsed.namespace_prefix() != Some("js") {
        return Some(Violation::new(
            RuleId::JsHookNamespace,
            "JS-hook namespace must be lowercase `js-`",
        ));
    }
    if parsed.body().map_or(true, str::is_empty) {
        return Some(Violation::new(
            RuleId::JsHookNamespace,
            "JS-hook name is missing a target after `js-`",
        ));
    }
    None
}

pub(crate) fn check_state_prefix(parsed: &ParsedName) -> Option<Violation> {
    parsed.state()?;
    match parsed.state_prefix() {
        None => Some(Violation::new(
            RuleId::StatePrefix,
            "state name missing `is-` prefix",
        )),
        Some("is") => None,
        Some(_) => Some(Violation::new(
            RuleId::StatePrefix,
            "state prefix must be lowercase `is-`",
        )),
    }
}

pub(crate) fn check_standalone_state(
    parsed: &ParsedName,
    context: SelectorContext,
) -> Option<Violation> {
    if context == SelectorContext::Standalone && parsed.is_standalone_state() {
        return Some(Violation::new(
            RuleId::StandaloneState,
            format!(
                "state class `{}` used as a standalone selector; adjoin it to a component class",
                parsed.join()
            ),
        ));
    }
    None
}

pub(crate) fn check_modifier_with_descendant(parsed: &ParsedName) -> Option<Violation> {
    if parsed.modifier().is_some() && !parsed.descendants().is_empty() {
        return Some(Violation::new(
            RuleId::ModifierWithDescendant,
            "modifier cannot be combined with a descendant in a class name",
        ));
    }
    None
}

pub(crate) fn check_descendant_depth(parsed: &ParsedName, max_depth: usize) -> Option<Violation> {
    let depth = parsed.descendants().len();
    if depth > max_depth {
        return Some(Violation::new(
            RuleId::DescendantDepth,
            format!(
                "descendant nesting is {depth} levels deep (at most {max_depth} recommended)"
            ),
        ));
    }
    None
}

pub(crate) fn check_variable_suffix(parsed: &ParsedName) -> Option<Violation> {
    if parsed.property().is_some() && parsed.variable().is_some() {
        return None;
    }
    Some(Violation::new(
        RuleId::VariableSuffix,
        format!(
            "{} name missing `-<propertyName>-<variableName>` suffix",
            parsed.kind()
        ),
    ))
}

