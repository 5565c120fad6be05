//! Grammar matcher: evaluates the ordered rule set against a parsed name.

use super::config::NamingConfig;
use super::rules::{
    check_camel_case, check_descendant_depth, check_js_hook_namespace,
    check_modifier_with_descendant, check_standalone_state, check_state_prefix,
    check_utility_namespace, check_variable_suffix, RuleId, Verdict, Violation,
};
use super::types::{ParsedName, SelectorContext};

/// Checks parsed names against the naming grammar.
#[derive(Debug, Clone)]
pub struct GrammarMatcher {
    config: NamingConfig,
}

impl Default for GrammarMatcher {
    fn default() -> Self {
        Self::new(&NamingConfig::default())
    }
}

impl GrammarMatcher {
    /// Create a matcher from naming configuration.
    pub fn new(config: &NamingConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Validate a parsed name. The first failing rule in
    /// [`RuleId::ORDERED`] decides the verdict.
    pub fn check(&self, parsed: &ParsedName, context: SelectorContext) -> Verdict {
        let mut warnings = Vec::new();

        for rule in RuleId::ORDERED {
            if !self.config.rule_enabled(rule) || !rule.applies_to(parsed.kind()) {
                continue;
            }
            let Some(violation) = self.evaluate(rule, parsed, context) else {
                continue;
            };
            if self.is_warning(rule) {
                warnings.push(violation);
            } else {
                return Verdict::fail(violation.into(), warnings);
            }
        }

        Verdict::pass(warnings)
    }

    fn evaluate(
        &self,
        rule: RuleId,
        parsed: &ParsedName,
        context: SelectorContext,
    ) -> Option<Violation> {
        match rule {
            RuleId::CamelCase => check_camel_case(parsed),
            RuleId::UtilityNamespace => check_utility_namespace(parsed),
            RuleId::JsHookNamespace => check_js_hook_namespace(parsed),
            RuleId::StatePrefix => check_state_prefix(parsed),
            RuleId::StandaloneState => check_standalone_state(parsed, context),
            RuleId::ModifierWithDescendant => check_modifier_with_descendant(parsed),
            RuleId::DescendantDepth => check_descendant_depth(parsed, self.config.max_descendant_depth),
            RuleId::VariableSuffix => check_variable_suffix(parsed),
        }
    }

    fn is_warning(&self, rule: RuleId) -> bool {
        rule == RuleId::DescendantDepth && !self.config.deep_descendants_as_error
    }
}
