use super::*;

fn check(name: &str) -> Verdict {
    Reporter::default().validate(&NameToken::class(name))
}

fn check_variable(name: &str) -> Verdict {
    Reporter::default().validate(&NameToken::variable(name))
}

fn assert_fails_with(verdict: &Verdict, rule: RuleId) {
    assert!(!verdict.passed(), "expected failure for rule {rule}");
    assert_eq!(verdict.rule(), Some(rule), "reason: {:?}", verdict.reason());
}

#[test]
fn documented_class_names_pass() {
    for name in [
        "myComponent",
        "myComponent--primary",
        "myComponent-descendantName",
        "u-textTruncate",
        "js-login",
        "dropdown.is-active",
        "is-active",
    ] {
        let verdict = check(name);
        assert!(verdict.passed(), "{name}: {:?}", verdict.reason());
        assert!(verdict.warnings().is_empty());
    }
}

#[test]
fn underscore_is_reported_as_camel_case_separator() {
    let verdict = check("my_component");
    assert_fails_with(&verdict, RuleId::CamelCase);
    assert_eq!(
        verdict.reason().as_deref(),
        Some("component name not camelCase / unexpected separator")
    );
}

#[test]
fn miscased_utility_namespace() {
    let verdict = check("U-textTruncate");
    assert_fails_with(&verdict, RuleId::UtilityNamespace);
    assert!(verdict.reason().unwrap().contains("lowercase `u-`"));
}

#[test]
fn double_modifier_is_malformed() {
    let verdict = check("myComponent--Primary--Secondary");
    assert!(!verdict.passed());
    assert!(matches!(
        verdict.failure(),
        Some(NameFailure::MalformedName { .. })
    ));
    assert_eq!(verdict.rule(), None);
    assert!(verdict.reason().unwrap().contains("only one modifier"));
}

#[test]
fn camel_case_applies_to_every_segment() {
    assert_fails_with(&check("MyComponent"), RuleId::CamelCase);
    assert_fails_with(&check("myComponent--Primary"), RuleId::CamelCase);
    assert_fails_with(&check("myComponent-Title"), RuleId::CamelCase);
    assert_fails_with(&check("dropdown.is-Active"), RuleId::CamelCase);

    let verdict = check("2col");
    assert_fails_with(&verdict, RuleId::CamelCase);
    assert!(verdict.reason().unwrap().contains("starts with a digit"));

    let verdict = check("grid-2col");
    assert_eq!(
        verdict.reason().as_deref(),
        Some("descendant name not camelCase / starts with a digit")
    );
}

#[test]
fn utility_body_must_be_single_segment() {
    let verdict = check("u-text-truncate");
    assert_fails_with(&verdict, RuleId::UtilityNamespace);
    assert!(verdict.reason().unwrap().contains("single camelCase segment"));

    assert_fails_with(&check("u-TextTruncate"), RuleId::UtilityNamespace);
}

#[test]
fn js_hook_body_is_free_form() {
    assert!(check("js-login-form").passed());
    assert!(check("js-Login_Form").passed());
    assert_fails_with(&check("JS-login"), RuleId::JsHookNamespace);
}

#[test]
fn adjoining_class_needs_is_prefix() {
    let verdict = check("dropdown.active");
    assert_fails_with(&verdict, RuleId::StatePrefix);
    assert_eq!(
        verdict.reason().as_deref(),
        Some("state name missing `is-` prefix")
    );

    assert_fails_with(&check("dropdown.IS-active"), RuleId::StatePrefix);
}

#[test]
fn standalone_state_needs_selector_context() {
    let reporter = Reporter::default();

    let unknown = reporter.validate(&NameToken::class("is-active"));
    assert!(unknown.passed());

    let adjoining = reporter
        .validate(&NameToken::class("is-active").with_context(SelectorContext::Adjoining));
    assert!(adjoining.passed());

    let standalone = reporter
        .validate(&NameToken::class("is-active").with_context(SelectorContext::Standalone));
    assert_fails_with(&standalone, RuleId::StandaloneState);

    // Context only matters for bare state classes.
    let component = reporter
        .validate(&NameToken::class("dropdown").with_context(SelectorContext::Standalone));
    assert!(component.passed());
}

#[test]
fn modifier_and_descendant_cannot_combine() {
    assert_fails_with(
        &check("dropdown-item--active"),
        RuleId::ModifierWithDescendant,
    );

    for name in ["dropdown--primary-item", "dropdown--drop-up"] {
        let verdict = check(name);
        assert_fails_with(&verdict, RuleId::ModifierWithDescendant);
        assert_eq!(
            verdict.reason().as_deref(),
            Some("modifier cannot be combined with a descendant in a class name")
        );
    }
}

#[test]
fn deep_descendants_warn_by_default() {
    let verdict = check("dropdown-menu-item");
    assert!(verdict.passed());
    assert_eq!(verdict.warnings().len(), 1);
    assert_eq!(verdict.warnings()[0].rule, RuleId::DescendantDepth);

    let config = NamingConfig {
        deep_descendants_as_error: true,
        ..NamingConfig::default()
    };
    let verdict = Reporter::new(&config).validate(&NameToken::class("dropdown-menu-item"));
    assert_fails_with(&verdict, RuleId::DescendantDepth);

    let config = NamingConfig {
        max_descendant_depth: 2,
        ..NamingConfig::default()
    };
    let verdict = Reporter::new(&config).validate(&NameToken::class("dropdown-menu-item"));
    assert!(verdict.passed());
    assert!(verdict.warnings().is_empty());
}

#[test]
fn first_failing_rule_wins() {
    // Both camelCase and modifier/descendant are violated; camelCase is checked first.
    let verdict = check("Dropdown-item--active");
    assert_fails_with(&verdict, RuleId::CamelCase);
}

#[test]
fn disabled_rules_are_skipped() {
    let config = NamingConfig {
        disabled_rules: vec![RuleId::ModifierWithDescendant],
        ..NamingConfig::default()
    };
    let verdict = Reporter::new(&config).validate(&NameToken::class("dropdown-item--active"));
    assert!(verdict.passed());
}

#[test]
fn variables_need_property_and_variable_suffix() {
    for name in [
        "$color-text",
        "$fontSize-large",
        "$dropdown-color-background",
        "$dropdown--primary-color-background",
        "$dropdown-item-color-background",
        "$dropdown--primary-item-color-background",
        "$color-text--muted",
    ] {
        let verdict = check_variable(name);
        assert!(verdict.passed(), "{name}: {:?}", verdict.reason());
    }

    let verdict = check_variable("$primary");
    assert_fails_with(&verdict, RuleId::VariableSuffix);
    assert_eq!(
        verdict.reason().as_deref(),
        Some("variable name missing `-<propertyName>-<variableName>` suffix")
    );

    assert_fails_with(&check_variable("$dropdown--primary"), RuleId::VariableSuffix);
    assert_fails_with(&check_variable("$color_text"), RuleId::CamelCase);
}

#[test]
fn mixins_follow_the_variable_grammar() {
    let reporter = Reporter::default();
    assert!(reporter
        .validate(&NameToken::mixin("button-size-large"))
        .passed());

    let verdict = reporter.validate(&NameToken::mixin("clearfix"));
    assert_fails_with(&verdict, RuleId::VariableSuffix);
    assert!(verdict.reason().unwrap().starts_with("mixin name"));
}

#[test]
fn validation_is_idempotent() {
    let reporter = Reporter::default();
    for name in ["dropdown", "btn_primary", "a--b--c", "U-x", "dropdown-menu-item"] {
        let token = NameToken::class(name);
        assert_eq!(reporter.validate(&token), reporter.validate(&token));
    }
}

#[test]
fn dropdown_scenario_report() {
    let names = [
        "dropdown",
        "dropdown--dropUp",
        "dropdown-item",
        "dropdown.is-active",
        "u-textTruncate",
        "btn_primary",
    ];
    let report = Reporter::default().report(
        names
            .iter()
            .map(|name| (None, NameToken::class(*name))),
    );

    assert_eq!(report.total, 6);
    assert_eq!(report.passed, 5);
    assert_eq!(report.failures.len(), 1);

    let failure = &report.failures[0];
    assert_eq!(failure.name, "btn_primary");
    assert_eq!(failure.rule, Some(RuleId::CamelCase));
    assert!(failure
        .reason
        .contains("not camelCase / unexpected separator"));
}

#[test]
fn empty_batch_reports_nothing() {
    let report = Reporter::default().report(Vec::new());
    assert_eq!(report.total, 0);
    assert!(report.failures.is_empty());
    assert!(report.is_clean());
}

#[test]
fn report_keeps_input_order_and_locations() {
    let entries: Vec<_> = (0..600)
        .map(|i| {
            let name = if i % 100 == 7 {
                format!("bad_{i}")
            } else {
                format!("item{i}")
            };
            (
                Some(SourceLocation::new("app.scss", i + 1)),
                NameToken::class(name),
            )
        })
        .collect();

    let parallel = Reporter::default().report(entries.clone());
    let sequential = Reporter::default().with_parallel(false).report(entries);
    assert_eq!(parallel, sequential);

    let lines: Vec<usize> = parallel
        .failures
        .iter()
        .map(|f| f.location.as_ref().unwrap().line)
        .collect();
    assert_eq!(lines, vec![8, 108, 208, 308, 408, 508]);
    assert_eq!(parallel.passed, 594);
}

#[test]
fn warnings_are_aggregated_separately() {
    let report = Reporter::default().report(vec![
        (None, NameToken::class("dropdown-menu-item")),
        (None, NameToken::class("dropdown")),
    ]);
    assert_eq!(report.passed, 2);
    assert!(report.failures.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].name, "dropdown-menu-item");
}

#[test]
fn rule_ids_round_trip_through_strings() {
    for rule in RuleId::ORDERED {
        assert_eq!(rule.as_str().parse::<RuleId>(), Ok(rule));
    }
    assert!("no-such-rule".parse::<RuleId>().is_err());
}
