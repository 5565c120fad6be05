use super::*;
use crate::core::errors::ClasslintError;
use crate::detectors::naming::RuleId;

fn expect_validation_error<T: std::fmt::Debug>(result: Result<T>) -> ClasslintError {
    result.expect_err("expected validation failure")
}

#[test]
fn default_configs_validate_successfully() {
    ClasslintConfig::default()
        .validate()
        .expect("classlint default");
    AnalysisConfig::default()
        .validate()
        .expect("analysis default");
    NamingConfig::default().validate().expect("naming default");
}

#[test]
fn empty_yaml_is_the_default_config() {
    let config = ClasslintConfig::from_yaml_str("  \n").expect("blank config");
    assert_eq!(config.naming.max_descendant_depth, 1);
    assert_eq!(config.report.format, ReportFormat::Pretty);
    assert!(config.analysis.accepts_extension("scss"));
}

#[test]
fn partial_yaml_keeps_other_defaults() {
    let yaml = r#"
naming:
  project_namespaces: [tr]
  disabled_rules: [descendant-depth, standalone-state]
report:
  format: json
  strict: true
"#;
    let config = ClasslintConfig::from_yaml_str(yaml).expect("valid yaml");
    assert_eq!(config.naming.project_namespaces, vec!["tr".to_string()]);
    assert_eq!(
        config.naming.disabled_rules,
        vec![RuleId::DescendantDepth, RuleId::StandaloneState]
    );
    assert!(config.naming.check_variables);
    assert_eq!(config.report.format, ReportFormat::Json);
    assert!(config.report.strict);
    assert_eq!(config.analysis.extensions, vec!["scss", "sass", "css"]);
    config.validate().expect("partial config validates");
}

#[test]
fn unknown_rule_id_is_rejected() {
    let yaml = "naming:\n  disabled_rules: [no-such-rule]\n";
    let err = ClasslintConfig::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, ClasslintError::Serialization { .. }));
}

#[test]
fn zero_descendant_depth_is_rejected() {
    let mut config = ClasslintConfig::default();
    config.naming.max_descendant_depth = 0;
    let err = expect_validation_error(config.validate());
    assert!(
        format!("{err}").contains("max_descendant_depth"),
        "unexpected error message: {err}"
    );
}

#[test]
fn reserved_project_namespace_is_rejected() {
    let mut config = NamingConfig::default();
    config.project_namespaces = vec!["js".to_string()];
    let err = expect_validation_error(config.validate());
    assert!(matches!(err, ClasslintError::Config { .. }));

    config.project_namespaces = vec!["Tr".to_string()];
    let err = expect_validation_error(config.validate());
    assert!(format!("{err}").contains("lowercase"));
}

#[test]
fn analysis_config_rejects_bad_values() {
    let mut config = AnalysisConfig::default();
    config.extensions.clear();
    let err = expect_validation_error(config.validate());
    assert!(format!("{err}").contains("extensions"));

    let mut config = AnalysisConfig::default();
    config.max_file_size_bytes = 0;
    expect_validation_error(config.validate());

    let mut config = AnalysisConfig::default();
    config.exclude_patterns.push("src/[".to_string());
    let err = expect_validation_error(config.validate());
    assert!(format!("{err}").contains("Invalid glob pattern"));
}

#[test]
fn extension_matching_ignores_case_and_dots() {
    let config = AnalysisConfig {
        extensions: vec![".SCSS".to_string()],
        ..AnalysisConfig::default()
    };
    assert!(config.accepts_extension("scss"));
    assert!(config.accepts_extension(".scss"));
    assert!(!config.accepts_extension("css"));
}

#[test]
fn yaml_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(".classlint.yml");

    let mut config = ClasslintConfig::default();
    config.naming.max_descendant_depth = 3;
    config.report.format = ReportFormat::Markdown;
    config.to_yaml_file(&path).expect("write config");

    let loaded = ClasslintConfig::from_yaml_file(&path).expect("read config");
    assert_eq!(loaded.naming.max_descendant_depth, 3);
    assert_eq!(loaded.report.format, ReportFormat::Markdown);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = ClasslintConfig::from_yaml_file("/definitely/not/here.yml").unwrap_err();
    assert!(matches!(err, ClasslintError::Io { .. }));
}
