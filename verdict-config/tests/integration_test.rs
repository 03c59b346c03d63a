//! Integration tests for verdict-config

use std::fs;
use std::io::Write;
use tempfile::{Builder, TempDir};
use verdict_config::*;
use verdict_core::{RuleRegistry, Validator, Value};

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(
        &path,
        r#"
            [rulesets.signup]
            username = ["string", "min:3", "max:16"]
            age = ["int", "between:18,120"]
        "#,
    )
    .unwrap();

    let config = ValidatorConfig::load(&path).unwrap();
    let signup = config.ruleset("signup").unwrap();
    assert_eq!(signup["username"], vec!["string", "min:3", "max:16"]);
    assert_eq!(signup["age"], vec!["int", "between:18,120"]);
}

#[test]
fn test_load_json_file() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"resolver": {{"nameservers": ["9.9.9.9"]}}, "rulesets": {{"contact": {{"email": ["email:rfc"]}}}}}}"#
    )
    .unwrap();

    let config = ValidatorConfig::load(file.path()).unwrap();
    assert!(config.ruleset("contact").is_ok());
    assert_eq!(config.resolver.socket_addrs().unwrap().len(), 1);
}

#[test]
fn test_load_rejects_unknown_extension() {
    let file = Builder::new().suffix(".yaml").tempfile().unwrap();
    assert!(matches!(
        ValidatorConfig::load(file.path()),
        Err(ConfigError::LoadError(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = ValidatorConfig::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_env_overrides_nameservers() {
    let mut config = ValidatorConfig::parse(
        r#"
            [resolver]
            nameservers = ["1.1.1.1"]
        "#,
        FileFormat::Toml,
    )
    .unwrap();

    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("VERDICT_TEST_OVERRIDE_NAMESERVERS", "8.8.8.8, 8.8.4.4:5353");
    }

    let env = EnvLoader::new(Some("VERDICT_TEST_OVERRIDE".to_string()));
    config.apply_env(&env).unwrap();

    assert_eq!(config.resolver.nameservers, vec!["8.8.8.8", "8.8.4.4:5353"]);
    assert_eq!(
        config.resolver.socket_addrs().unwrap()[1].to_string(),
        "8.8.4.4:5353"
    );

    unsafe {
        std::env::remove_var("VERDICT_TEST_OVERRIDE_NAMESERVERS");
    }
}

#[test]
fn test_load_dotenv_file() {
    let dir = TempDir::new().unwrap();
    let env_path = dir.path().join(".env");
    fs::write(&env_path, "VERDICT_DOTENV_CHECK=present\n").unwrap();

    let mut config = ValidatorConfig::default();
    config.load_dotenv(env_path.to_str()).unwrap();

    let env = EnvLoader::default();
    assert_eq!(
        env.load_opt("DOTENV_CHECK").unwrap().as_deref(),
        Some("present")
    );
}

#[test]
fn test_load_dotenv_missing_path() {
    let mut config = ValidatorConfig::default();
    let result = config.load_dotenv(Some("/nonexistent/verdict/.env"));
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_configured_ruleset_drives_validator() {
    let config = ValidatorConfig::parse(
        r#"
            [rulesets.profile]
            nick = ["string", "min:3"]
            age = ["numeric", "gt:17"]
        "#,
        FileFormat::Toml,
    )
    .unwrap();

    let registry = RuleRegistry::with_builtin().unwrap();
    config.check(&registry).unwrap();

    let data = [
        ("nick".to_string(), Value::from("jo")),
        ("age".to_string(), Value::from(30)),
    ]
    .into_iter()
    .collect();
    let rules = config.ruleset("profile").unwrap().clone();

    let mut validator = Validator::make(&registry, data, rules);
    assert!(!validator.validate());
    assert_eq!(
        validator.errors().messages("nick"),
        vec!["nick must be at least 3 characters"]
    );
    assert!(!validator.errors().has("age"));
}

#[test]
fn test_check_against_custom_registry() {
    let config = ValidatorConfig::parse(
        r#"{"rulesets": {"login": {"password": ["string", "strong"]}}}"#,
        FileFormat::Json,
    )
    .unwrap();

    let registry = RuleRegistry::with_builtin().unwrap();
    match config.check(&registry) {
        Err(ConfigError::UnknownRule {
            ruleset,
            field,
            rule,
        }) => {
            assert_eq!(ruleset, "login");
            assert_eq!(field, "password");
            assert_eq!(rule, "strong");
        }
        other => panic!("expected UnknownRule, got {:?}", other),
    }
}
