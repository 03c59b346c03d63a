//! Integration tests for verdict-core

use std::collections::HashMap;
use std::sync::Arc;
use verdict_core::dns::{DnsError, MxResolver};
use verdict_core::*;

struct Palindrome;

impl Rule for Palindrome {
    fn name(&self) -> &str {
        "palindrome"
    }

    fn validate(&self, field: &str, value: &Value, _params: &[&str]) -> Result<(), RuleFailure> {
        let Some(s) = value.as_str() else {
            return Err(RuleFailure::type_mismatch(format!(
                "{} must be a string to use palindrome",
                field
            )));
        };
        if s.chars().eq(s.chars().rev()) {
            Ok(())
        } else {
            Err(RuleFailure::constraint(format!("{} must read the same backwards", field)))
        }
    }
}

struct Collected;

impl Rule for Collected {
    fn name(&self) -> &str {
        "collected"
    }

    fn validate(&self, _field: &str, _value: &Value, _params: &[&str]) -> Result<(), RuleFailure> {
        Ok(())
    }
}

submit_rule!(Collected);

struct StaticMx;

impl MxResolver for StaticMx {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<String>, DnsError> {
        match domain {
            "astley.com" => Ok(vec!["mx1.astley.com".to_string()]),
            _ => Err(DnsError::Lookup {
                domain: domain.to_string(),
                reason: "NXDOMAIN".to_string(),
            }),
        }
    }
}

fn run<'r>(
    registry: &'r RuleRegistry,
    data: Vec<(&str, Value)>,
    rules: Vec<(&str, Vec<&str>)>,
) -> Validator<'r> {
    let data: Data = data.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
    let rules: RuleMap = rules
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
        .collect();
    let mut validator = Validator::make(registry, data, rules);
    validator.validate();
    validator
}

#[test]
fn test_custom_rule_alongside_builtin() {
    let mut registry = RuleRegistry::with_builtin().unwrap();
    registry.register(Palindrome).unwrap();

    let validator = run(
        &registry,
        vec![("word", Value::from("level")), ("other", Value::from("rust"))],
        vec![
            ("word", vec!["string", "palindrome"]),
            ("other", vec!["string", "palindrome"]),
        ],
    );

    assert!(!validator.errors().has("word"));
    assert_eq!(
        validator.errors().messages("other"),
        vec!["other must read the same backwards"]
    );
}

#[test]
fn test_custom_rule_cannot_shadow_builtin() {
    struct FakeString;
    impl Rule for FakeString {
        fn name(&self) -> &str {
            "string"
        }
        fn validate(&self, _: &str, _: &Value, _: &[&str]) -> Result<(), RuleFailure> {
            Ok(())
        }
    }

    let mut registry = RuleRegistry::with_builtin().unwrap();
    let err = registry.register(FakeString).unwrap_err();
    assert_eq!(err.to_string(), "rule 'string' is already registered");
}

#[test]
fn test_register_collected() {
    let mut registry = RuleRegistry::with_builtin().unwrap();
    let added = registry.register_collected().unwrap();

    assert_eq!(added, 1);
    assert!(registry.contains("collected"));

    // Collecting twice conflicts with the first pass.
    assert!(matches!(
        registry.register_collected(),
        Err(RegistryError::Duplicate(name)) if name == "collected"
    ));
}

#[test]
fn test_email_modes_with_injected_resolver() {
    let mut registry = RuleRegistry::new();
    rules::register_builtin_with(&mut registry, Arc::new(StaticMx)).unwrap();

    let validator = run(
        &registry,
        vec![
            ("good", Value::from("rick@astley.com")),
            ("bad_domain", Value::from("rick@invalid.tld")),
            ("bad_syntax", Value::from("rick astley")),
        ],
        vec![
            ("good", vec!["email:rfc,dns"]),
            ("bad_domain", vec!["email:rfc,dns"]),
            ("bad_syntax", vec!["email:rfc,dns"]),
        ],
    );

    let errors = validator.errors();
    assert!(!errors.has("good"));
    assert_eq!(
        errors.messages("bad_domain"),
        vec!["bad_domain domain 'invalid.tld' does not have valid MX records"]
    );
    assert_eq!(
        errors.messages("bad_syntax"),
        vec!["bad_syntax must be a valid RFC-compliant email address"]
    );
}

#[test]
fn test_error_kinds_are_distinguishable() {
    let registry = RuleRegistry::with_builtin().unwrap();
    let validator = run(
        &registry,
        vec![("bio", Value::from("short")), ("age", Value::from("old"))],
        vec![
            ("bio", vec!["min", "min:10", "unknown"]),
            ("age", vec!["gt:18"]),
        ],
    );

    let kinds = |field: &str| -> Vec<ErrorKind> {
        validator
            .errors()
            .get(field)
            .unwrap()
            .iter()
            .map(|e| e.kind)
            .collect()
    };

    assert_eq!(
        kinds("bio"),
        vec![ErrorKind::Parameter, ErrorKind::Constraint, ErrorKind::Resolution]
    );
    assert_eq!(kinds("age"), vec![ErrorKind::TypeMismatch]);
}

#[test]
fn test_registry_is_shared_across_threads() {
    let registry = Arc::new(RuleRegistry::with_builtin().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let data = HashMap::from([("n".to_string(), Value::from(i))]);
                let rules = HashMap::from([("n".to_string(), vec!["between:0,3".to_string()])]);
                Validator::make(&registry, data, rules).validate()
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![false, true, true, false]);
}

#[test]
fn test_errors_serialize_to_json() {
    let registry = RuleRegistry::with_builtin().unwrap();
    let validator = run(
        &registry,
        vec![("score", Value::from("high"))],
        vec![("score", vec!["totallyMadeUpRule"])],
    );

    let json = validator.errors().to_json();
    assert_eq!(json["errors"]["score"][0]["kind"], "resolution");
    assert_eq!(
        json["errors"]["score"][0]["message"],
        "rule 'totallyMadeUpRule' not found"
    );
}
