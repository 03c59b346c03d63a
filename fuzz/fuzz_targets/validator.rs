//! Fuzz target for the validator.
//!
//! Arbitrary values and rule expressions are run through the built-in rules.
//! No input may panic, and the result must agree with the error map.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;
use verdict_core::{RuleRegistry, Validator, Value};

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Absent,
}

impl From<FuzzValue> for Value {
    fn from(value: FuzzValue) -> Self {
        match value {
            FuzzValue::Bool(b) => Value::Bool(b),
            FuzzValue::Int(i) => Value::Int(i),
            FuzzValue::Float(f) => Value::Float(f),
            FuzzValue::String(s) => Value::String(s),
            FuzzValue::Absent => Value::Absent,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzField {
    name: String,
    value: FuzzValue,
    rules: Vec<String>,
}

fuzz_target!(|fields: Vec<FuzzField>| {
    // No resolver: `email:dns` must not reach the network while fuzzing.
    let mut registry = RuleRegistry::new();
    if verdict_core::rules::register_builtin_with(
        &mut registry,
        std::sync::Arc::new(verdict_core::dns::NoopMxResolver),
    )
    .is_err()
    {
        return;
    }

    let mut data = HashMap::new();
    let mut rules = HashMap::new();
    for field in fields {
        data.insert(field.name.clone(), Value::from(field.value));
        rules.insert(field.name, field.rules);
    }

    let expected: usize = rules.values().map(Vec::len).sum();
    let mut validator = Validator::make(&registry, data, rules);
    let passed = validator.validate();

    assert_eq!(passed, validator.errors().is_empty());
    assert!(validator.errors().len() <= expected);
});
