// Validation orchestrator

use crate::{Data, RuleMap, RuleRegistry, ValidationError, ValidationErrors, Value, parse_rule};

/// Runs a rule map against one data snapshot.
///
/// A validator is made per request. It borrows the registry, so any number
/// of validators may share one registry across threads; the error map is
/// private to each instance.
///
/// ```
/// use verdict_core::{RuleRegistry, Validator, Value};
/// use std::collections::HashMap;
///
/// let registry = RuleRegistry::with_builtin().unwrap();
///
/// let data = HashMap::from([("age".to_string(), Value::from(21))]);
/// let rules = HashMap::from([(
///     "age".to_string(),
///     vec!["numeric".to_string(), "gt:18".to_string()],
/// )]);
///
/// let mut validator = Validator::make(&registry, data, rules);
/// assert!(validator.validate());
/// assert!(validator.errors().is_empty());
/// ```
#[derive(Debug)]
pub struct Validator<'r> {
    registry: &'r RuleRegistry,
    data: Data,
    rules: RuleMap,
    errors: ValidationErrors,
}

impl<'r> Validator<'r> {
    /// Create a validator over `data` and `rules`.
    pub fn make(registry: &'r RuleRegistry, data: Data, rules: RuleMap) -> Self {
        Self {
            registry,
            data,
            rules,
            errors: ValidationErrors::new(),
        }
    }

    /// Run every rule of every field in the rule map.
    ///
    /// Fields missing from the data are checked as [`Value::Absent`]. Unknown
    /// rule names are recorded as field errors and never stop the run, and
    /// every rule of a field runs even after one fails. Returns `true` iff no
    /// error was recorded.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        let mut fields: Vec<&String> = self.rules.keys().collect();
        fields.sort_unstable();

        tracing::debug!(fields = fields.len(), "validation started");

        let absent = Value::Absent;
        for field in fields {
            let value = self.data.get(field.as_str()).unwrap_or(&absent);
            let expressions = &self.rules[field];
            tracing::trace!(field = %field, kind = %value.kind(), rules = expressions.len(), "validating field");

            for raw in expressions {
                let expr = parse_rule(raw);

                let Some(rule) = self.registry.lookup(expr.name) else {
                    tracing::warn!(field = %field, rule = expr.name, "rule not found");
                    self.errors.add(ValidationError::unresolved(field.as_str(), expr.name));
                    continue;
                };

                if let Err(failure) = rule.validate(field, value, &expr.params) {
                    tracing::trace!(field = %field, rule = expr.name, error = %failure, "rule failed");
                    self.errors
                        .add(ValidationError::from_failure(field.as_str(), expr.name, failure));
                }
            }
        }

        tracing::debug!(errors = self.errors.len(), "validation finished");
        self.errors.is_empty()
    }

    /// Errors from the last [`validate`](Self::validate) call.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Run validation and report success.
    pub fn passes(&mut self) -> bool {
        self.validate()
    }

    /// Run validation and report failure.
    pub fn fails(&mut self) -> bool {
        !self.validate()
    }

    /// Consume the validator, keeping its errors.
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn rules(&self) -> &RuleMap {
        &self.rules
    }
}
