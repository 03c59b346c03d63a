// String rules

use crate::registry::{Result as RegistryResult, RuleRegistry};
use crate::{Rule, RuleFailure, Value};

pub(super) fn register(registry: &mut RuleRegistry) -> RegistryResult<()> {
    registry.register(StringRule)?;
    registry.register(MinRule)?;
    registry.register(MaxRule)?;
    Ok(())
}

/// `string`: a string that is not blank after trimming.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringRule;

impl Rule for StringRule {
    fn name(&self) -> &str {
        "string"
    }

    fn validate(&self, field: &str, value: &Value, _params: &[&str]) -> Result<(), RuleFailure> {
        let Value::String(s) = value else {
            return Err(RuleFailure::type_mismatch(format!(
                "{} field must be a valid string",
                field
            )));
        };

        if s.trim().is_empty() {
            return Err(RuleFailure::constraint(format!("{} must not be empty", field)));
        }

        Ok(())
    }
}

/// `min:n`: a string of at least `n` bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinRule;

impl Rule for MinRule {
    fn name(&self) -> &str {
        "min"
    }

    fn validate(&self, field: &str, value: &Value, params: &[&str]) -> Result<(), RuleFailure> {
        let min = length_param(field, "min", params)?;
        let s = string_operand(field, "min", value)?;

        if s.len() < min {
            return Err(RuleFailure::constraint(format!(
                "{} must be at least {} characters",
                field, min
            )));
        }

        Ok(())
    }
}

/// `max:n`: a string of at most `n` bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxRule;

impl Rule for MaxRule {
    fn name(&self) -> &str {
        "max"
    }

    fn validate(&self, field: &str, value: &Value, params: &[&str]) -> Result<(), RuleFailure> {
        let max = length_param(field, "max", params)?;
        let s = string_operand(field, "max", value)?;

        if s.len() > max {
            return Err(RuleFailure::constraint(format!(
                "{} must be at most {} characters",
                field, max
            )));
        }

        Ok(())
    }
}

fn length_param(field: &str, rule: &str, params: &[&str]) -> Result<usize, RuleFailure> {
    let Some(raw) = params.first() else {
        return Err(RuleFailure::parameter(format!(
            "{}: {} rule requires a length parameter",
            field, rule
        )));
    };

    raw.trim().parse::<usize>().map_err(|_| {
        RuleFailure::parameter(format!("{}: {} value must be a valid number", field, rule))
    })
}

fn string_operand<'v>(field: &str, rule: &str, value: &'v Value) -> Result<&'v str, RuleFailure> {
    value.as_str().ok_or_else(|| {
        RuleFailure::type_mismatch(format!("{} must be a string to use {}", field, rule))
    })
}
