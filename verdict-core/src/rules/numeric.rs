// Numeric kind rules
//
// `int` and `float64` match the value's kind exactly; a whole float does not
// satisfy `int` and an integer does not satisfy `float64`.

use crate::coerce::to_float;
use crate::registry::{Result as RegistryResult, RuleRegistry};
use crate::{Rule, RuleFailure, Value};

pub(super) fn register(registry: &mut RuleRegistry) -> RegistryResult<()> {
    registry.register(NumericRule)?;
    registry.register(IntRule)?;
    registry.register(Float64Rule)?;
    Ok(())
}

/// `numeric`: any integer or float.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericRule;

impl Rule for NumericRule {
    fn name(&self) -> &str {
        "numeric"
    }

    fn validate(&self, field: &str, value: &Value, _params: &[&str]) -> Result<(), RuleFailure> {
        match to_float(value) {
            Some(_) => Ok(()),
            None => Err(RuleFailure::type_mismatch(format!(
                "{} must be a numeric value",
                field
            ))),
        }
    }
}

/// `int`: an integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntRule;

impl Rule for IntRule {
    fn name(&self) -> &str {
        "int"
    }

    fn validate(&self, field: &str, value: &Value, _params: &[&str]) -> Result<(), RuleFailure> {
        match value {
            Value::Int(_) => Ok(()),
            _ => Err(RuleFailure::type_mismatch(format!(
                "{} must be an integer",
                field
            ))),
        }
    }
}

/// `float64`: a float.
#[derive(Debug, Clone, Copy, Default)]
pub struct Float64Rule;

impl Rule for Float64Rule {
    fn name(&self) -> &str {
        "float64"
    }

    fn validate(&self, field: &str, value: &Value, _params: &[&str]) -> Result<(), RuleFailure> {
        match value {
            Value::Float(_) => Ok(()),
            _ => Err(RuleFailure::type_mismatch(format!(
                "{} must be a float64 value",
                field
            ))),
        }
    }
}
