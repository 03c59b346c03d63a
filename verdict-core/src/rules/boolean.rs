// Boolean rule

use crate::registry::{Result as RegistryResult, RuleRegistry};
use crate::{Rule, RuleFailure, Value};

pub(super) fn register(registry: &mut RuleRegistry) -> RegistryResult<()> {
    registry.register(BooleanRule)
}

/// `boolean`: a bool, one of the strings `"true"`, `"false"`, `"1"`, `"0"`,
/// or the integers `0` and `1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanRule;

impl Rule for BooleanRule {
    fn name(&self) -> &str {
        "boolean"
    }

    fn validate(&self, field: &str, value: &Value, _params: &[&str]) -> Result<(), RuleFailure> {
        let accepted = match value {
            Value::Bool(_) => true,
            Value::String(s) => matches!(s.as_str(), "true" | "false" | "1" | "0"),
            Value::Int(i) => matches!(*i, 0 | 1),
            Value::Float(_) | Value::Absent => {
                return Err(RuleFailure::type_mismatch(format!(
                    "{} must be a boolean, string or integer to use boolean (got {})",
                    field,
                    value.kind()
                )));
            }
        };

        if accepted {
            Ok(())
        } else {
            Err(RuleFailure::constraint(format!(
                "{} must be a boolean value (true, false, 1, 0)",
                field
            )))
        }
    }
}
