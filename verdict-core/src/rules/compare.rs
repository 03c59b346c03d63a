// Numeric comparison rules
//
// Comparisons are strict. When the field holds an integer, every bound must
// be a whole number: `int` against `gt:16.1` is rejected as a misconfigured
// rule instead of being evaluated.

use crate::coerce::{is_whole_number, to_float};
use crate::registry::{Result as RegistryResult, RuleRegistry};
use crate::{Rule, RuleFailure, Value};

pub(super) fn register(registry: &mut RuleRegistry) -> RegistryResult<()> {
    registry.register(GtRule)?;
    registry.register(LtRule)?;
    registry.register(BetweenRule)?;
    Ok(())
}

/// `gt:x`: a number strictly greater than `x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GtRule;

impl Rule for GtRule {
    fn name(&self) -> &str {
        "gt"
    }

    fn validate(&self, field: &str, value: &Value, params: &[&str]) -> Result<(), RuleFailure> {
        let threshold = threshold_param(field, "gt", params)?;
        let num = numeric_operand(field, "gt", value)?;
        require_whole(field, "gt", value, threshold)?;

        if num <= threshold {
            return Err(RuleFailure::constraint(format!(
                "{} must be greater than {}",
                field, threshold
            )));
        }

        Ok(())
    }
}

/// `lt:x`: a number strictly less than `x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LtRule;

impl Rule for LtRule {
    fn name(&self) -> &str {
        "lt"
    }

    fn validate(&self, field: &str, value: &Value, params: &[&str]) -> Result<(), RuleFailure> {
        let threshold = threshold_param(field, "lt", params)?;
        let num = numeric_operand(field, "lt", value)?;
        require_whole(field, "lt", value, threshold)?;

        if num >= threshold {
            return Err(RuleFailure::constraint(format!(
                "{} must be less than {}",
                field, threshold
            )));
        }

        Ok(())
    }
}

/// `between:a,b`: a number strictly between `a` and `b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetweenRule;

impl Rule for BetweenRule {
    fn name(&self) -> &str {
        "between"
    }

    fn validate(&self, field: &str, value: &Value, params: &[&str]) -> Result<(), RuleFailure> {
        let [raw] = params else {
            return Err(RuleFailure::parameter(format!(
                "{}: between rule requires a single parameter in the format 'min,max'",
                field
            )));
        };

        let Some((lower, upper)) = split_pair(raw) else {
            return Err(RuleFailure::parameter(format!(
                "{}: between rule requires two comma-separated values",
                field
            )));
        };

        let min = parse_bound(lower).ok_or_else(|| {
            RuleFailure::parameter(format!("{}: lower cap must be a valid number", field))
        })?;
        let max = parse_bound(upper).ok_or_else(|| {
            RuleFailure::parameter(format!("{}: upper cap must be a valid number", field))
        })?;

        let num = numeric_operand(field, "between", value)?;
        require_whole(field, "between", value, min)?;
        require_whole(field, "between", value, max)?;

        if !(min < num && num < max) {
            return Err(RuleFailure::constraint(format!(
                "{} must be between {} and {}",
                field, min, max
            )));
        }

        Ok(())
    }
}

/// Split `"a,b"` into exactly two trimmed parts.
fn split_pair(raw: &str) -> Option<(&str, &str)> {
    let mut parts = raw.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Some((a.trim(), b.trim())),
        _ => None,
    }
}

fn threshold_param(field: &str, rule: &str, params: &[&str]) -> Result<f64, RuleFailure> {
    let Some(raw) = params.first() else {
        return Err(RuleFailure::parameter(format!(
            "{}: {} rule requires a comparison value",
            field, rule
        )));
    };

    parse_bound(raw.trim()).ok_or_else(|| {
        RuleFailure::parameter(format!("{}: {} parameter must be a valid number", field, rule))
    })
}

/// Finite numbers only; `NaN` and infinities make a comparison constant.
fn parse_bound(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn numeric_operand(field: &str, rule: &str, value: &Value) -> Result<f64, RuleFailure> {
    to_float(value).ok_or_else(|| {
        RuleFailure::type_mismatch(format!(
            "{} must be numeric to use {} (apply 'numeric', 'int', or 'float64' rule first)",
            field, rule
        ))
    })
}

fn require_whole(field: &str, rule: &str, value: &Value, bound: f64) -> Result<(), RuleFailure> {
    if value.is_int() && !is_whole_number(bound) {
        return Err(RuleFailure::parameter(format!(
            "{} value {:.2} must be a whole number when {} is an integer",
            rule, bound, field
        )));
    }
    Ok(())
}
