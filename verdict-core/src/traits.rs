// Rule contract

use crate::{RuleFailure, Value};

/// A named validation rule.
///
/// Rules are stateless: the same field, value and parameters always produce
/// the same outcome (the MX lookup behind `email:dns` aside). Implementations
/// must not keep per-run state.
///
/// # Example
///
/// ```
/// use verdict_core::{Rule, RuleFailure, RuleRegistry, Validator, Value};
///
/// struct Lowercase;
///
/// impl Rule for Lowercase {
///     fn name(&self) -> &str {
///         "lowercase"
///     }
///
///     fn validate(&self, field: &str, value: &Value, _params: &[&str]) -> Result<(), RuleFailure> {
///         match value {
///             Value::String(s) if s.chars().all(|c| !c.is_uppercase()) => Ok(()),
///             Value::String(_) => Err(RuleFailure::constraint(format!("{} must be lowercase", field))),
///             _ => Err(RuleFailure::type_mismatch(format!("{} must be a string to use lowercase", field))),
///         }
///     }
/// }
///
/// let mut registry = RuleRegistry::new();
/// registry.register(Lowercase).unwrap();
///
/// let data = [("tag".to_string(), Value::from("rust"))].into();
/// let rules = [("tag".to_string(), vec!["lowercase".to_string()])].into();
/// assert!(Validator::make(&registry, data, rules).validate());
/// ```
pub trait Rule: Send + Sync {
    /// Identifier matched against parsed rule-expression names.
    fn name(&self) -> &str;

    /// Check `value` of `field` against this rule.
    ///
    /// `params` holds the raw payload of the expression (`min:5` gives
    /// `["5"]`), or is empty when the expression had no colon. The failure
    /// message must name `field`.
    fn validate(&self, field: &str, value: &Value, params: &[&str]) -> Result<(), RuleFailure>;
}
