// Rule expression parsing

use std::fmt;

/// A decomposed rule expression such as `between:1,10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleExpression<'a> {
    /// Rule name, matched against the registry
    pub name: &'a str,
    /// Zero or one raw parameter payloads
    pub params: Vec<&'a str>,
}

/// Split a rule expression at its first colon.
///
/// Everything after the colon, further colons included, is kept verbatim as
/// a single parameter. Commas are left for the rule to interpret.
///
/// ```
/// use verdict_core::parse_rule;
///
/// let expr = parse_rule("between:1,10");
/// assert_eq!(expr.name, "between");
/// assert_eq!(expr.params, vec!["1,10"]);
///
/// assert!(parse_rule("numeric").params.is_empty());
/// ```
pub fn parse_rule(expr: &str) -> RuleExpression<'_> {
    match expr.split_once(':') {
        Some((name, payload)) => RuleExpression {
            name,
            params: vec![payload],
        },
        None => RuleExpression {
            name: expr,
            params: Vec::new(),
        },
    }
}

impl RuleExpression<'_> {
    /// The raw payload, if any.
    pub fn payload(&self) -> Option<&str> {
        self.params.first().copied()
    }
}

impl fmt::Display for RuleExpression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(payload) => write!(f, "{}:{}", self.name, payload),
            None => f.write_str(self.name),
        }
    }
}
