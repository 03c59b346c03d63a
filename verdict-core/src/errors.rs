// Validation errors

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Failure returned by a single rule invocation.
///
/// The variant records the class of failure; the message is the end-user
/// text and always names the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleFailure {
    /// Missing or malformed rule argument, or an argument that cannot apply
    /// to the field's kind.
    #[error("{0}")]
    Parameter(String),

    /// The value has the wrong kind for this rule.
    #[error("{0}")]
    TypeMismatch(String),

    /// The value has the right kind but violates the constraint.
    #[error("{0}")]
    Constraint(String),
}

impl RuleFailure {
    pub fn parameter(message: impl Into<String>) -> Self {
        Self::Parameter(message.into())
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch(message.into())
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint(message.into())
    }

    /// Class of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parameter(_) => ErrorKind::Parameter,
            Self::TypeMismatch(_) => ErrorKind::TypeMismatch,
            Self::Constraint(_) => ErrorKind::Constraint,
        }
    }

    /// The message text.
    pub fn message(&self) -> &str {
        match self {
            Self::Parameter(m) | Self::TypeMismatch(m) | Self::Constraint(m) => m,
        }
    }
}

/// Class of a recorded field error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No rule registered under the expression's name
    Resolution,
    /// Missing or malformed rule argument
    Parameter,
    /// Wrong value kind
    TypeMismatch,
    /// Constraint violated
    Constraint,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Resolution => "resolution",
            ErrorKind::Parameter => "parameter",
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::Constraint => "constraint",
        }
    }
}

/// Validation error for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Rule name from the expression that produced this error
    pub rule: String,

    /// Failure class
    pub kind: ErrorKind,

    /// Error message
    pub message: String,
}

impl ValidationError {
    /// Error for a rule name with no registered rule.
    pub fn unresolved(field: impl Into<String>, rule: impl Into<String>) -> Self {
        let rule = rule.into();
        Self {
            field: field.into(),
            message: format!("rule '{}' not found", rule),
            kind: ErrorKind::Resolution,
            rule,
        }
    }

    /// Error produced by a rule invocation.
    pub fn from_failure(
        field: impl Into<String>,
        rule: impl Into<String>,
        failure: RuleFailure,
    ) -> Self {
        let kind = failure.kind();
        let message = match failure {
            RuleFailure::Parameter(m) | RuleFailure::TypeMismatch(m) | RuleFailure::Constraint(m) => m,
        };
        Self {
            field: field.into(),
            rule: rule.into(),
            kind,
            message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Field errors accumulated by one validation run.
///
/// Fields without failures have no entry. Errors for a field keep the order
/// of that field's rule expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<ValidationError>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of errors across all fields
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Append an error to its field's list.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.entry(error.field.clone()).or_default().push(error);
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&[ValidationError]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Messages for a field, empty when the field passed.
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.get(field)
            .map(|errors| errors.iter().map(|e| e.message.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Names of fields with at least one error, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidationError])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Field to message list.
    pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
        self.errors
            .iter()
            .map(|(field, errors)| {
                (
                    field.clone(),
                    errors.iter().map(|e| e.message.clone()).collect(),
                )
            })
            .collect()
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|(field, errors)| {
                (field.clone(), serde_json::json!(errors.iter().map(|e| {
                    serde_json::json!({
                        "rule": e.rule,
                        "kind": e.kind.as_str(),
                        "message": e.message,
                    })
                }).collect::<Vec<_>>()))
            }).collect::<serde_json::Map<_, _>>()
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in self.errors.values().flatten() {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        let mut collected = Self::new();
        for error in errors {
            collected.add(error);
        }
        collected
    }
}
