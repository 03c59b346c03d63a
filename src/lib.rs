// Verdict - declarative, rule-expression driven validation for Rust
//
// This library validates flat maps of named values against per-field lists
// of rule expressions, collecting human-readable failures per field.

// Re-export core functionality
pub use verdict_core::*;

// Re-export optional crates
#[cfg(feature = "config")]
pub use verdict_config;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Data, ErrorKind, RegistryError, Rule, RuleFailure, RuleMap, RuleRegistry, ValidationError,
        ValidationErrors, Validator, Value, parse_rule, submit_rule,
    };

    pub use crate::dns::MxResolver;

    #[cfg(feature = "config")]
    pub use crate::verdict_config::{ConfigError, ValidatorConfig};
}
