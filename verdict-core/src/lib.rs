//! Rule-expression driven validation for Verdict
//!
//! Fields of a flat input map are checked against per-field lists of rule
//! expressions such as `"min:5"` or `"between:1,10"`. Each expression names a
//! rule in a [`RuleRegistry`]; failures are collected per field as
//! human-readable messages.
//!
//! # Examples
//!
//! ## Basic Validation
//!
//! ```
//! use verdict_core::{RuleRegistry, Validator, Value};
//! use std::collections::HashMap;
//!
//! let registry = RuleRegistry::with_builtin().unwrap();
//!
//! let data = HashMap::from([
//!     ("username".to_string(), Value::from("")),
//!     ("age".to_string(), Value::from(21)),
//! ]);
//! let rules = HashMap::from([
//!     ("username".to_string(), vec!["string".to_string()]),
//!     ("age".to_string(), vec!["numeric".to_string(), "gt:18".to_string()]),
//! ]);
//!
//! let mut validator = Validator::make(&registry, data, rules);
//! assert!(!validator.validate());
//! assert_eq!(validator.errors().messages("username"), vec!["username must not be empty"]);
//! assert!(validator.errors().messages("age").is_empty());
//! ```
//!
//! ## Rule Expressions
//!
//! ```
//! use verdict_core::parse_rule;
//!
//! let expr = parse_rule("email:rfc,dns");
//! assert_eq!(expr.name, "email");
//! assert_eq!(expr.params, vec!["rfc,dns"]);
//! ```
//!
//! ## Custom Rules
//!
//! Implement [`Rule`] and add it with [`RuleRegistry::register`], or submit
//! it at link time with [`submit_rule!`] and collect it once at startup with
//! [`RuleRegistry::register_collected`]. A duplicate name is reported as a
//! [`RegistryError`]; hosts should treat it as fatal.

pub mod coerce;
pub mod dns;
mod errors;
mod parser;
pub mod registry;
pub mod rules;
mod traits;
mod validator;
mod value;

pub use errors::*;
pub use parser::*;
pub use registry::{RegistryError, RuleRegistration, RuleRegistry};
pub use traits::*;
pub use validator::*;
pub use value::*;

#[doc(hidden)]
pub use inventory;
