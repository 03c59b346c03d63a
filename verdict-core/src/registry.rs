//! Rule registry
//!
//! Maps rule names to implementations. A registry is built once at startup
//! and then shared read-only by every validation run.
//!
//! Rules reach a registry in one of two ways: an explicit call to
//! [`RuleRegistry::register`], or link-time submission with
//! [`submit_rule!`](crate::submit_rule) followed by a single
//! [`RuleRegistry::register_collected`] at startup.

use crate::Rule;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Registration failures. These are configuration defects; hosts are
/// expected to stop before serving any validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("rule '{0}' is already registered")]
    Duplicate(String),

    #[error("invalid rule name '{0}': names must be non-empty and must not contain ':'")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// A rule submitted for link-time collection.
pub struct RuleRegistration {
    /// Builds the rule instance
    pub factory: fn() -> Arc<dyn Rule>,
    /// Source module (for debugging)
    pub module_path: &'static str,
}

inventory::collect!(RuleRegistration);

impl RuleRegistration {
    pub const fn new(factory: fn() -> Arc<dyn Rule>, module_path: &'static str) -> Self {
        Self {
            factory,
            module_path,
        }
    }
}

/// Submit a rule for collection by [`RuleRegistry::register_collected`].
///
/// The expression is evaluated each time the registry collects, so it should
/// build a fresh stateless rule value.
///
/// ```ignore
/// verdict_core::submit_rule!(Lowercase);
/// ```
#[macro_export]
macro_rules! submit_rule {
    ($rule:expr) => {
        const _: () = {
            fn __verdict_rule_factory() -> ::std::sync::Arc<dyn $crate::Rule> {
                ::std::sync::Arc::new($rule)
            }
            $crate::inventory::submit! {
                $crate::RuleRegistration::new(__verdict_rule_factory, module_path!())
            }
        };
    };
}

/// Name to rule lookup table.
#[derive(Default, Clone)]
pub struct RuleRegistry {
    rules: HashMap<String, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in rule.
    pub fn with_builtin() -> Result<Self> {
        let mut registry = Self::new();
        crate::rules::register_builtin(&mut registry)?;
        Ok(registry)
    }

    /// Add a rule under its own name.
    pub fn register<R: Rule + 'static>(&mut self, rule: R) -> Result<()> {
        self.register_arc(Arc::new(rule))
    }

    /// Add a shared rule under its own name.
    pub fn register_arc(&mut self, rule: Arc<dyn Rule>) -> Result<()> {
        let name = rule.name();
        if name.is_empty() || name.contains(':') {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.rules.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }

        tracing::trace!(rule = name, "registering rule");
        self.rules.insert(name.to_string(), rule);
        Ok(())
    }

    /// Register every rule submitted with `submit_rule!`.
    ///
    /// Returns how many rules were added. Stops at the first conflict.
    pub fn register_collected(&mut self) -> Result<usize> {
        let mut added = 0;
        for registration in inventory::iter::<RuleRegistration> {
            let rule = (registration.factory)();
            tracing::debug!(
                rule = rule.name(),
                module = registration.module_path,
                "collecting submitted rule"
            );
            self.register_arc(rule)?;
            added += 1;
        }
        Ok(added)
    }

    /// Look up a rule by name.
    pub fn lookup(&self, name: &str) -> Option<&dyn Rule> {
        self.rules.get(name).map(|rule| rule.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
