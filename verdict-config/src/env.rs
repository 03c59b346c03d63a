// Environment variable loading

use crate::{ConfigError, Result};
use std::env;

/// Default prefix for Verdict environment variables.
pub const DEFAULT_PREFIX: &str = "VERDICT";

/// Environment variable loader
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    /// Create a new environment loader
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn full_key(&self, key: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }

    /// Load a variable if set, treating an unset variable as `None`.
    pub fn load_opt(&self, key: &str) -> Result<Option<String>> {
        match env::var(self.full_key(key)) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(ConfigError::EnvError(e)),
        }
    }

    /// Load a comma-separated list; unset yields an empty list.
    pub fn load_list(&self, key: &str) -> Result<Vec<String>> {
        Ok(self
            .load_opt(key)?
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default())
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(Some(DEFAULT_PREFIX.to_string()))
    }
}
