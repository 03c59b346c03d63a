// Configuration management for Verdict
//
// Named rule sets and resolver settings, loaded from JSON or TOML files with
// environment overrides:
//
//   [resolver]
//   nameservers = ["1.1.1.1:53"]
//
//   [rulesets.signup]
//   email = ["email:rfc,dns"]
//   age = ["int", "gt:17"]
//
// `VERDICT_NAMESERVERS=ip[:port],...` replaces the configured nameservers.

pub mod env;
pub mod error;
pub mod loader;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use verdict_core::dns::{MxResolver, parse_nameserver};
use verdict_core::{RuleMap, RuleRegistry, parse_rule};

/// Resolver settings for `email:dns`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// `ip` or `ip:port` entries; empty means the host's configuration
    pub nameservers: Vec<String>,
}

impl ResolverSettings {
    /// Parse the configured nameservers.
    pub fn socket_addrs(&self) -> Result<Vec<SocketAddr>> {
        self.nameservers
            .iter()
            .map(|raw| {
                parse_nameserver(raw).ok_or_else(|| ConfigError::InvalidNameserver(raw.clone()))
            })
            .collect()
    }

    /// Build the MX resolver these settings describe.
    #[cfg(feature = "dns")]
    pub fn build(&self) -> Result<verdict_core::dns::SystemMxResolver> {
        Ok(verdict_core::dns::SystemMxResolver::with_nameservers(
            self.socket_addrs()?,
        ))
    }

    fn resolver(&self) -> Result<Arc<dyn MxResolver>> {
        #[cfg(feature = "dns")]
        {
            Ok(Arc::new(self.build()?))
        }
        #[cfg(not(feature = "dns"))]
        {
            self.socket_addrs()?;
            Ok(verdict_core::dns::default_resolver())
        }
    }
}

/// Top-level validator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub resolver: ResolverSettings,
    pub rulesets: HashMap<String, RuleMap>,
}

impl ValidatorConfig {
    /// Load from a `.json` or `.toml` file, then apply `VERDICT_*` overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config: Self = ConfigLoader::auto(path)?.load_file(path)?;
        config.apply_env(&EnvLoader::default())?;

        tracing::info!(
            path = %path.display(),
            rulesets = config.rulesets.len(),
            "loaded validator configuration"
        );
        Ok(config)
    }

    /// Parse from a string without environment overrides.
    pub fn parse(content: &str, format: FileFormat) -> Result<Self> {
        ConfigLoader::new(format).parse(content)
    }

    /// Load a `.env` file into the process environment, then apply overrides.
    ///
    /// With no path, a missing `.env` in the working directory is ignored.
    pub fn load_dotenv(&mut self, path: Option<&str>) -> Result<()> {
        if let Some(path) = path {
            dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
        } else {
            dotenvy::dotenv().ok();
        }
        self.apply_env(&EnvLoader::default())
    }

    /// Apply environment overrides read through `env`.
    pub fn apply_env(&mut self, env: &EnvLoader) -> Result<()> {
        let nameservers = env.load_list("NAMESERVERS")?;
        if !nameservers.is_empty() {
            tracing::debug!(count = nameservers.len(), "nameservers overridden from environment");
            self.resolver.nameservers = nameservers;
        }
        Ok(())
    }

    /// Look up a rule set by name.
    pub fn ruleset(&self, name: &str) -> Result<&RuleMap> {
        self.rulesets
            .get(name)
            .ok_or_else(|| ConfigError::RuleSetNotFound(name.to_string()))
    }

    /// Verify every rule named in every rule set is registered.
    pub fn check(&self, registry: &RuleRegistry) -> Result<()> {
        let sorted: BTreeMap<&String, &RuleMap> = self.rulesets.iter().collect();
        for (ruleset, rules) in sorted {
            let fields: BTreeMap<&String, &Vec<String>> = rules.iter().collect();
            for (field, expressions) in fields {
                for raw in expressions {
                    let expr = parse_rule(raw);
                    if !registry.contains(expr.name) {
                        return Err(ConfigError::UnknownRule {
                            ruleset: ruleset.clone(),
                            field: field.clone(),
                            rule: expr.name.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Build a registry of the built-in rules wired to the configured
    /// resolver, and check every rule set against it.
    pub fn build_registry(&self) -> Result<RuleRegistry> {
        let mut registry = RuleRegistry::new();
        verdict_core::rules::register_builtin_with(&mut registry, self.resolver.resolver()?)?;
        self.check(&registry)?;
        Ok(registry)
    }
}
