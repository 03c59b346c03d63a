// Error types for configuration management

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Rule set not found: {0}")]
    RuleSetNotFound(String),

    #[error("Rule set '{ruleset}': field '{field}' uses unknown rule '{rule}'")]
    UnknownRule {
        ruleset: String,
        field: String,
        rule: String,
    },

    #[error("Invalid nameserver address: {0}")]
    InvalidNameserver(String),

    #[error("Rule registry error: {0}")]
    Registry(#[from] verdict_core::RegistryError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvError(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
