// Email rule

use crate::dns::MxResolver;
use crate::{Rule, RuleFailure, Value};
use lettre::message::Mailbox;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

static BASIC_EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").unwrap());

/// Checks enabled by an `email` expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailMode {
    /// Parse as an RFC 5322 mailbox
    pub rfc: bool,
    /// Require at least one MX record for the domain
    pub dns: bool,
}

impl EmailMode {
    /// Parse the comma-joined mode flags of `email:rfc,dns`.
    ///
    /// Flags are trimmed and case-insensitive; empty flags are skipped.
    pub fn parse(params: &[&str]) -> Result<Self, String> {
        let mut mode = Self::default();
        let Some(raw) = params.first() else {
            return Ok(mode);
        };

        for flag in raw.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            match flag.to_ascii_lowercase().as_str() {
                "rfc" => mode.rfc = true,
                "dns" => mode.dns = true,
                _ => return Err(flag.to_string()),
            }
        }

        Ok(mode)
    }

    /// No flags: only the conservative `local@domain.tld` pattern applies.
    pub fn is_basic(&self) -> bool {
        !self.rfc && !self.dns
    }
}

/// `email`, `email:rfc`, `email:dns`, `email:rfc,dns`.
pub struct EmailRule {
    resolver: Arc<dyn MxResolver>,
}

impl EmailRule {
    pub fn new(resolver: Arc<dyn MxResolver>) -> Self {
        Self { resolver }
    }

    fn check_mx(&self, field: &str, domain: &str) -> Result<(), RuleFailure> {
        let domain = domain.to_ascii_lowercase();
        match self.resolver.lookup_mx(&domain) {
            Ok(records) if !records.is_empty() => {
                tracing::trace!(domain = %domain, records = records.len(), "mx lookup");
                Ok(())
            }
            outcome => {
                if let Err(e) = outcome {
                    tracing::warn!(domain = %domain, error = %e, "mx lookup failed");
                }
                Err(RuleFailure::constraint(format!(
                    "{} domain '{}' does not have valid MX records",
                    field, domain
                )))
            }
        }
    }
}

impl Default for EmailRule {
    fn default() -> Self {
        Self::new(crate::dns::default_resolver())
    }
}

impl fmt::Debug for EmailRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailRule").finish_non_exhaustive()
    }
}

impl Rule for EmailRule {
    fn name(&self) -> &str {
        "email"
    }

    fn validate(&self, field: &str, value: &Value, params: &[&str]) -> Result<(), RuleFailure> {
        let mode = EmailMode::parse(params).map_err(|flag| {
            RuleFailure::parameter(format!(
                "{}: unknown email mode '{}' (expected 'rfc' and/or 'dns')",
                field, flag
            ))
        })?;

        let Value::String(s) = value else {
            return Err(RuleFailure::type_mismatch(format!(
                "{} field must be a valid string",
                field
            )));
        };

        if s.trim().is_empty() {
            return Err(RuleFailure::constraint(format!("{} must not be empty", field)));
        }

        if mode.is_basic() {
            if !BASIC_EMAIL_REGEX.is_match(s) {
                return Err(RuleFailure::constraint(format!(
                    "{} must be a valid email format (missing '@' or domain)",
                    field
                )));
            }
            return Ok(());
        }

        let mailbox = s.parse::<Mailbox>();

        if mode.rfc && mailbox.is_err() {
            return Err(RuleFailure::constraint(format!(
                "{} must be a valid RFC-compliant email address",
                field
            )));
        }

        if mode.dns {
            let Ok(mailbox) = mailbox else {
                return Err(RuleFailure::constraint(format!(
                    "{} must be a valid email address",
                    field
                )));
            };
            self.check_mx(field, mailbox.email.domain())?;
        }

        Ok(())
    }
}
