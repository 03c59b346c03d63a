//! Mail-exchange lookups for `email:dns`.
//!
//! Lookups are blocking, with no timeout or retry beyond the resolver's own
//! defaults. Callers that need bounded latency wrap the validation run.

use std::net::SocketAddr;
use thiserror::Error;

/// MX lookup failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    #[error("resolver unavailable: {0}")]
    Unavailable(String),

    #[error("lookup failed for {domain}: {reason}")]
    Lookup { domain: String, reason: String },
}

/// Resolves the mail exchangers of a domain.
pub trait MxResolver: Send + Sync {
    /// Exchange host names for `domain`. An empty list means no MX records.
    fn lookup_mx(&self, domain: &str) -> Result<Vec<String>, DnsError>;
}

/// Resolver that never resolves anything.
///
/// Installed when the `dns` feature is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMxResolver;

impl MxResolver for NoopMxResolver {
    fn lookup_mx(&self, _domain: &str) -> Result<Vec<String>, DnsError> {
        Err(DnsError::Unavailable(
            "built without the `dns` feature".to_string(),
        ))
    }
}

#[cfg(feature = "dns")]
pub use system::SystemMxResolver;

#[cfg(feature = "dns")]
mod system {
    use super::{DnsError, MxResolver, SocketAddr};
    use hickory_resolver::Resolver;
    use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
    use once_cell::sync::OnceCell;

    /// Blocking resolver backed by `hickory-resolver`.
    ///
    /// The underlying resolver is built on first lookup. It owns its own
    /// runtime, so lookups must not run inside an async executor thread.
    pub struct SystemMxResolver {
        nameservers: Vec<SocketAddr>,
        resolver: OnceCell<Resolver>,
    }

    impl SystemMxResolver {
        /// Use the host's resolver configuration (`/etc/resolv.conf` on unix).
        pub fn new() -> Self {
            Self::with_nameservers(Vec::new())
        }

        /// Query the given nameservers over UDP/TCP instead of the host's.
        ///
        /// An empty list falls back to the host configuration.
        pub fn with_nameservers(nameservers: Vec<SocketAddr>) -> Self {
            Self {
                nameservers,
                resolver: OnceCell::new(),
            }
        }

        pub fn nameservers(&self) -> &[SocketAddr] {
            &self.nameservers
        }

        fn resolver(&self) -> Result<&Resolver, DnsError> {
            self.resolver.get_or_try_init(|| {
                let built = if self.nameservers.is_empty() {
                    Resolver::from_system_conf()
                } else {
                    let mut group = NameServerConfigGroup::new();
                    for addr in &self.nameservers {
                        group.merge(NameServerConfigGroup::from_ips_clear(
                            &[addr.ip()],
                            addr.port(),
                            true,
                        ));
                    }
                    Resolver::new(
                        ResolverConfig::from_parts(None, Vec::new(), group),
                        ResolverOpts::default(),
                    )
                };
                built.map_err(|e| DnsError::Unavailable(e.to_string()))
            })
        }
    }

    impl Default for SystemMxResolver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl std::fmt::Debug for SystemMxResolver {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SystemMxResolver")
                .field("nameservers", &self.nameservers)
                .field("initialized", &self.resolver.get().is_some())
                .finish()
        }
    }

    impl MxResolver for SystemMxResolver {
        fn lookup_mx(&self, domain: &str) -> Result<Vec<String>, DnsError> {
            let resolver = self.resolver()?;
            // Fully qualified, so search domains are never appended.
            let query = format!("{}.", domain.trim_end_matches('.'));

            let lookup = resolver.mx_lookup(query).map_err(|e| DnsError::Lookup {
                domain: domain.to_string(),
                reason: e.to_string(),
            })?;

            Ok(lookup
                .iter()
                .map(|mx| mx.exchange().to_utf8())
                .collect())
        }
    }
}

/// Resolver installed by [`register_builtin`](crate::rules::register_builtin).
pub fn default_resolver() -> std::sync::Arc<dyn MxResolver> {
    #[cfg(feature = "dns")]
    {
        std::sync::Arc::new(SystemMxResolver::new())
    }
    #[cfg(not(feature = "dns"))]
    {
        std::sync::Arc::new(NoopMxResolver)
    }
}

/// Parse `host:port` pairs, defaulting the port to 53.
pub fn parse_nameserver(raw: &str) -> Option<SocketAddr> {
    let raw = raw.trim();
    raw.parse::<SocketAddr>()
        .ok()
        .or_else(|| raw.parse::<std::net::IpAddr>().ok().map(|ip| SocketAddr::new(ip, 53)))
}
