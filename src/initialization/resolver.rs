//! DNS resolver initialization.

use std::net::IpAddr;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;

use crate::config::{DNS_ATTEMPTS, DNS_PORT};
use crate::dns::HickoryTxtResolver;
use crate::error_handling::InitializationError;

/// Initializes the TXT resolver over a fixed, ordered list of name servers.
///
/// Name servers are queried over plain UDP (falling back to TCP for truncated
/// answers) on port 53. An empty list falls back to hickory's default
/// upstream configuration.
///
/// # Arguments
///
/// * `name_servers` - Resolver addresses, tried in order
/// * `timeout` - Per-attempt timeout inside the resolver
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if `timeout` is zero.
pub fn init_resolver(
    name_servers: &[IpAddr],
    timeout: Duration,
) -> Result<HickoryTxtResolver, InitializationError> {
    if timeout.is_zero() {
        return Err(InitializationError::DnsResolverError(
            "DNS timeout must be greater than zero".to_string(),
        ));
    }

    let config = if name_servers.is_empty() {
        log::warn!("No DNS resolvers configured, using hickory defaults");
        ResolverConfig::default()
    } else {
        ResolverConfig::from_parts(
            None,
            vec![],
            NameServerConfigGroup::from_ips_clear(name_servers, DNS_PORT, true),
        )
    };

    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = DNS_ATTEMPTS;
    // Query names are always fully qualified; never append search domains
    opts.ndots = 0;

    let resolver = TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
        .with_options(opts)
        .build();

    log::debug!(
        "DNS resolver ready ({} name server(s), {}ms timeout)",
        name_servers.len(),
        timeout.as_millis()
    );
    Ok(HickoryTxtResolver::new(resolver))
}
