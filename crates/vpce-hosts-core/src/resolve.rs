//! Endpoint filtering and hostname selection.
//!
//! Everything here is pure: no I/O, no logging. The generator decides what
//! to report; these functions only decide.

use std::fmt;

use crate::model::{Endpoint, EndpointState, HostEntry, NetworkInterface};

/// Service-name component that marks endpoints EC2 itself relies on.
pub const EC2_SERVICE_TOKEN: &str = "ec2";

/// DNS names with this prefix are endpoint-specific, not service names.
pub const RESERVED_DNS_PREFIX: &str = "vpce";

/// Components with this prefix are dropped by the best-guess fallback.
pub const RESERVED_COMPONENT_PREFIX: &str = "vpc";

/// Why an endpoint contributes no hosts entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The service name contains the `ec2` component.
    Ec2Service,
    /// Gateway endpoints are route-table based and have no interfaces.
    Gateway,
    /// The endpoint is not in the `available` state.
    NotAvailable(EndpointState),
    /// No DNS entry survives selection and the fallback yields nothing.
    NoHostname,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ec2Service => f.write_str("EC2 service endpoint"),
            Self::Gateway => f.write_str("gateway endpoint"),
            Self::NotAvailable(state) => write!(f, "state is '{state}'"),
            Self::NoHostname => f.write_str("no usable DNS entry"),
        }
    }
}

/// Apply the endpoint filters in order and return the first that matches.
pub fn skip_reason(endpoint: &Endpoint) -> Option<SkipReason> {
    if endpoint.service_has_component(EC2_SERVICE_TOKEN) {
        return Some(SkipReason::Ec2Service);
    }
    if endpoint.endpoint_type.is_gateway() {
        return Some(SkipReason::Gateway);
    }
    if !endpoint.state.is_available() {
        return Some(SkipReason::NotAvailable(endpoint.state.clone()));
    }
    None
}

/// Outcome of hostname selection for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostnameChoice {
    /// A DNS entry without the reserved prefix or a wildcard.
    Preferred(String),
    /// Derived from the first DNS entry by [`best_guess`].
    BestGuess(String),
}

impl HostnameChoice {
    pub fn hostname(&self) -> &str {
        match self {
            Self::Preferred(name) | Self::BestGuess(name) => name,
        }
    }

    pub fn into_hostname(self) -> String {
        match self {
            Self::Preferred(name) | Self::BestGuess(name) => name,
        }
    }

    pub fn is_best_guess(&self) -> bool {
        matches!(self, Self::BestGuess(_))
    }
}

/// Whether a DNS name can be used as-is.
pub fn is_preferred_dns_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with(RESERVED_DNS_PREFIX) && !name.contains('*')
}

/// Pick the hostname for an endpoint.
///
/// The first preferred name wins. Otherwise the first DNS name goes through
/// [`best_guess`]. Returns `None` when there are no DNS names at all or the
/// best guess is empty.
pub fn select_hostname(dns_names: &[String]) -> Option<HostnameChoice> {
    if let Some(name) = dns_names.iter().find(|name| is_preferred_dns_name(name)) {
        return Some(HostnameChoice::Preferred(name.clone()));
    }
    dns_names
        .first()
        .and_then(|first| best_guess(first))
        .map(HostnameChoice::BestGuess)
}

/// Drop every component that starts with `vpc`, keeping the rest in order.
pub fn strip_reserved_components<'a, I>(components: I) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    components
        .into_iter()
        .filter(|component| !component.starts_with(RESERVED_COMPONENT_PREFIX))
}

/// Best-guess hostname: strip reserved components from a DNS name.
///
/// `None` when nothing is left.
pub fn best_guess(dns_name: &str) -> Option<String> {
    let kept: Vec<&str> = strip_reserved_components(dns_name.split('.')).collect();
    if kept.iter().all(|component| component.is_empty()) {
        return None;
    }
    Some(kept.join("."))
}

/// One entry per (interface, private IPv4 address), in response order.
pub fn host_entries<'a>(
    hostname: &'a str,
    interfaces: &'a [NetworkInterface],
) -> impl Iterator<Item = HostEntry> + 'a {
    interfaces.iter().flat_map(move |eni| {
        eni.private_ipv4_addresses.iter().map(move |ip| HostEntry {
            ip: *ip,
            hostname: hostname.to_owned(),
        })
    })
}
