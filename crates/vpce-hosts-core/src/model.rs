// ── Endpoint domain types ──

use std::fmt;
use std::net::Ipv4Addr;

/// Canonical VPC endpoint type, parsed case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointType {
    Interface,
    Gateway,
    GatewayLoadBalancer,
    /// Anything EC2 reports that this tool does not know about.
    Other(String),
}

impl EndpointType {
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "interface" => Self::Interface,
            "gateway" => Self::Gateway,
            "gatewayloadbalancer" => Self::GatewayLoadBalancer,
            _ => Self::Other(raw.to_owned()),
        }
    }

    pub fn is_gateway(&self) -> bool {
        matches!(self, Self::Gateway)
    }
}

/// VPC endpoint lifecycle state, parsed case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointState {
    PendingAcceptance,
    Pending,
    Available,
    Deleting,
    Deleted,
    Rejected,
    Failed,
    Expired,
    Partial,
    Other(String),
}

impl EndpointState {
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "pendingacceptance" => Self::PendingAcceptance,
            "pending" => Self::Pending,
            "available" => Self::Available,
            "deleting" => Self::Deleting,
            "deleted" => Self::Deleted,
            "rejected" => Self::Rejected,
            "failed" => Self::Failed,
            "expired" => Self::Expired,
            "partial" => Self::Partial,
            _ => Self::Other(raw.to_owned()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for EndpointState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PendingAcceptance => "pendingAcceptance",
            Self::Pending => "pending",
            Self::Available => "available",
            Self::Deleting => "deleting",
            Self::Deleted => "deleted",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
            Self::Expired => "expired",
            Self::Partial => "partial",
            Self::Other(raw) => raw,
        };
        f.write_str(s)
    }
}

/// A VPC endpoint, fetched fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub id: String,
    pub service_name: String,
    pub endpoint_type: EndpointType,
    pub state: EndpointState,
    /// DNS names in the order EC2 reported them.
    pub dns_names: Vec<String>,
    pub network_interface_ids: Vec<String>,
}

impl Endpoint {
    /// Whether the service name's dot-separated components contain `token`
    /// as a whole component (`ec2` matches `com.amazonaws.us-east-1.ec2`
    /// but not `...ec2messages`).
    pub fn service_has_component(&self, token: &str) -> bool {
        self.service_name.split('.').any(|part| part == token)
    }
}

/// A network interface attached to an interface endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub id: String,
    pub private_ipv4_addresses: Vec<Ipv4Addr>,
}

/// One `<ip> <hostname>` line of the hosts file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub ip: Ipv4Addr,
    pub hostname: String,
}

impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ip, self.hostname)
    }
}
