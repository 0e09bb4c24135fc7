// ── API-to-domain type conversions ──
//
// Bridges validated `vpce_hosts_api` records into `model` types: wire
// strings become enums, address strings become `Ipv4Addr`.

use std::net::Ipv4Addr;

use vpce_hosts_api::{NetworkInterfaceRecord, VpcEndpointRecord};

use crate::error::CoreError;
use crate::model::{Endpoint, EndpointState, EndpointType, NetworkInterface};

impl From<VpcEndpointRecord> for Endpoint {
    fn from(record: VpcEndpointRecord) -> Self {
        Self {
            endpoint_type: EndpointType::from_raw(&record.endpoint_type),
            state: EndpointState::from_raw(&record.state),
            id: record.id,
            service_name: record.service_name,
            dns_names: record.dns_names,
            network_interface_ids: record.network_interface_ids,
        }
    }
}

impl TryFrom<NetworkInterfaceRecord> for NetworkInterface {
    type Error = CoreError;

    fn try_from(record: NetworkInterfaceRecord) -> Result<Self, Self::Error> {
        let private_ipv4_addresses = record
            .private_ipv4_addresses
            .iter()
            .map(|raw| {
                raw.parse::<Ipv4Addr>()
                    .map_err(|_| CoreError::InvalidResponse {
                        message: format!(
                            "network interface {} has a malformed private IPv4 address '{raw}'",
                            record.id
                        ),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: record.id,
            private_ipv4_addresses,
        })
    }
}
