// EC2 response records
//
// The SDK models every field as optional. These records carry only what the
// hosts generator reads, with required fields validated once at the boundary
// so downstream code never has to re-check presence.

use aws_sdk_ec2::types;

use crate::error::Error;

const DESCRIBE_VPC_ENDPOINTS: &str = "DescribeVpcEndpoints";
const DESCRIBE_NETWORK_INTERFACES: &str = "DescribeNetworkInterfaces";

/// A VPC endpoint as returned by `DescribeVpcEndpoints`.
///
/// `endpoint_type` and `state` are kept as the raw wire strings; the service
/// has used both `Available` and `available` spellings, so callers compare
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VpcEndpointRecord {
    pub id: String,
    pub service_name: String,
    pub endpoint_type: String,
    pub state: String,
    /// DNS names in response order. May be empty.
    pub dns_names: Vec<String>,
    /// Network interface IDs in response order. Empty for gateway endpoints.
    pub network_interface_ids: Vec<String>,
}

/// A network interface as returned by `DescribeNetworkInterfaces`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterfaceRecord {
    pub id: String,
    /// Private IPv4 addresses, unparsed, in response order.
    pub private_ipv4_addresses: Vec<String>,
}

fn required<'a>(
    value: Option<&'a str>,
    operation: &'static str,
    record: &'static str,
    field: &'static str,
) -> Result<&'a str, Error> {
    value.ok_or(Error::MissingField {
        operation,
        record,
        field,
    })
}

impl TryFrom<&types::VpcEndpoint> for VpcEndpointRecord {
    type Error = Error;

    fn try_from(raw: &types::VpcEndpoint) -> Result<Self, Self::Error> {
        let record = "VpcEndpoint";
        let op = DESCRIBE_VPC_ENDPOINTS;

        let id = required(raw.vpc_endpoint_id(), op, record, "VpcEndpointId")?;
        let service_name = required(raw.service_name(), op, record, "ServiceName")?;
        let endpoint_type = required(
            raw.vpc_endpoint_type().map(types::VpcEndpointType::as_str),
            op,
            record,
            "VpcEndpointType",
        )?;
        let state = required(raw.state().map(types::State::as_str), op, record, "State")?;

        let dns_names = raw
            .dns_entries()
            .iter()
            .map(|entry| required(entry.dns_name(), op, "DnsEntry", "DnsName").map(str::to_owned))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: id.to_owned(),
            service_name: service_name.to_owned(),
            endpoint_type: endpoint_type.to_owned(),
            state: state.to_owned(),
            dns_names,
            network_interface_ids: raw.network_interface_ids().to_vec(),
        })
    }
}

impl TryFrom<&types::NetworkInterface> for NetworkInterfaceRecord {
    type Error = Error;

    fn try_from(raw: &types::NetworkInterface) -> Result<Self, Self::Error> {
        let op = DESCRIBE_NETWORK_INTERFACES;
        let id = required(
            raw.network_interface_id(),
            op,
            "NetworkInterface",
            "NetworkInterfaceId",
        )?;

        let private_ipv4_addresses = raw
            .private_ip_addresses()
            .iter()
            .map(|addr| {
                required(
                    addr.private_ip_address(),
                    op,
                    "NetworkInterfacePrivateIpAddress",
                    "PrivateIpAddress",
                )
                .map(str::to_owned)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: id.to_owned(),
            private_ipv4_addresses,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn interface_endpoint() -> types::VpcEndpoint {
        types::VpcEndpoint::builder()
            .vpc_endpoint_id("vpce-0123")
            .service_name("com.amazonaws.us-east-1.s3")
            .vpc_endpoint_type(types::VpcEndpointType::Interface)
            .state(types::State::from("available"))
            .dns_entries(
                types::DnsEntry::builder()
                    .dns_name("vpce-0123-abcd.s3.us-east-1.vpce.amazonaws.com")
                    .build(),
            )
            .dns_entries(
                types::DnsEntry::builder()
                    .dns_name("bucket.s3.us-east-1.amazonaws.com")
                    .build(),
            )
            .network_interface_ids("eni-1")
            .network_interface_ids("eni-2")
            .build()
    }

    #[test]
    fn endpoint_record_keeps_order_and_raw_strings() {
        let record = VpcEndpointRecord::try_from(&interface_endpoint()).unwrap();
        assert_eq!(
            record,
            VpcEndpointRecord {
                id: "vpce-0123".into(),
                service_name: "com.amazonaws.us-east-1.s3".into(),
                endpoint_type: "Interface".into(),
                state: "available".into(),
                dns_names: vec![
                    "vpce-0123-abcd.s3.us-east-1.vpce.amazonaws.com".into(),
                    "bucket.s3.us-east-1.amazonaws.com".into(),
                ],
                network_interface_ids: vec!["eni-1".into(), "eni-2".into()],
            }
        );
    }

    #[test]
    fn endpoint_without_lists_has_empty_vectors() {
        let raw = types::VpcEndpoint::builder()
            .vpc_endpoint_id("vpce-gw")
            .service_name("com.amazonaws.us-east-1.dynamodb")
            .vpc_endpoint_type(types::VpcEndpointType::Gateway)
            .state(types::State::from("available"))
            .build();
        let record = VpcEndpointRecord::try_from(&raw).unwrap();
        assert!(record.dns_names.is_empty());
        assert!(record.network_interface_ids.is_empty());
    }

    #[test]
    fn endpoint_missing_service_name_is_rejected() {
        let raw = types::VpcEndpoint::builder()
            .vpc_endpoint_id("vpce-0123")
            .vpc_endpoint_type(types::VpcEndpointType::Interface)
            .state(types::State::from("available"))
            .build();
        let err = VpcEndpointRecord::try_from(&raw).unwrap_err();
        assert!(
            matches!(
                err,
                Error::MissingField {
                    record: "VpcEndpoint",
                    field: "ServiceName",
                    ..
                }
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn dns_entry_without_name_is_rejected() {
        let raw = types::VpcEndpoint::builder()
            .vpc_endpoint_id("vpce-0123")
            .service_name("com.amazonaws.us-east-1.sqs")
            .vpc_endpoint_type(types::VpcEndpointType::Interface)
            .state(types::State::from("available"))
            .dns_entries(types::DnsEntry::builder().hosted_zone_id("Z1").build())
            .build();
        let err = VpcEndpointRecord::try_from(&raw).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "DnsName", .. }));
    }

    #[test]
    fn interface_record_collects_private_addresses() {
        let raw = types::NetworkInterface::builder()
            .network_interface_id("eni-1")
            .private_ip_addresses(
                types::NetworkInterfacePrivateIpAddress::builder()
                    .private_ip_address("10.0.1.10")
                    .primary(true)
                    .build(),
            )
            .private_ip_addresses(
                types::NetworkInterfacePrivateIpAddress::builder()
                    .private_ip_address("10.0.1.11")
                    .build(),
            )
            .build();
        let record = NetworkInterfaceRecord::try_from(&raw).unwrap();
        assert_eq!(record.id, "eni-1");
        assert_eq!(record.private_ipv4_addresses, vec!["10.0.1.10", "10.0.1.11"]);
    }

    #[test]
    fn interface_missing_id_is_rejected() {
        let raw = types::NetworkInterface::builder().build();
        let err = NetworkInterfaceRecord::try_from(&raw).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                field: "NetworkInterfaceId",
                ..
            }
        ));
    }
}
