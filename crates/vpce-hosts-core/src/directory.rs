//! Source of endpoint and network-interface data.

use std::future::Future;

use vpce_hosts_api::Ec2Client;

use crate::error::CoreError;
use crate::model::{Endpoint, NetworkInterface};

/// Read-only view of the VPC endpoints in one account and region.
///
/// [`Ec2Client`] is the production implementation; tests supply in-memory
/// fakes.
pub trait EndpointDirectory {
    /// Every VPC endpoint, in listing order.
    fn list_endpoints(&self) -> impl Future<Output = Result<Vec<Endpoint>, CoreError>>;

    /// Details for the given network interfaces. An empty `ids` slice yields
    /// an empty list.
    fn network_interfaces(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<NetworkInterface>, CoreError>>;
}

impl EndpointDirectory for Ec2Client {
    async fn list_endpoints(&self) -> Result<Vec<Endpoint>, CoreError> {
        let records = self.describe_vpc_endpoints().await?;
        Ok(records.into_iter().map(Endpoint::from).collect())
    }

    async fn network_interfaces(&self, ids: &[String]) -> Result<Vec<NetworkInterface>, CoreError> {
        self.describe_network_interfaces(ids)
            .await?
            .into_iter()
            .map(NetworkInterface::try_from)
            .collect()
    }
}
