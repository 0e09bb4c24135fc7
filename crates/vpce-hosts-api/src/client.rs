// EC2 client
//
// Wraps `aws_sdk_ec2::Client` with the two read-only calls the hosts
// generator needs. Every response is validated into the records from
// `models` before the caller sees it.

use aws_config::BehaviorVersion;
use aws_sdk_ec2::config::Region;
use tracing::{debug, trace};

use crate::error::Error;
use crate::models::{NetworkInterfaceRecord, VpcEndpointRecord};

/// Overrides applied on top of the standard AWS provider chain.
///
/// Anything left as `None` is resolved the usual way (environment,
/// shared config files, instance metadata).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    pub region: Option<String>,
    pub profile: Option<String>,
    /// Custom EC2 endpoint, e.g. a private API endpoint or a local emulator.
    pub endpoint_url: Option<String>,
}

/// Read-only EC2 client for VPC endpoint discovery.
#[derive(Debug, Clone)]
pub struct Ec2Client {
    inner: aws_sdk_ec2::Client,
}

impl Ec2Client {
    /// Resolve credentials and region through the AWS provider chain and
    /// build a client.
    ///
    /// Fails with [`Error::MissingRegion`] when no region can be resolved.
    pub async fn connect(options: &ClientOptions) -> Result<Self, Error> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(ref region) = options.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(ref profile) = options.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(ref url) = options.endpoint_url {
            loader = loader.endpoint_url(url);
        }

        let sdk_config = loader.load().await;
        let Some(region) = sdk_config.region() else {
            return Err(Error::MissingRegion);
        };
        debug!(%region, endpoint_url = ?options.endpoint_url, "EC2 client configured");

        Ok(Self {
            inner: aws_sdk_ec2::Client::new(&sdk_config),
        })
    }

    /// Build a client from an explicit SDK config (tests, custom stacks).
    pub fn from_conf(config: aws_sdk_ec2::Config) -> Self {
        Self {
            inner: aws_sdk_ec2::Client::from_conf(config),
        }
    }

    /// The region this client sends requests to.
    pub fn region(&self) -> Option<&str> {
        self.inner.config().region().map(|region| region.as_ref())
    }

    /// List every VPC endpoint in the account and region, following
    /// `NextToken` pagination to the end.
    pub async fn describe_vpc_endpoints(&self) -> Result<Vec<VpcEndpointRecord>, Error> {
        const OPERATION: &str = "DescribeVpcEndpoints";

        let mut pages = self.inner.describe_vpc_endpoints().into_paginator().send();
        let mut endpoints = Vec::new();
        let mut page_count = 0_usize;

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| Error::from_sdk(OPERATION, &e))?;
            page_count += 1;
            trace!(page = page_count, items = page.vpc_endpoints().len(), "endpoint page");
            for raw in page.vpc_endpoints() {
                endpoints.push(VpcEndpointRecord::try_from(raw)?);
            }
        }

        debug!(count = endpoints.len(), pages = page_count, "described VPC endpoints");
        Ok(endpoints)
    }

    /// Describe the given network interfaces.
    ///
    /// An empty `ids` slice returns an empty list without calling EC2: an
    /// unfiltered `DescribeNetworkInterfaces` would return every interface
    /// in the region.
    pub async fn describe_network_interfaces(
        &self,
        ids: &[String],
    ) -> Result<Vec<NetworkInterfaceRecord>, Error> {
        const OPERATION: &str = "DescribeNetworkInterfaces";

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let output = self
            .inner
            .describe_network_interfaces()
            .set_network_interface_ids(Some(ids.to_vec()))
            .send()
            .await
            .map_err(|e| Error::from_sdk(OPERATION, &e))?;

        let interfaces = output
            .network_interfaces()
            .iter()
            .map(NetworkInterfaceRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(requested = ids.len(), returned = interfaces.len(), "described network interfaces");
        Ok(interfaces)
    }
}
