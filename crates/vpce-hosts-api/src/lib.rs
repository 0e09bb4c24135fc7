// vpce-hosts-api: Read-only EC2 client for VPC endpoint discovery

pub mod client;
pub mod error;
pub mod models;

pub use client::{ClientOptions, Ec2Client};
pub use error::Error;
pub use models::{NetworkInterfaceRecord, VpcEndpointRecord};
