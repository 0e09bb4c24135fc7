// vpce-hosts-core: Endpoint filtering, hostname selection and hosts-file
// generation on top of vpce-hosts-api.

pub mod convert;
pub mod directory;
pub mod error;
pub mod generator;
pub mod hosts_file;
pub mod model;
pub mod resolve;

// ── Primary re-exports ──────────────────────────────────────────────
pub use directory::EndpointDirectory;
pub use error::CoreError;
pub use generator::{HostsGenerator, RunSummary, SkippedEndpoint};
pub use hosts_file::{DEFAULT_HOSTS_PATH, FileMode, HostsWriter, hosts_path_or_default};
pub use model::{Endpoint, EndpointState, EndpointType, HostEntry, NetworkInterface};
pub use resolve::{HostnameChoice, SkipReason};

// Re-export the client so consumers need only this crate.
pub use vpce_hosts_api::{ClientOptions, Ec2Client};
