// ── Hosts generation pass ──
//
// One linear pass: list endpoints, open the output, then for each endpoint
// filter, pick a hostname, look up its interfaces and stream the lines.
// Every lookup completes before the next endpoint is touched.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::directory::EndpointDirectory;
use crate::error::CoreError;
use crate::hosts_file::HostsWriter;
use crate::model::Endpoint;
use crate::resolve::{self, HostnameChoice, SkipReason};

/// An endpoint that contributed no entries, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEndpoint {
    pub id: String,
    pub service_name: String,
    pub reason: SkipReason,
}

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub endpoints_listed: usize,
    pub skipped: Vec<SkippedEndpoint>,
    /// Endpoints whose hostname came from the best-guess fallback.
    pub best_guesses: usize,
    pub entries_written: usize,
}

/// Drives one hosts-file generation pass against an [`EndpointDirectory`].
pub struct HostsGenerator<D> {
    directory: D,
}

impl<D: EndpointDirectory> HostsGenerator<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Run the pass.
    ///
    /// `open` is called only after the endpoint listing succeeds, so a
    /// failed listing leaves the output untouched. Any later error aborts
    /// the run; lines already written stay written.
    pub async fn run<W, F>(&self, open: F) -> Result<RunSummary, CoreError>
    where
        W: Write,
        F: FnOnce() -> Result<HostsWriter<W>, CoreError>,
    {
        let endpoints = self.directory.list_endpoints().await?;
        info!(count = endpoints.len(), "listed VPC endpoints");

        let mut writer = open()?;
        let mut summary = RunSummary {
            endpoints_listed: endpoints.len(),
            ..RunSummary::default()
        };

        for endpoint in &endpoints {
            let hostname = match Self::choose_hostname(endpoint) {
                Ok(choice) => {
                    if choice.is_best_guess() {
                        summary.best_guesses += 1;
                    }
                    choice.into_hostname()
                }
                Err(reason) => {
                    summary.skipped.push(SkippedEndpoint {
                        id: endpoint.id.clone(),
                        service_name: endpoint.service_name.clone(),
                        reason,
                    });
                    continue;
                }
            };

            if endpoint.network_interface_ids.is_empty() {
                debug!(endpoint = %endpoint.id, "endpoint has no network interfaces");
                continue;
            }

            let interfaces = self
                .directory
                .network_interfaces(&endpoint.network_interface_ids)
                .await?;

            for entry in resolve::host_entries(&hostname, &interfaces) {
                writer.write_entry(&entry)?;
                info!("{entry}");
            }
        }

        summary.entries_written = writer.entries_written();
        writer.finish()?;
        Ok(summary)
    }

    /// Filter one endpoint and pick its hostname, logging the outcome.
    fn choose_hostname(endpoint: &Endpoint) -> Result<HostnameChoice, SkipReason> {
        if let Some(reason) = resolve::skip_reason(endpoint) {
            info!(
                endpoint = %endpoint.id,
                service = %endpoint.service_name,
                "skipping endpoint: {reason}"
            );
            return Err(reason);
        }

        match resolve::select_hostname(&endpoint.dns_names) {
            Some(choice @ HostnameChoice::BestGuess(_)) => {
                warn!(
                    endpoint = %endpoint.id,
                    hostname = choice.hostname(),
                    "using best-guess DNS entry for service {}",
                    endpoint.service_name
                );
                Ok(choice)
            }
            Some(choice) => Ok(choice),
            None => {
                warn!(
                    endpoint = %endpoint.id,
                    dns_entries = endpoint.dns_names.len(),
                    "skipping endpoint for service {}: no usable DNS entry",
                    endpoint.service_name
                );
                Err(SkipReason::NoHostname)
            }
        }
    }
}
