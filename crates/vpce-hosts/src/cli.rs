//! Clap derive structures for the `vpce-hosts` CLI.
//!
//! Only depends on clap: `build.rs` compiles this file on its own to
//! render the man page.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// vpce-hosts -- pin AWS VPC endpoint hostnames in a hosts file
#[derive(Debug, Parser)]
#[command(
    name = "vpce-hosts",
    version,
    about = "Write hosts-file entries for the VPC endpoints in an AWS account",
    long_about = "Lists the VPC endpoints in the current account and region, picks a \
        hostname for each\ninterface endpoint and writes one `<ip> <hostname>` line per \
        private IPv4 address\nof its network interfaces.\n\n\
        EC2-owned, gateway and non-available endpoints are skipped."
)]
pub struct Cli {
    /// Hosts file to write [default: /etc/hosts]
    #[arg(value_name = "FILENAME")]
    pub filename: Option<PathBuf>,

    /// How to open the hosts file [default: append]
    #[arg(long, short = 'm', value_name = "MODE")]
    pub file_mode: Option<FileModeArg>,

    #[command(flatten)]
    pub aws: AwsOpts,

    #[command(flatten)]
    pub global: GlobalOpts,
}

// ── AWS Options ──────────────────────────────────────────────────────

#[derive(Debug, clap::Args)]
#[command(next_help_heading = "AWS")]
pub struct AwsOpts {
    /// AWS region (overrides the provider chain)
    #[arg(long)]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long)]
    pub profile: Option<String>,

    /// Custom EC2 endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, clap::Args)]
pub struct GlobalOpts {
    /// Config file to load instead of the default location
    #[arg(long, env = "VPCE_HOSTS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report warnings and errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileModeArg {
    /// Append to the existing file
    Append,
    /// Truncate the file and start over
    New,
}
