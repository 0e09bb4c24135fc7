mod cli;
mod config;
mod error;
mod output;

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vpce_hosts_core::{Ec2Client, HostsGenerator, HostsWriter};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose, cli.global.quiet);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8, quiet: bool) {
    let filter = match (quiet, verbosity) {
        (true, _) => "warn",
        (false, 0) => "warn,vpce_hosts=info,vpce_hosts_core=info",
        (false, 1) => "warn,vpce_hosts=debug,vpce_hosts_core=debug,vpce_hosts_api=debug",
        (false, 2) => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = config::load_settings(&cli)?;

    if cli.global.print_config {
        output::print_output(&config::render_settings(&settings)?, false);
        return Ok(());
    }

    let client = Ec2Client::connect(&settings.client)
        .await
        .map_err(vpce_hosts_core::CoreError::from)?;
    tracing::debug!(region = ?client.region(), "connected");

    let generator = HostsGenerator::new(client);
    let summary = generator
        .run(|| HostsWriter::open(&settings.output, settings.file_mode))
        .await?;

    output::print_output(
        &output::render_summary(&summary, &settings.output),
        cli.global.quiet,
    );
    Ok(())
}
