//! CLI configuration: thin layer over `vpce_hosts_config`.
//!
//! Applies the command-line flags on top of the file/environment layers and
//! fills whatever is still unset from the built-in defaults.

use std::path::PathBuf;

use vpce_hosts_core::{ClientOptions, FileMode, hosts_path_or_default};

use crate::cli::{Cli, FileModeArg};
use crate::error::CliError;

pub use vpce_hosts_config::{AwsSettings, Config, load_config, render_config};

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output: PathBuf,
    pub file_mode: FileMode,
    pub client: ClientOptions,
}

impl From<FileModeArg> for FileMode {
    fn from(arg: FileModeArg) -> Self {
        match arg {
            FileModeArg::Append => Self::Append,
            FileModeArg::New => Self::New,
        }
    }
}

/// Load the config layers and apply the CLI overrides.
pub fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    let cfg = load_config(cli.global.config.as_deref())?;
    Ok(resolve(cli, cfg))
}

/// Merge CLI flags (highest priority) over a loaded [`Config`].
pub fn resolve(cli: &Cli, cfg: Config) -> Settings {
    let Config {
        output,
        file_mode,
        aws,
    } = cfg;

    let output = hosts_path_or_default(cli.filename.clone().or(output));
    let file_mode = cli
        .file_mode
        .map(FileMode::from)
        .or(file_mode)
        .unwrap_or_default();

    let client = ClientOptions {
        region: cli.aws.region.clone().or(aws.region),
        profile: cli.aws.profile.clone().or(aws.profile),
        endpoint_url: cli.aws.endpoint_url.clone().or(aws.endpoint_url),
    };

    Settings {
        output,
        file_mode,
        client,
    }
}

/// Render resolved settings in config-file form.
pub fn render_settings(settings: &Settings) -> Result<String, CliError> {
    let cfg = Config {
        output: Some(settings.output.clone()),
        file_mode: Some(settings.file_mode),
        aws: AwsSettings {
            region: settings.client.region.clone(),
            profile: settings.client.profile.clone(),
            endpoint_url: settings.client.endpoint_url.clone(),
        },
    };
    Ok(render_config(&cfg)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vpce-hosts").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = resolve(&parse(&[]), Config::default());
        assert_eq!(settings.output, PathBuf::from("/etc/hosts"));
        assert_eq!(settings.file_mode, FileMode::Append);
        assert_eq!(settings.client, ClientOptions::default());
    }

    #[test]
    fn config_values_fill_unset_flags() {
        let cfg = Config {
            output: Some(PathBuf::from("/tmp/hosts")),
            file_mode: Some(FileMode::New),
            aws: AwsSettings {
                region: Some("eu-west-1".into()),
                profile: Some("ops".into()),
                endpoint_url: None,
            },
        };
        let settings = resolve(&parse(&[]), cfg);
        assert_eq!(settings.output, PathBuf::from("/tmp/hosts"));
        assert_eq!(settings.file_mode, FileMode::New);
        assert_eq!(settings.client.region.as_deref(), Some("eu-west-1"));
        assert_eq!(settings.client.profile.as_deref(), Some("ops"));
    }

    #[test]
    fn flags_override_config() {
        let cfg = Config {
            output: Some(PathBuf::from("/tmp/hosts")),
            file_mode: Some(FileMode::New),
            aws: AwsSettings {
                region: Some("eu-west-1".into()),
                ..AwsSettings::default()
            },
        };
        let cli = parse(&["/srv/hosts", "-m", "append", "--region", "us-east-2"]);
        let settings = resolve(&cli, cfg);
        assert_eq!(settings.output, PathBuf::from("/srv/hosts"));
        assert_eq!(settings.file_mode, FileMode::Append);
        assert_eq!(settings.client.region.as_deref(), Some("us-east-2"));
    }

    #[test]
    fn rendered_settings_round_trip_through_config() {
        let settings = resolve(&parse(&["/tmp/h", "--file-mode", "new"]), Config::default());
        let rendered = render_settings(&settings).unwrap();
        let back: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(back.output, Some(PathBuf::from("/tmp/h")));
        assert_eq!(back.file_mode, Some(FileMode::New));
    }
}
