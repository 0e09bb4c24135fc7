//! Shared configuration for vpce-hosts.
//!
//! A TOML file plus `VPCE_HOSTS_*` environment variables, layered with
//! figment. Every key is optional; the binary applies its CLI flags on top
//! and falls back to built-in defaults for anything still unset.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use vpce_hosts_core::{ClientOptions, FileMode};

/// Prefix for environment overrides. Nested keys use `__`, e.g.
/// `VPCE_HOSTS_AWS__REGION`.
pub const ENV_PREFIX: &str = "VPCE_HOSTS_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Hosts file to write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// `append` or `new`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_mode: Option<FileMode>,

    /// AWS client overrides.
    #[serde(default)]
    pub aws: AwsSettings,
}

/// Overrides for the AWS provider chain.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AwsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Custom EC2 endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl From<AwsSettings> for ClientOptions {
    fn from(settings: AwsSettings) -> Self {
        Self {
            region: settings.region,
            profile: settings.profile,
            endpoint_url: settings.endpoint_url,
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "vpce-hosts", "vpce-hosts").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("vpce-hosts");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Defaults, then the TOML file at `path`, then environment overrides.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load configuration.
///
/// With an explicit `path` the file must exist. Without one, the default
/// location is used and a missing file just means "no overrides".
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(explicit) if !explicit.exists() => {
            return Err(ConfigError::NotFound(explicit.to_path_buf()));
        }
        Some(explicit) => explicit.to_path_buf(),
        None => config_path(),
    };

    let config: Config = figment(&path).extract()?;
    Ok(config)
}

/// Render a config as pretty TOML.
pub fn render_config(cfg: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(cfg)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
output = "/tmp/hosts"
file_mode = "new"

[aws]
region = "eu-west-1"
profile = "provisioning"
"#,
        )
        .unwrap();

        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.output, Some(PathBuf::from("/tmp/hosts")));
        assert_eq!(cfg.file_mode, Some(FileMode::New));
        assert_eq!(cfg.aws.region.as_deref(), Some("eu-west-1"));
        assert_eq!(cfg.aws.profile.as_deref(), Some("provisioning"));
        assert_eq!(cfg.aws.endpoint_url, None);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn invalid_file_mode_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "file_mode = \"overwrite\"\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
    }

    #[test]
    fn rendered_config_contains_set_keys() {
        let cfg = Config {
            output: Some(PathBuf::from("/etc/hosts")),
            file_mode: Some(FileMode::Append),
            aws: AwsSettings {
                region: Some("us-east-1".into()),
                ..AwsSettings::default()
            },
        };
        let rendered = render_config(&cfg).unwrap();
        assert!(rendered.contains("output = \"/etc/hosts\""), "{rendered}");
        assert!(rendered.contains("file_mode = \"append\""), "{rendered}");
        assert!(rendered.contains("region = \"us-east-1\""), "{rendered}");
        assert!(!rendered.contains("profile"), "{rendered}");
    }

    #[test]
    fn aws_settings_become_client_options() {
        let options = ClientOptions::from(AwsSettings {
            region: Some("us-west-2".into()),
            profile: None,
            endpoint_url: Some("http://localhost:4566".into()),
        });
        assert_eq!(options.region.as_deref(), Some("us-west-2"));
        assert_eq!(options.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }
}
