//! Hosts file output.
//!
//! [`HostsWriter`] owns the open handle for the whole run. Lines are written
//! as soon as they are produced; the handle is released when the writer is
//! dropped, whether the run finished or bailed out with an error.

use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CoreError;
use crate::model::HostEntry;

/// Default hosts file location.
pub const DEFAULT_HOSTS_PATH: &str = "/etc/hosts";

/// How the hosts file is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileMode {
    /// Append to the existing file, creating it if missing.
    #[default]
    Append,
    /// Truncate the file (or create it) and start from scratch.
    New,
}

impl FileMode {
    fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            Self::Append => options.append(true).create(true),
            Self::New => options.write(true).truncate(true).create(true),
        };
        options
    }
}

/// Streams [`HostEntry`] lines into a hosts file (or any writer).
#[derive(Debug)]
pub struct HostsWriter<W: Write> {
    inner: W,
    target: String,
    lines: usize,
}

impl HostsWriter<LineWriter<File>> {
    /// Open `path` in `mode` and write the leading blank separator line.
    pub fn open(path: &Path, mode: FileMode) -> Result<Self, CoreError> {
        info!(path = %path.display(), ?mode, "opening hosts file");
        let file = mode.open_options().open(path).map_err(|source| CoreError::HostsFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::with_target(LineWriter::new(file), path)
    }
}

impl<W: Write> HostsWriter<W> {
    /// Wrap an arbitrary writer, writing the leading blank line.
    pub fn new(inner: W) -> Result<Self, CoreError> {
        Self::with_target(inner, Path::new("<writer>"))
    }

    fn with_target(inner: W, target: &Path) -> Result<Self, CoreError> {
        let mut writer = Self {
            inner,
            target: target.display().to_string(),
            lines: 0,
        };
        writer.write_raw(b"\n")?;
        Ok(writer)
    }

    /// Write one `<ip> <hostname>` line.
    pub fn write_entry(&mut self, entry: &HostEntry) -> Result<(), CoreError> {
        let line = format!("{entry}\n");
        self.write_raw(line.as_bytes())?;
        self.lines += 1;
        Ok(())
    }

    /// Number of entries written so far (the separator line is not counted).
    pub fn entries_written(&self) -> usize {
        self.lines
    }

    /// Flush and hand back the inner writer.
    pub fn finish(mut self) -> Result<W, CoreError> {
        self.inner.flush().map_err(|source| self.io_error(source))?;
        debug!(target_file = %self.target, lines = self.lines, "hosts file flushed");
        Ok(self.inner)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), CoreError> {
        self.inner
            .write_all(bytes)
            .map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> CoreError {
        CoreError::HostsFile {
            path: self.target.clone(),
            source,
        }
    }
}

/// Resolve the output path, falling back to [`DEFAULT_HOSTS_PATH`].
pub fn hosts_path_or_default(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from(DEFAULT_HOSTS_PATH))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::net::Ipv4Addr;

    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(last_octet: u8, hostname: &str) -> HostEntry {
        HostEntry {
            ip: Ipv4Addr::new(10, 0, 0, last_octet),
            hostname: hostname.into(),
        }
    }

    #[test]
    fn writer_starts_with_blank_line() {
        let mut writer = HostsWriter::new(Vec::new()).unwrap();
        writer.write_entry(&entry(1, "sqs.us-east-1.amazonaws.com")).unwrap();
        writer.write_entry(&entry(2, "sqs.us-east-1.amazonaws.com")).unwrap();
        assert_eq!(writer.entries_written(), 2);

        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "\n10.0.0.1 sqs.us-east-1.amazonaws.com\n10.0.0.2 sqs.us-east-1.amazonaws.com\n"
        );
    }

    #[test]
    fn append_mode_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts");
        std::fs::write(&path, "127.0.0.1 localhost\n").unwrap();

        let mut writer = HostsWriter::open(&path, FileMode::Append).unwrap();
        writer.write_entry(&entry(7, "sns.us-east-1.amazonaws.com")).unwrap();
        writer.finish().unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "127.0.0.1 localhost\n\n10.0.0.7 sns.us-east-1.amazonaws.com\n"
        );
    }

    #[test]
    fn new_mode_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts");
        std::fs::write(&path, "127.0.0.1 localhost\n").unwrap();

        let mut writer = HostsWriter::open(&path, FileMode::New).unwrap();
        writer.write_entry(&entry(7, "sns.us-east-1.amazonaws.com")).unwrap();
        writer.finish().unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "\n10.0.0.7 sns.us-east-1.amazonaws.com\n"
        );
    }

    #[test]
    fn lines_are_on_disk_before_finish() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts");

        let mut writer = HostsWriter::open(&path, FileMode::New).unwrap();
        writer.write_entry(&entry(3, "kms.us-east-1.amazonaws.com")).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "\n10.0.0.3 kms.us-east-1.amazonaws.com\n"
        );
        drop(writer);
    }

    #[test]
    fn open_failure_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("hosts");

        let err = HostsWriter::open(&path, FileMode::Append).unwrap_err();
        match err {
            CoreError::HostsFile { path: reported, source } => {
                assert_eq!(reported, path.display().to_string());
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected HostsFile error, got {other:?}"),
        }
    }

    #[test]
    fn default_path_is_etc_hosts() {
        assert_eq!(hosts_path_or_default(None), PathBuf::from("/etc/hosts"));
        assert_eq!(
            hosts_path_or_default(Some(PathBuf::from("/tmp/hosts"))),
            PathBuf::from("/tmp/hosts")
        );
    }
}
