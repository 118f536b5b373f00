use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use reader_core::FeedSettings;
use reader_engine::{ItemId, ScanSettings, SourceSettings};
use reader_logging::reader_info;
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_CONFIG_FILENAME: &str = "reader.ron";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogDestination {
    /// Write to ./reader.log in current directory.
    #[default]
    File,
    /// Write to the terminal (stderr).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ReaderConfig {
    pub base_url: String,
    pub initial_stories: usize,
    pub batch_size: usize,
    pub floor_id: ItemId,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub log_destination: LogDestination,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        let source = SourceSettings::default();
        let feed = FeedSettings::default();
        Self {
            base_url: source.base_url,
            initial_stories: feed.initial_stories,
            batch_size: feed.batch_size,
            floor_id: ScanSettings::default().floor_id,
            connect_timeout_secs: source.connect_timeout.as_secs(),
            request_timeout_secs: source.request_timeout.as_secs(),
            max_bytes: source.max_bytes,
            log_destination: LogDestination::default(),
        }
    }
}

impl ReaderConfig {
    pub fn source_settings(&self) -> SourceSettings {
        SourceSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
            ..SourceSettings::default()
        }
    }

    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            floor_id: self.floor_id,
        }
    }

    pub fn feed_settings(&self) -> FeedSettings {
        FeedSettings {
            initial_stories: self.initial_stories,
            batch_size: self.batch_size,
        }
    }
}

/// Config path from the first CLI argument, if any.
pub(crate) fn config_path_from_args(mut args: impl Iterator<Item = String>) -> Option<PathBuf> {
    args.nth(1).map(PathBuf::from)
}

/// Load the config at `explicit`, or `reader.ron` in the working directory.
/// Only the implicit default file may be missing.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<ReaderConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            if !path.exists() {
                return Ok(ReaderConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: ReaderConfig = ron::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    reader_info!("Loaded config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reader.ron");
        fs::write(&path, "(batch_size: 10, floor_id: 5, log_destination: Both)").unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.batch_size, 10);
        assert_eq!(config.scan_settings().floor_id, 5);
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.initial_stories, 30);
        assert_eq!(config.base_url, reader_engine::HACKER_NEWS_BASE_URL);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.ron");

        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reader.ron");
        fs::write(&path, "(batch_size: \"many\")").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn settings_round_trip_durations() {
        let config = ReaderConfig {
            request_timeout_secs: 3,
            ..ReaderConfig::default()
        };
        assert_eq!(
            config.source_settings().request_timeout,
            Duration::from_secs(3)
        );
    }

    #[test]
    fn first_argument_is_config_path() {
        let args = ["hn_reader", "custom.ron"].map(String::from).into_iter();
        assert_eq!(
            config_path_from_args(args),
            Some(PathBuf::from("custom.ron"))
        );
        assert_eq!(config_path_from_args(["hn_reader".to_string()].into_iter()), None);
    }
}
