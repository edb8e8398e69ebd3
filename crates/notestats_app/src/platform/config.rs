use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use notestats_core::PluginSettings;
use notestats_logging::{notes_info, notes_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const SETTINGS_FILENAME: &str = "notestats.ron";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct SettingsFile {
    date_format: Option<String>,
}

impl From<SettingsFile> for PluginSettings {
    fn from(file: SettingsFile) -> Self {
        let defaults = PluginSettings::default();
        PluginSettings {
            date_format: file.date_format.unwrap_or(defaults.date_format),
        }
        .normalized()
    }
}

/// Loads settings from `dir`, falling back to defaults on any problem.
pub(crate) fn load_settings(dir: &Path) -> PluginSettings {
    match read_settings(&dir.join(SETTINGS_FILENAME)) {
        Ok(Some(settings)) => settings,
        Ok(None) => PluginSettings::default(),
        Err(err) => {
            notes_warn!("Using default settings: {}", err);
            PluginSettings::default()
        }
    }
}

fn read_settings(path: &Path) -> Result<Option<PluginSettings>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let file: SettingsFile = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    notes_info!("Loaded settings from {:?}", path);
    Ok(Some(file.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notestats_core::DEFAULT_DATE_FORMAT;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_settings(temp.path()), PluginSettings::default());
    }

    #[test]
    fn reads_date_format() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SETTINGS_FILENAME),
            r#"(date_format: Some("%d %B %Y"))"#,
        )
        .unwrap();

        assert_eq!(load_settings(temp.path()).date_format, "%d %B %Y");
    }

    #[test]
    fn omitted_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILENAME), "()").unwrap();

        assert_eq!(load_settings(temp.path()).date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn malformed_file_is_reported_and_ignored() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILENAME);
        fs::write(&path, "(date_format: ").unwrap();

        assert!(matches!(read_settings(&path), Err(ConfigError::Parse { .. })));
        assert_eq!(load_settings(temp.path()), PluginSettings::default());
    }
}
