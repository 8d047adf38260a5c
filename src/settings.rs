//! Code for loading program settings.
use crate::input::read_toml;
use crate::log::DEFAULT_LOG_LEVEL;
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Default log level for program
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Program settings for a model run
#[derive(Debug, Deserialize, PartialEq)]
pub struct Settings {
    /// The region whose cost data applies to this model
    pub region_id: String,
    /// The default program log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Settings {
    /// Read the settings file from the model directory.
    ///
    /// # Arguments
    ///
    /// * `model_dir` - Folder containing model configuration files
    ///
    /// # Returns
    ///
    /// The program settings as a `Settings` struct or an error if the file is missing or
    /// invalid
    pub fn from_path(model_dir: &Path) -> Result<Settings> {
        read_toml(&model_dir.join(SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_settings_from_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(SETTINGS_FILE_NAME);

        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "region_id = \"CH\"").unwrap();
        }

        assert_eq!(
            Settings::from_path(dir.path()).unwrap(),
            Settings {
                region_id: "CH".to_string(),
                log_level: "info".to_string(),
            }
        );
    }

    #[test]
    fn test_settings_from_path_log_level() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(SETTINGS_FILE_NAME);

        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "region_id = \"SG\"\nlog_level = \"warn\"").unwrap();
        }

        assert_eq!(
            Settings::from_path(dir.path()).unwrap(),
            Settings {
                region_id: "SG".to_string(),
                log_level: "warn".to_string(),
            }
        );
    }

    #[test]
    fn test_settings_from_path_no_file() {
        let dir = tempdir().unwrap();
        assert!(Settings::from_path(dir.path()).is_err());
    }

    #[test]
    fn test_settings_from_path_missing_region() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(SETTINGS_FILE_NAME);

        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "log_level = \"warn\"").unwrap();
        }

        assert!(Settings::from_path(dir.path()).is_err());
    }
}
