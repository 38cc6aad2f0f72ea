//! Environment-driven configuration.
use crate::core::constants::{APP_NAME, SAVE_FILE_NAME};
use crate::error::{SaveError, SaveResult};
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

pub const SAVE_DIR_VAR: &str = "INVESTMENT_SIM_SAVE_DIR";
pub const SAVE_FILE_VAR: &str = "INVESTMENT_SIM_SAVE_FILE";

/// Where the game keeps its save file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Overrides the platform config directory when set.
    pub save_dir: Option<PathBuf>,
    pub save_file: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_dir: None,
            save_file: SAVE_FILE_NAME.to_string(),
        }
    }
}

impl GameConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `INVESTMENT_SIM_SAVE_DIR` - Save directory (default: platform config dir)
    /// - `INVESTMENT_SIM_SAVE_FILE` - Save file name (default: save.json)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from any key lookup. Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(dir) = read(SAVE_DIR_VAR) {
            config.save_dir = Some(PathBuf::from(dir));
        }
        if let Some(file) = read(SAVE_FILE_VAR) {
            config.save_file = file;
        }

        config
    }

    /// Full path of the save file.
    pub fn save_path(&self) -> SaveResult<PathBuf> {
        let dir = match &self.save_dir {
            Some(dir) => dir.clone(),
            None => ProjectDirs::from("", "", APP_NAME)
                .ok_or(SaveError::NoSaveDirectory)?
                .config_dir()
                .to_path_buf(),
        };
        Ok(dir.join(&self.save_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.save_file, "save.json");
    }

    #[test]
    fn test_variables_override_defaults() {
        let config = GameConfig::from_lookup(lookup(&[
            (SAVE_DIR_VAR, "/tmp/invest"),
            (SAVE_FILE_VAR, "slot2.json"),
        ]));
        assert_eq!(config.save_dir, Some(PathBuf::from("/tmp/invest")));
        assert_eq!(
            config.save_path().unwrap(),
            PathBuf::from("/tmp/invest/slot2.json")
        );
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = GameConfig::from_lookup(lookup(&[(SAVE_DIR_VAR, "  "), (SAVE_FILE_VAR, "")]));
        assert_eq!(config, GameConfig::default());
    }
}
