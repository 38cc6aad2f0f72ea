use super::record::SaveRecord;
use crate::config::GameConfig;
use crate::error::{SaveError, SaveResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Reads and writes the JSON save file.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager for the location described by the environment.
    ///
    /// See [`GameConfig::from_env`] for the variables that are read.
    pub fn new() -> SaveResult<Self> {
        Self::from_config(&GameConfig::from_env())
    }

    pub fn from_config(config: &GameConfig) -> SaveResult<Self> {
        Ok(Self::with_path(config.save_path()?))
    }

    /// Uses an explicit file path. The parent directory is created on first save.
    pub fn with_path(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the record as pretty-printed JSON.
    ///
    /// The data goes to a sibling temporary file first and is then renamed
    /// over the save, so an interrupted write leaves the previous save intact.
    pub fn save(&self, record: &SaveRecord) -> SaveResult<()> {
        if let Some(dir) = self.save_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let json = serde_json::to_string_pretty(record)?;
        let tmp_path = self.save_path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.save_path)?;

        info!(path = %self.save_path.display(), "game saved");
        Ok(())
    }

    /// Reads the save file.
    ///
    /// # Returns
    /// `Ok(None)` when no save exists, an error when the file cannot be read
    /// or is not a valid record.
    pub fn read(&self) -> SaveResult<Option<SaveRecord>> {
        let json = match fs::read_to_string(&self.save_path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SaveError::Io(e)),
        };
        let record = serde_json::from_str(&json)?;
        Ok(Some(record))
    }

    /// Loads the save, treating an unreadable file like a missing one.
    ///
    /// A corrupt save is logged and left on disk; the next save overwrites it.
    pub fn load(&self) -> Option<SaveRecord> {
        match self.read() {
            Ok(Some(record)) => {
                info!(path = %self.save_path.display(), "save loaded");
                Some(record)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(path = %self.save_path.display(), error = %e, "could not load save, starting fresh");
                None
            }
        }
    }

    /// Removes the save file.
    ///
    /// # Returns
    /// Whether a file was actually deleted.
    pub fn delete(&self) -> SaveResult<bool> {
        match fs::remove_file(&self.save_path) {
            Ok(()) => {
                info!(path = %self.save_path.display(), "save deleted");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SaveError::Io(e)),
        }
    }
}
