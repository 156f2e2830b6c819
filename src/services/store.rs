use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

/// File-backed document store under the app data directory. Two documents:
/// `projects.json` (the whole project collection) and `settings.json` (the
/// preferences singleton). Registered as Tauri managed state so every
/// command reads and writes through the same root; tests point it at a
/// temporary directory instead.
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new() -> Result<Self, AppError> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| AppError::Storage("could not find data directory".to_string()))?
            .join("FLWriter");
        Self::at(data_dir)
    }

    pub fn at(data_dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let data_dir = data_dir.into();
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)?;
        }
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn projects_path(&self) -> PathBuf {
        self.data_dir.join("projects.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    pub fn exports_dir(&self) -> Result<PathBuf, AppError> {
        let exports_dir = self.data_dir.join("exports");
        if !exports_dir.exists() {
            fs::create_dir_all(&exports_dir)?;
        }
        Ok(exports_dir)
    }

    /// Reads and parses one document. An absent file is `Ok(None)`;
    /// a present but unparseable file is an error the caller decides on.
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, AppError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    pub fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), AppError> {
        let content = serde_json::to_string_pretty(value)?;
        fs::write(path, content)?;
        Ok(())
    }
}
