use std::path::{Path, PathBuf};

use chrono::Utc;
use tauri::State;

use crate::error::AppError;
use crate::services::backup_service::{self, BackupSummary};
use crate::services::store::Store;

#[tauri::command]
pub fn export_backup(store: State<'_, Store>, output_path: String) -> Result<String, AppError> {
    let path = backup_service::export_backup(&store, Path::new(&output_path))?;
    Ok(path.to_string_lossy().to_string())
}

#[tauri::command]
pub fn import_backup(store: State<'_, Store>, path: String) -> Result<BackupSummary, AppError> {
    backup_service::import_backup(&store, Path::new(&path))
}

/// Suggested file name for the save dialog.
#[tauri::command]
pub fn default_backup_name() -> String {
    backup_service::backup_file_name(Utc::now().date_naive())
}

#[tauri::command]
pub fn export_chapter(
    store: State<'_, Store>,
    project_id: String,
    chapter_id: String,
    output_dir: Option<String>,
) -> Result<String, AppError> {
    let dir = match output_dir {
        Some(dir) => PathBuf::from(dir),
        None => store.exports_dir()?,
    };
    let path = backup_service::export_chapter_text(&store, &project_id, &chapter_id, &dir)?;
    Ok(path.to_string_lossy().to_string())
}

#[tauri::command]
pub fn get_exports_dir(store: State<'_, Store>) -> Result<String, AppError> {
    Ok(store.exports_dir()?.to_string_lossy().to_string())
}
