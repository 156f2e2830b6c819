use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{AppSettings, Project};
use crate::services::project_service::{get_project, load_projects, save_projects};
use crate::services::settings_service::{load_settings, save_settings};
use crate::services::store::Store;

/// Backup document: the settings singleton plus the whole project
/// collection, exactly as stored.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<AppSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSummary {
    pub settings_restored: bool,
    pub projects_restored: usize,
}

pub fn backup_file_name(date: NaiveDate) -> String {
    format!("fl-writer-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Writes `{ settings, projects }` pretty-printed to `output_path`.
pub fn export_backup(store: &Store, output_path: &Path) -> Result<PathBuf, AppError> {
    let bundle = BackupBundle {
        settings: Some(load_settings(store)?),
        projects: Some(load_projects(store)?),
    };
    let content = serde_json::to_string_pretty(&bundle)?;
    fs::write(output_path, content)?;
    log::info!("exported backup to {}", output_path.display());
    Ok(output_path.to_path_buf())
}

/// Restores a backup file. The document is parsed in full before anything
/// is written, so a malformed file leaves the store untouched. A `settings`
/// field replaces the settings singleton; a `projects` field replaces the
/// whole project collection verbatim.
pub fn import_backup(store: &Store, path: &Path) -> Result<BackupSummary, AppError> {
    let content = fs::read_to_string(path)?;
    let bundle: BackupBundle =
        serde_json::from_str(&content).map_err(|e| AppError::InvalidBackup(e.to_string()))?;

    let mut summary = BackupSummary {
        settings_restored: false,
        projects_restored: 0,
    };

    if let Some(settings) = bundle.settings {
        save_settings(store, &settings)?;
        summary.settings_restored = true;
    }
    if let Some(projects) = bundle.projects {
        summary.projects_restored = projects.len();
        save_projects(store, &projects)?;
    }

    log::info!(
        "imported backup from {} ({} projects)",
        path.display(),
        summary.projects_restored
    );
    Ok(summary)
}

pub fn chapter_file_name(project_title: &str, chapter_title: &str) -> String {
    let name = format!("{project_title} - {chapter_title}.txt");
    name.replace(['/', '\\'], "-")
}

/// Writes one chapter's raw content, no metadata, into `output_dir`.
pub fn export_chapter_text(
    store: &Store,
    project_id: &str,
    chapter_id: &str,
    output_dir: &Path,
) -> Result<PathBuf, AppError> {
    let project = get_project(store, project_id)?;
    let chapter = project
        .chapters
        .iter()
        .find(|c| c.id == chapter_id)
        .ok_or_else(|| AppError::NotFound(format!("chapter {chapter_id}")))?;

    let path = output_dir.join(chapter_file_name(&project.title, &chapter.title));
    fs::write(&path, &chapter.content)?;
    Ok(path)
}
