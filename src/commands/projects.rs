use tauri::State;

use crate::error::AppError;
use crate::models::{Chapter, DashboardStats, Project, ProjectSummary};
use crate::services::project_service;
use crate::services::store::Store;
use crate::services::word_count::WritingStats;

#[tauri::command]
pub fn list_projects(store: State<'_, Store>) -> Result<Vec<ProjectSummary>, AppError> {
    project_service::list_projects(&store)
}

#[tauri::command]
pub fn get_project(store: State<'_, Store>, id: String) -> Result<Project, AppError> {
    project_service::get_project(&store, &id)
}

#[tauri::command]
pub fn create_project(
    store: State<'_, Store>,
    title: String,
    description: String,
    genre: String,
    target_word_count: Option<usize>,
) -> Result<Project, AppError> {
    project_service::create_project(
        &store,
        &title,
        &description,
        &genre,
        target_word_count.unwrap_or(0),
    )
}

#[tauri::command]
pub fn get_dashboard_stats(store: State<'_, Store>) -> Result<DashboardStats, AppError> {
    project_service::dashboard_stats(&store)
}

#[tauri::command]
pub fn ensure_first_chapter(
    store: State<'_, Store>,
    project_id: String,
) -> Result<Chapter, AppError> {
    project_service::ensure_first_chapter(&store, &project_id)
}

#[tauri::command]
pub fn add_chapter(
    store: State<'_, Store>,
    project_id: String,
    title: String,
) -> Result<Chapter, AppError> {
    project_service::add_chapter(&store, &project_id, &title)
}

/// Saves an edited chapter and returns the updated project so the editor
/// sees the recomputed word counts in one round trip.
#[tauri::command]
pub fn save_chapter(
    store: State<'_, Store>,
    project_id: String,
    chapter: Chapter,
) -> Result<Project, AppError> {
    project_service::upsert_chapter(&store, &project_id, chapter)
}

#[tauri::command]
pub fn writing_stats(content: String) -> WritingStats {
    WritingStats::of(&content)
}
