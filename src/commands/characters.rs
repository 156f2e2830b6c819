use tauri::State;

use crate::error::AppError;
use crate::models::{Character, CharacterDraft, Project};
use crate::services::project_service;
use crate::services::store::Store;

#[tauri::command]
pub fn add_character(
    store: State<'_, Store>,
    project_id: String,
    character: CharacterDraft,
) -> Result<Project, AppError> {
    project_service::append_character(&store, &project_id, character.into_character())
}

#[tauri::command]
pub fn update_character(
    store: State<'_, Store>,
    project_id: String,
    character: Character,
) -> Result<Project, AppError> {
    project_service::replace_character(&store, &project_id, character)
}

#[tauri::command]
pub fn delete_character(
    store: State<'_, Store>,
    project_id: String,
    character_id: String,
) -> Result<Project, AppError> {
    project_service::remove_character(&store, &project_id, &character_id)
}
