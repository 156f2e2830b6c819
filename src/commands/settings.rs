use tauri::State;

use crate::error::AppError;
use crate::models::AppSettings;
use crate::services::settings_service;
use crate::services::store::Store;

#[tauri::command]
pub fn get_settings(store: State<'_, Store>) -> Result<AppSettings, AppError> {
    settings_service::load_settings(&store)
}

#[tauri::command]
pub fn save_settings(store: State<'_, Store>, settings: AppSettings) -> Result<(), AppError> {
    settings_service::save_settings(&store, &settings)
}
