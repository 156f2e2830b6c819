use crate::error::AppError;
use crate::models::AiSuggestion;
use crate::services::ai_service;

#[tauri::command]
pub async fn generate_suggestions(content: String) -> Result<Vec<AiSuggestion>, AppError> {
    ai_service::generate_suggestions(&content).await
}
