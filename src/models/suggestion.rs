use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Continuation,
    Improvement,
    Alternative,
    Description,
    Dialogue,
}

/// A single writing suggestion shown in the editor side panel.
/// Never persisted; lives only for the editing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub content: String,
    pub context: String,
    pub confidence: f32,
    pub timestamp: DateTime<Utc>,
}
