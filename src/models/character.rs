use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterRole {
    Protagonist,
    Antagonist,
    Supporting,
    Minor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub role: CharacterRole,
    #[serde(default)]
    pub appearance: String,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub conflicts: String,
    #[serde(default)]
    pub relationships: String,
    #[serde(default)]
    pub notes: String,
}

/// Partially filled character payload coming from the character form.
/// Missing fields take the same defaults the form applies.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub role: Option<CharacterRole>,
    pub appearance: Option<String>,
    pub personality: Option<String>,
    pub background: Option<String>,
    pub goals: Option<String>,
    pub conflicts: Option<String>,
    pub relationships: Option<String>,
    pub notes: Option<String>,
}

impl CharacterDraft {
    pub fn into_character(self) -> Character {
        Character {
            id: Uuid::new_v4().to_string(),
            name: self
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "Unnamed Character".to_string()),
            description: self.description.unwrap_or_default(),
            role: self.role.unwrap_or(CharacterRole::Supporting),
            appearance: self.appearance.unwrap_or_default(),
            personality: self.personality.unwrap_or_default(),
            background: self.background.unwrap_or_default(),
            goals: self.goals.unwrap_or_default(),
            conflicts: self.conflicts.unwrap_or_default(),
            relationships: self.relationships.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
        }
    }
}
