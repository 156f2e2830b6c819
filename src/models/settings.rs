use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    OpenAi,
    Anthropic,
    Local,
}

/// Application preferences. Stored as a single document; any field missing
/// from the stored JSON falls back to its default, so settings written by an
/// older build load cleanly under a newer schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub theme: Theme,
    pub font_size: u32,
    pub font_family: String,
    pub auto_save: bool,
    pub auto_save_interval: u32,
    pub ai_provider: AiProvider,
    pub ai_model: String,
    pub ai_temperature: f32,
    pub ai_max_tokens: u32,
    pub show_word_count: bool,
    pub show_reading_time: bool,
    pub target_daily_words: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Auto,
            font_size: 16,
            font_family: "Georgia".to_string(),
            auto_save: true,
            auto_save_interval: 30,
            ai_provider: AiProvider::OpenAi,
            ai_model: "gpt-3.5-turbo".to_string(),
            ai_temperature: 0.7,
            ai_max_tokens: 150,
            show_word_count: true,
            show_reading_time: true,
            target_daily_words: 500,
        }
    }
}
