use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use super::chapter::Chapter;
use super::character::Character;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Planning,
    Writing,
    Editing,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingKind {
    Location,
    TimePeriod,
    World,
}

/// World-building setting (a place, an era, a world). Persisted with the
/// project but not yet driven by any screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: SettingKind,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub atmosphere: String,
    #[serde(default)]
    pub significance: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlotPointKind {
    Setup,
    IncitingIncident,
    PlotPoint1,
    Midpoint,
    PlotPoint2,
    Climax,
    Resolution,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotPoint {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PlotPointKind,
    pub order: usize,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub genre: String,
    #[serde(default)]
    pub word_count: usize,
    pub target_word_count: usize,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub settings: Vec<Setting>,
    #[serde(default)]
    pub plot_points: Vec<PlotPoint>,
}

impl Project {
    /// Progress toward the target word count, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        if self.target_word_count == 0 {
            return 0.0;
        }
        let pct = self.word_count as f64 / self.target_word_count as f64 * 100.0;
        pct.min(100.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub status: ProjectStatus,
    pub word_count: usize,
    pub target_word_count: usize,
    pub progress_percent: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            genre: project.genre.clone(),
            status: project.status,
            word_count: project.word_count,
            target_word_count: project.target_word_count,
            progress_percent: project.progress_percent(),
            updated_at: project.updated_at,
        }
    }
}

/// Dashboard header tiles.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_words: usize,
    pub in_progress: usize,
    pub completed: usize,
}
