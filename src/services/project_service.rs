use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Chapter, Character, DashboardStats, Project, ProjectStatus, ProjectSummary};
use crate::services::store::Store;
use crate::services::word_count::count_words;

const DEFAULT_TITLE: &str = "Untitled Project";
const DEFAULT_GENRE: &str = "Fiction";
const DEFAULT_TARGET_WORD_COUNT: usize = 50_000;

/// Loads the whole project collection. An absent document is an empty
/// collection; an unparseable one is logged and treated as absent.
pub fn load_projects(store: &Store) -> Result<Vec<Project>, AppError> {
    match store.read_json::<Vec<Project>>(&store.projects_path()) {
        Ok(Some(projects)) => Ok(projects),
        Ok(None) => Ok(Vec::new()),
        Err(e) => {
            log::warn!("projects document unreadable, starting empty: {e}");
            Ok(Vec::new())
        }
    }
}

pub fn save_projects(store: &Store, projects: &[Project]) -> Result<(), AppError> {
    store.write_json(&store.projects_path(), &projects)
}

pub fn list_projects(store: &Store) -> Result<Vec<ProjectSummary>, AppError> {
    let mut summaries: Vec<ProjectSummary> =
        load_projects(store)?.iter().map(ProjectSummary::from).collect();
    summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(summaries)
}

pub fn get_project(store: &Store, project_id: &str) -> Result<Project, AppError> {
    load_projects(store)?
        .into_iter()
        .find(|p| p.id == project_id)
        .ok_or_else(|| AppError::NotFound(format!("project {project_id}")))
}

pub fn create_project(
    store: &Store,
    title: &str,
    description: &str,
    genre: &str,
    target_word_count: usize,
) -> Result<Project, AppError> {
    let now = Utc::now();
    let project = Project {
        id: Uuid::new_v4().to_string(),
        title: if title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title.to_string()
        },
        description: description.to_string(),
        genre: if genre.trim().is_empty() {
            DEFAULT_GENRE.to_string()
        } else {
            genre.to_string()
        },
        word_count: 0,
        target_word_count: if target_word_count == 0 {
            DEFAULT_TARGET_WORD_COUNT
        } else {
            target_word_count
        },
        status: ProjectStatus::Planning,
        created_at: now,
        updated_at: now,
        chapters: Vec::new(),
        characters: Vec::new(),
        settings: Vec::new(),
        plot_points: Vec::new(),
    };

    let mut projects = load_projects(store)?;
    projects.push(project.clone());
    save_projects(store, &projects)?;

    log::info!("created project {} ({})", project.id, project.title);
    Ok(project)
}

/// Applies a mutation to one project and rewrites the collection, bumping
/// the project's `updated_at`. A missing id is `NotFound`; callers decide
/// how to surface it.
pub fn update_project<F>(store: &Store, project_id: &str, mutate: F) -> Result<Project, AppError>
where
    F: FnOnce(&mut Project) -> Result<(), AppError>,
{
    let mut projects = load_projects(store)?;
    let index = projects
        .iter()
        .position(|p| p.id == project_id)
        .ok_or_else(|| AppError::NotFound(format!("project {project_id}")))?;

    mutate(&mut projects[index])?;
    projects[index].updated_at = Utc::now();
    save_projects(store, &projects)?;
    Ok(projects[index].clone())
}

/// Replaces the chapter by id (or appends it), rederiving its word count
/// from the content, then recomputes the project word count as the sum over
/// all chapters. Always a full recompute so the invariant stays exact no
/// matter which chapters changed since the last save.
pub fn upsert_chapter(
    store: &Store,
    project_id: &str,
    mut chapter: Chapter,
) -> Result<Project, AppError> {
    chapter.word_count = count_words(&chapter.content);
    chapter.updated_at = Utc::now();

    update_project(store, project_id, |project| {
        if let Some(index) = project.chapters.iter().position(|c| c.id == chapter.id) {
            project.chapters[index] = chapter;
        } else {
            project.chapters.push(chapter);
        }
        project.word_count = project.chapters.iter().map(|c| c.word_count).sum();
        Ok(())
    })
}

/// First chapter of the project, creating "Chapter 1" when there is none.
pub fn ensure_first_chapter(store: &Store, project_id: &str) -> Result<Chapter, AppError> {
    let project = get_project(store, project_id)?;
    if let Some(first) = project.chapters.first() {
        return Ok(first.clone());
    }

    let chapter = Chapter::new("Chapter 1", 1);
    let chapter_id = chapter.id.clone();
    let updated = upsert_chapter(store, project_id, chapter)?;
    updated
        .chapters
        .into_iter()
        .find(|c| c.id == chapter_id)
        .ok_or_else(|| AppError::NotFound(format!("chapter {chapter_id}")))
}

pub fn add_chapter(store: &Store, project_id: &str, title: &str) -> Result<Chapter, AppError> {
    let project = get_project(store, project_id)?;
    let chapter = Chapter::new(title, project.chapters.len() + 1);
    let chapter_id = chapter.id.clone();
    let updated = upsert_chapter(store, project_id, chapter)?;
    updated
        .chapters
        .into_iter()
        .find(|c| c.id == chapter_id)
        .ok_or_else(|| AppError::NotFound(format!("chapter {chapter_id}")))
}

pub fn append_character(
    store: &Store,
    project_id: &str,
    character: Character,
) -> Result<Project, AppError> {
    update_project(store, project_id, |project| {
        project.characters.push(character);
        Ok(())
    })
}

pub fn replace_character(
    store: &Store,
    project_id: &str,
    character: Character,
) -> Result<Project, AppError> {
    update_project(store, project_id, |project| {
        let index = project
            .characters
            .iter()
            .position(|c| c.id == character.id)
            .ok_or_else(|| AppError::NotFound(format!("character {}", character.id)))?;
        project.characters[index] = character;
        Ok(())
    })
}

/// Removes the character if present. An unknown id leaves the list as-is
/// but still rewrites the project with a fresh `updated_at`.
pub fn remove_character(
    store: &Store,
    project_id: &str,
    character_id: &str,
) -> Result<Project, AppError> {
    update_project(store, project_id, |project| {
        project.characters.retain(|c| c.id != character_id);
        Ok(())
    })
}

pub fn dashboard_stats(store: &Store) -> Result<DashboardStats, AppError> {
    let projects = load_projects(store)?;
    Ok(DashboardStats {
        total_projects: projects.len(),
        total_words: projects.iter().map(|p| p.word_count).sum(),
        in_progress: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Writing)
            .count(),
        completed: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CharacterDraft, CharacterRole};

    fn test_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path()).unwrap();
        (dir, store)
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn character(name: &str) -> Character {
        CharacterDraft {
            name: Some(name.to_string()),
            role: Some(CharacterRole::Protagonist),
            ..CharacterDraft::default()
        }
        .into_character()
    }

    #[test]
    fn empty_store_loads_empty() {
        let (_dir, store) = test_store();
        assert!(load_projects(&store).unwrap().is_empty());
    }

    #[test]
    fn malformed_document_loads_empty() {
        let (_dir, store) = test_store();
        std::fs::write(store.projects_path(), "{not json").unwrap();
        assert!(load_projects(&store).unwrap().is_empty());
    }

    #[test]
    fn create_applies_defaults() {
        let (_dir, store) = test_store();
        let project = create_project(&store, "", "", "", 0).unwrap();
        assert_eq!(project.title, "Untitled Project");
        assert_eq!(project.genre, "Fiction");
        assert_eq!(project.target_word_count, 50_000);
        assert_eq!(project.status, ProjectStatus::Planning);
        assert_eq!(project.word_count, 0);
        assert!(project.chapters.is_empty());
        assert!(project.characters.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = test_store();
        let created = create_project(&store, "My Novel", "a story", "Fantasy", 80_000).unwrap();

        let loaded = get_project(&store, &created.id).unwrap();
        assert_eq!(loaded.title, "My Novel");
        assert_eq!(loaded.genre, "Fantasy");
        assert_eq!(loaded.created_at, created.created_at);
        assert_eq!(loaded.updated_at, created.updated_at);
    }

    #[test]
    fn get_unknown_project_is_not_found() {
        let (_dir, store) = test_store();
        assert!(matches!(
            get_project(&store, "nope"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn update_unknown_project_is_not_found() {
        let (_dir, store) = test_store();
        let result = update_project(&store, "nope", |_| Ok(()));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn first_chapter_is_created_lazily() {
        let (_dir, store) = test_store();
        let project = create_project(&store, "My Novel", "", "", 50_000).unwrap();

        let chapter = ensure_first_chapter(&store, &project.id).unwrap();
        assert_eq!(chapter.title, "Chapter 1");
        assert_eq!(chapter.order, 1);
        assert_eq!(chapter.word_count, 0);
        assert!(chapter.content.is_empty());

        // Asking again returns the same chapter, not a second one.
        let again = ensure_first_chapter(&store, &project.id).unwrap();
        assert_eq!(again.id, chapter.id);
        assert_eq!(get_project(&store, &project.id).unwrap().chapters.len(), 1);
    }

    #[test]
    fn saving_a_chapter_updates_both_word_counts() {
        let (_dir, store) = test_store();
        let project = create_project(&store, "My Novel", "", "", 50_000).unwrap();
        let mut chapter = ensure_first_chapter(&store, &project.id).unwrap();

        chapter.content = words(120);
        let updated = upsert_chapter(&store, &project.id, chapter).unwrap();

        assert_eq!(updated.word_count, 120);
        assert_eq!(updated.chapters[0].word_count, 120);
    }

    #[test]
    fn replacing_a_chapter_recomputes_the_full_sum() {
        let (_dir, store) = test_store();
        let project = create_project(&store, "My Novel", "", "", 50_000).unwrap();

        let mut first = Chapter::new("Chapter 1", 1);
        first.content = words(100);
        upsert_chapter(&store, &project.id, first).unwrap();

        let mut second = Chapter::new("Chapter 2", 2);
        second.content = words(50);
        let after_append = upsert_chapter(&store, &project.id, second.clone()).unwrap();
        assert_eq!(after_append.word_count, 150);

        second.content = words(80);
        let after_edit = upsert_chapter(&store, &project.id, second).unwrap();
        assert_eq!(after_edit.word_count, 180);
        assert_eq!(after_edit.chapters.len(), 2);
    }

    #[test]
    fn added_chapters_are_numbered_in_sequence() {
        let (_dir, store) = test_store();
        let project = create_project(&store, "My Novel", "", "", 50_000).unwrap();

        ensure_first_chapter(&store, &project.id).unwrap();
        let second = add_chapter(&store, &project.id, "The Storm").unwrap();
        assert_eq!(second.order, 2);
        assert_eq!(second.title, "The Storm");
    }

    #[test]
    fn character_append_replace_remove() {
        let (_dir, store) = test_store();
        let project = create_project(&store, "My Novel", "", "", 50_000).unwrap();

        let hero = character("Mira");
        append_character(&store, &project.id, hero.clone()).unwrap();

        let mut renamed = hero.clone();
        renamed.name = "Mira Voss".to_string();
        let updated = replace_character(&store, &project.id, renamed).unwrap();
        assert_eq!(updated.characters.len(), 1);
        assert_eq!(updated.characters[0].name, "Mira Voss");

        let removed = remove_character(&store, &project.id, &hero.id).unwrap();
        assert!(removed.characters.is_empty());
    }

    #[test]
    fn replacing_unknown_character_is_not_found() {
        let (_dir, store) = test_store();
        let project = create_project(&store, "My Novel", "", "", 50_000).unwrap();
        let result = replace_character(&store, &project.id, character("Ghost"));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn removing_unknown_character_keeps_list_but_bumps_updated_at() {
        let (_dir, store) = test_store();
        let project = create_project(&store, "My Novel", "", "", 50_000).unwrap();
        let with_hero = append_character(&store, &project.id, character("Mira")).unwrap();

        let after = remove_character(&store, &project.id, "no-such-id").unwrap();
        assert_eq!(after.characters.len(), 1);
        assert!(after.updated_at > with_hero.updated_at);
    }

    #[test]
    fn dashboard_stats_aggregate_across_projects() {
        let (_dir, store) = test_store();
        let a = create_project(&store, "A", "", "", 50_000).unwrap();
        let b = create_project(&store, "B", "", "", 50_000).unwrap();

        let mut chapter = Chapter::new("Chapter 1", 1);
        chapter.content = words(300);
        upsert_chapter(&store, &a.id, chapter).unwrap();

        update_project(&store, &a.id, |p| {
            p.status = ProjectStatus::Writing;
            Ok(())
        })
        .unwrap();
        update_project(&store, &b.id, |p| {
            p.status = ProjectStatus::Completed;
            Ok(())
        })
        .unwrap();

        let stats = dashboard_stats(&store).unwrap();
        assert_eq!(stats.total_projects, 2);
        assert_eq!(stats.total_words, 300);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 1);
    }

    #[test]
    fn summaries_sort_most_recent_first() {
        let (_dir, store) = test_store();
        let a = create_project(&store, "Older", "", "", 50_000).unwrap();
        let _b = create_project(&store, "Newer", "", "", 50_000).unwrap();

        // Touching the older project moves it back to the front.
        update_project(&store, &a.id, |_| Ok(())).unwrap();

        let summaries = list_projects(&store).unwrap();
        assert_eq!(summaries[0].title, "Older");
        assert_eq!(summaries[1].title, "Newer");
    }
}
