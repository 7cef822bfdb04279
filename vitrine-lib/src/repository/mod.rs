//! Central access point for all persistent data.
//!
//! The [`Repository`] owns the in-memory project collection and the theme
//! flag, re-persisting through the [`Store`] on every mutation. Mutation and
//! persistence happen in the same synchronous call, so no caller can observe
//! a mutated collection that has not been handed to the store.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

use crate::store::{DARK_MODE_KEY, PROJECTS_KEY, Store};

mod project;

pub use project::{Category, Filter, Project, ProjectDraft, ProjectId, Status};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no project with id {0}")]
    NotFound(ProjectId),
}

#[derive(Clone, Debug)]
pub struct Repository {
    store: Store,
    projects: Arc<RwLock<Vec<Project>>>,
}

impl Repository {
    pub fn new() -> Self {
        Self::with_store(Store::new())
    }

    /// Build a repository over an explicit store. The collection is read once
    /// here; the store is only touched again to persist mutations.
    pub fn with_store(store: Store) -> Self {
        let projects = store.read(PROJECTS_KEY, Vec::new());

        Self {
            store,
            projects: Arc::new(RwLock::new(projects)),
        }
    }

    /// Ordered snapshot of the project collection.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.read().clone()
    }

    /// Subsequence of the collection matching `filter`, collection order preserved.
    pub fn filtered(&self, filter: Filter) -> Vec<Project> {
        self.projects
            .read()
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }

    /// Insert `draft` as a new project at the end of the collection and persist.
    pub fn add(&self, draft: ProjectDraft) -> Project {
        let mut projects = self.projects.write();

        let project = draft.into_project(allocate_id(&projects));
        projects.push(project.clone());
        self.persist(&projects);

        debug!("Created new project: {}", project.title);

        project
    }

    /// Replace the project carrying `project.id` in place, preserving its position.
    pub fn update(&self, project: Project) -> Result<()> {
        let mut projects = self.projects.write();

        let slot = projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or(Error::NotFound(project.id))?;
        *slot = project;
        self.persist(&projects);

        Ok(())
    }

    /// Remove the project with the given id; survivor order is unchanged.
    pub fn remove(&self, id: ProjectId) -> Result<()> {
        let mut projects = self.projects.write();

        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(Error::NotFound(id));
        }
        self.persist(&projects);

        debug!("Removed project {id}");

        Ok(())
    }

    /// Populate an empty collection with the two sample projects.
    ///
    /// Invoked once at startup. A non-empty collection is left alone, and the
    /// seed does not re-run within a session even if every project is later
    /// deleted; only the next startup over an empty store seeds again.
    pub fn ensure_seeded(&self) {
        let empty = self.projects.read().is_empty();
        if !empty {
            return;
        }

        for draft in sample_projects() {
            self.add(draft);
        }

        debug!("Seeded sample projects");
    }

    /// Persisted theme flag; `false` (light) when nothing is stored.
    pub fn dark_mode(&self) -> bool {
        self.store.read(DARK_MODE_KEY, false)
    }

    pub fn set_dark_mode(&self, dark: bool) {
        self.store.write(DARK_MODE_KEY, &dark);
    }

    fn persist(&self, projects: &[Project]) {
        self.store.write(PROJECTS_KEY, projects);
    }

    /// Return a mock [`Repository`] over an in-memory store.
    #[cfg(test)]
    pub(crate) fn mock() -> Self {
        Self::with_store(Store::in_memory())
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

/// Ids are wall-clock derived (Unix milliseconds) but clamped to stay strictly
/// above the highest existing id, so back-to-back creations within one clock
/// tick (seeding, scripted adds) remain distinct.
fn allocate_id(projects: &[Project]) -> ProjectId {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let floor = projects
        .iter()
        .map(|p| p.id.successor())
        .max()
        .unwrap_or_default();

    ProjectId::from(now).max(floor)
}

fn sample_projects() -> [ProjectDraft; 2] {
    [
        ProjectDraft {
            title: "Sketchbook App".into(),
            description: "A digital sketchbook application with real-time drawing capabilities, \
                          multiple brush styles, and save functionality. Perfect for artists and \
                          designers to create digital artwork."
                .into(),
            image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=600&h=400&fit=crop".into(),
            technologies: vec![
                "React".into(),
                "JavaScript".into(),
                "HTML5 Canvas".into(),
                "CSS3".into(),
                "Local Storage".into(),
            ],
            category: Category::Frontend,
            github: "https://github.com/Suraj913629/sketchbook".into(),
            live: "https://suraj913629.github.io/sketchbook".into(),
            featured: true,
            status: Status::Completed,
        },
        ProjectDraft {
            title: "Portfolio Website".into(),
            description: "A responsive portfolio website showcasing my projects and skills with \
                          modern design, smooth animations, and dark/light theme functionality."
                .into(),
            image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=600&h=400&fit=crop".into(),
            technologies: vec![
                "React".into(),
                "JavaScript".into(),
                "CSS3".into(),
                "Framer Motion".into(),
                "Vite".into(),
            ],
            category: Category::Frontend,
            github: "https://github.com/Suraj913629/portfolio".into(),
            live: "https://suraj913629.github.io/portfolio".into(),
            featured: true,
            status: Status::Completed,
        },
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    fn draft(title: &str, category: Category) -> ProjectDraft {
        ProjectDraft {
            title: title.into(),
            description: format!("{title} description"),
            category,
            ..ProjectDraft::default()
        }
    }

    #[test]
    fn test_add_appends_with_distinct_ids() {
        let repo = Repository::mock();

        let first = repo.add(draft("First", Category::Frontend));
        let second = repo.add(draft("Second", Category::Backend));

        let projects = repo.projects();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects.first().unwrap().id, first.id);
        assert_eq!(projects.last().unwrap().id, second.id);
        assert!(second.id > first.id);
    }

    #[test]
    fn test_update_preserves_position() {
        let repo = Repository::mock();
        let p0 = repo.add(draft("P0", Category::Frontend));
        let p1 = repo.add(draft("P1", Category::Frontend));
        let p2 = repo.add(draft("P2", Category::Frontend));

        let mut edited = p1.clone();
        edited.title = "P1 edited".into();
        repo.update(edited.clone()).unwrap();

        let titles: Vec<String> = repo.projects().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["P0", "P1 edited", "P2"]);

        // Untouched entries are byte-for-byte the same records.
        assert_eq!(repo.projects().first().unwrap(), &p0);
        assert_eq!(repo.projects().last().unwrap(), &p2);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let repo = Repository::mock();
        repo.add(draft("Only", Category::Frontend));

        let ghost = draft("Ghost", Category::Backend).into_project(ProjectId::from(1));

        assert!(matches!(repo.update(ghost), Err(Error::NotFound(_))));
        assert_eq!(repo.projects().len(), 1);
    }

    #[test]
    fn test_remove_keeps_survivor_order() {
        let repo = Repository::mock();
        let p0 = repo.add(draft("P0", Category::Frontend));
        let p1 = repo.add(draft("P1", Category::Frontend));
        let p2 = repo.add(draft("P2", Category::Frontend));

        repo.remove(p1.id).unwrap();

        let ids: Vec<ProjectId> = repo.projects().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![p0.id, p2.id]);
    }

    #[test]
    fn test_remove_unknown_id_is_not_found() {
        let repo = Repository::mock();
        let kept = repo.add(draft("Kept", Category::Frontend));

        assert!(matches!(repo.remove(ProjectId::from(1)), Err(Error::NotFound(_))));
        assert_eq!(repo.projects(), vec![kept]);
    }

    #[test]
    fn test_seed_runs_once() {
        let repo = Repository::mock();

        repo.ensure_seeded();
        let seeded = repo.projects();
        assert_eq!(seeded.len(), 2);

        repo.ensure_seeded();
        assert_eq!(repo.projects(), seeded);
    }

    #[test]
    fn test_seeded_ids_are_distinct() {
        let repo = Repository::mock();

        repo.ensure_seeded();

        let projects = repo.projects();
        assert_ne!(projects.first().unwrap().id, projects.last().unwrap().id);
    }

    #[test]
    fn test_filtered_preserves_order() {
        let repo = Repository::mock();
        let front = repo.add(draft("Front", Category::Frontend));
        let back = repo.add(draft("Back", Category::Backend));
        let full = repo.add(draft("Full", Category::Fullstack));

        let mut starred = back.clone();
        starred.featured = true;
        repo.update(starred.clone()).unwrap();

        assert_eq!(repo.filtered(Filter::Backend), vec![starred.clone()]);
        assert_eq!(repo.filtered(Filter::Featured), vec![starred.clone()]);
        assert_eq!(repo.filtered(Filter::All), vec![front.clone(), starred, full.clone()]);
        assert_eq!(repo.filtered(Filter::Fullstack), vec![full]);
        assert_eq!(repo.filtered(Filter::Frontend), vec![front]);
    }

    #[test]
    fn test_mutations_are_persisted() {
        let store = Store::in_memory();
        let repo = Repository::with_store(store.clone());

        let kept = repo.add(draft("Kept", Category::Frontend));
        let removed = repo.add(draft("Removed", Category::Backend));
        repo.remove(removed.id).unwrap();

        let reopened = Repository::with_store(store);
        assert_eq!(reopened.projects(), vec![kept]);
    }

    #[test]
    fn test_dark_mode_defaults_and_persists() {
        let store = Store::in_memory();
        let repo = Repository::with_store(store.clone());

        assert!(!repo.dark_mode());

        repo.set_dark_mode(true);
        assert!(repo.dark_mode());

        let reopened = Repository::with_store(store);
        assert!(reopened.dark_mode());
    }
}
