use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Identifier of a [`Project`].
///
/// Wall-clock derived at creation time (Unix milliseconds), clamped by the
/// repository so consecutive allocations stay strictly increasing. Encodes as
/// a plain number, matching collections persisted by earlier versions.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
pub struct ProjectId(u64);

impl ProjectId {
    /// The smallest id strictly above this one.
    pub(crate) fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString, strum::VariantArray,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    #[strum(to_string = "Frontend", serialize = "frontend")]
    Frontend,
    #[strum(to_string = "Backend", serialize = "backend")]
    Backend,
    #[strum(to_string = "Full Stack", serialize = "fullstack")]
    Fullstack,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString, strum::VariantArray,
)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    #[strum(to_string = "Completed", serialize = "completed")]
    Completed,
    #[strum(to_string = "In Progress", serialize = "in-progress")]
    InProgress,
    #[strum(to_string = "Planned", serialize = "planned")]
    Planned,
}

/// One portfolio project. Field encoding matches the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub category: Category,
    pub github: String,
    pub live: String,
    pub featured: bool,
    pub status: Status,
}

/// Transient, unpersisted mirror of a [`Project`] used while the edit form is
/// open. Every field is enumerated and defaulted; the draft is discarded
/// wholesale when the form closes without saving.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub category: Category,
    pub github: String,
    pub live: String,
    pub featured: bool,
    pub status: Status,
}

impl ProjectDraft {
    /// Append a technology tag. The token is trimmed first; empty or duplicate
    /// (case-sensitive exact match) tokens are rejected. Returns whether the
    /// tag was appended.
    pub fn push_technology(&mut self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() || self.technologies.iter().any(|t| t == token) {
            return false;
        }

        self.technologies.push(token.to_owned());

        true
    }

    /// Remove the exact matching technology tag, if present.
    pub fn remove_technology(&mut self, token: &str) {
        self.technologies.retain(|t| t != token);
    }

    /// Required-field enforcement at the form boundary: title and description
    /// must be non-blank before a submission is accepted.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Promote the draft to a full record under the given id.
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            technologies: self.technologies,
            category: self.category,
            github: self.github,
            live: self.live,
            featured: self.featured,
            status: self.status,
        }
    }
}

impl From<Project> for ProjectDraft {
    fn from(project: Project) -> Self {
        Self {
            title: project.title,
            description: project.description,
            image: project.image,
            technologies: project.technologies,
            category: project.category,
            github: project.github,
            live: project.live,
            featured: project.featured,
            status: project.status,
        }
    }
}

/// Presentation-facing project filter. Variant order matches the filter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::VariantArray)]
pub enum Filter {
    #[strum(to_string = "All Projects")]
    All,
    #[strum(to_string = "Full Stack")]
    Fullstack,
    #[strum(to_string = "Frontend")]
    Frontend,
    #[strum(to_string = "Backend")]
    Backend,
    #[strum(to_string = "Featured")]
    Featured,
}

impl Filter {
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Fullstack => project.category == Category::Fullstack,
            Self::Frontend => project.category == Category::Frontend,
            Self::Backend => project.category == Category::Backend,
            Self::Featured => project.featured,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = ProjectDraft::default();

        assert_eq!(draft.category, Category::Frontend);
        assert_eq!(draft.status, Status::Completed);
        assert!(!draft.featured);
        assert!(draft.technologies.is_empty());
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_push_technology_rejects_duplicates() {
        let mut draft = ProjectDraft::default();

        assert!(draft.push_technology("React"));
        assert!(!draft.push_technology("React"));

        assert_eq!(draft.technologies, vec!["React"]);
    }

    #[test]
    fn test_push_technology_trims_and_rejects_blank() {
        let mut draft = ProjectDraft::default();

        assert!(draft.push_technology("  Rust  "));
        assert!(!draft.push_technology("   "));
        assert!(!draft.push_technology("Rust"));

        assert_eq!(draft.technologies, vec!["Rust"]);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut draft = ProjectDraft::default();

        assert!(draft.push_technology("React"));
        assert!(draft.push_technology("react"));

        assert_eq!(draft.technologies, vec!["React", "react"]);
    }

    #[test]
    fn test_remove_technology() {
        let mut draft = ProjectDraft::default();
        draft.push_technology("React");
        draft.push_technology("Vite");

        draft.remove_technology("React");

        assert_eq!(draft.technologies, vec!["Vite"]);
    }

    #[test]
    fn test_filter_matches() {
        let mut frontend = ProjectDraft {
            category: Category::Frontend,
            ..ProjectDraft::default()
        }
        .into_project(ProjectId::from(1));
        frontend.featured = true;

        let backend = ProjectDraft {
            category: Category::Backend,
            ..ProjectDraft::default()
        }
        .into_project(ProjectId::from(2));

        assert!(Filter::All.matches(&frontend));
        assert!(Filter::All.matches(&backend));
        assert!(Filter::Frontend.matches(&frontend));
        assert!(!Filter::Frontend.matches(&backend));
        assert!(Filter::Featured.matches(&frontend));
        assert!(!Filter::Featured.matches(&backend));
        assert!(!Filter::Fullstack.matches(&frontend));
    }

    #[test]
    fn test_wire_encoding_matches_persisted_layout() {
        assert_eq!(serde_json::to_string(&Category::Fullstack).unwrap(), "\"fullstack\"");
        assert_eq!(serde_json::to_string(&Status::InProgress).unwrap(), "\"in-progress\"");
        assert_eq!(serde_json::to_string(&ProjectId::from(7)).unwrap(), "7");
    }
}
