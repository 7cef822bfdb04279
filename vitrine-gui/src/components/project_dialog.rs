use iced::{
    Element, Task,
    widget::{Row, button, checkbox, column, container, pick_list, row, space, text, text_input},
};
use rfd::AsyncFileDialog;
use strum::VariantArray;
use vitrine_lib::repository::{Category, Project, ProjectDraft, Status};

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    DescriptionChanged(String),
    GithubChanged(String),
    LiveChanged(String),
    ImageChanged(String),
    BrowseImagePressed,
    ImagePicked(Option<String>),
    CategorySelected(Category),
    StatusSelected(Status),
    FeaturedToggled(bool),
    TechInputChanged(String),
    AddTechPressed,
    RemoveTechPressed(String),
    CancelPressed,
    SavePressed,
}

pub enum Action {
    None,
    Run(Task<Message>),
    Cancel,
    Create(ProjectDraft),
    Edit(Project),
}

/// Dialog for creating a project or editing an existing one. Holds a
/// [`ProjectDraft`] while the user types; saving hands the finished draft
/// upward as an [`Action`] and the parent commits it.
pub struct ProjectDialog {
    editing: Option<Project>,
    draft: ProjectDraft,
    tech_input: String,
}

impl ProjectDialog {
    pub fn new() -> Self {
        Self {
            editing: None,
            draft: ProjectDraft::default(),
            tech_input: String::new(),
        }
    }

    /// Load an existing [`Project`] for editing.
    pub fn load(&mut self, project: Project) {
        self.draft = ProjectDraft::from(project.clone());
        self.editing = Some(project);
        self.tech_input.clear();
    }

    /// Reset the dialog to a blank draft
    pub fn clear(&mut self) {
        self.editing = None;
        self.draft = ProjectDraft::default();
        self.tech_input.clear();
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::TitleChanged(title) => {
                self.draft.title = title;
                Action::None
            }
            Message::DescriptionChanged(description) => {
                self.draft.description = description;
                Action::None
            }
            Message::GithubChanged(github) => {
                self.draft.github = github;
                Action::None
            }
            Message::LiveChanged(live) => {
                self.draft.live = live;
                Action::None
            }
            Message::ImageChanged(image) => {
                self.draft.image = image;
                Action::None
            }
            Message::BrowseImagePressed => Action::Run(Task::perform(
                async {
                    AsyncFileDialog::new()
                        .add_filter("images", &["png", "jpg", "jpeg", "gif", "webp"])
                        .pick_file()
                        .await
                        .map(|file_handle| file_handle.path().display().to_string())
                },
                Message::ImagePicked,
            )),
            Message::ImagePicked(path) => {
                if let Some(path) = path {
                    self.draft.image = path;
                }
                Action::None
            }
            Message::CategorySelected(category) => {
                self.draft.category = category;
                Action::None
            }
            Message::StatusSelected(status) => {
                self.draft.status = status;
                Action::None
            }
            Message::FeaturedToggled(featured) => {
                self.draft.featured = featured;
                Action::None
            }
            Message::TechInputChanged(content) => {
                self.tech_input = content;
                Action::None
            }
            Message::AddTechPressed => {
                if self.draft.push_technology(&self.tech_input) {
                    self.tech_input.clear();
                }
                Action::None
            }
            Message::RemoveTechPressed(tech) => {
                self.draft.remove_technology(&tech);
                Action::None
            }
            Message::CancelPressed => {
                self.clear();
                Action::Cancel
            }
            Message::SavePressed => {
                let draft = std::mem::take(&mut self.draft);
                let editing = self.editing.take();
                self.clear();

                match editing {
                    Some(project) => Action::Edit(draft.into_project(project.id)),
                    None => Action::Create(draft),
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let heading = if self.editing.is_some() {
            "Edit Project"
        } else {
            "Add New Project"
        };
        let save_label = if self.editing.is_some() {
            "Update Project"
        } else {
            "Create Project"
        };

        let tags = Row::with_children(self.draft.technologies.iter().map(|tech| {
            row![
                text(tech).size(12),
                button(text("×").size(12))
                    .style(button::text)
                    .on_press(Message::RemoveTechPressed(tech.clone())),
            ]
            .spacing(2)
            .into()
        }))
        .spacing(6)
        .wrap();

        container(column![
            text(heading).size(24),
            row![
                column![
                    text("Project Title *"),
                    text_input("Enter project title", &self.draft.title)
                        .on_input(Message::TitleChanged),
                ]
                .spacing(4),
                column![
                    text("Category"),
                    pick_list(
                        Category::VARIANTS,
                        Some(self.draft.category),
                        Message::CategorySelected,
                    ),
                ]
                .spacing(4),
            ]
            .spacing(12),
            column![
                text("Description *"),
                text_input("Describe your project", &self.draft.description)
                    .on_input(Message::DescriptionChanged),
            ]
            .spacing(4),
            row![
                column![
                    text("GitHub URL"),
                    text_input("https://github.com/username/repo", &self.draft.github)
                        .on_input(Message::GithubChanged),
                ]
                .spacing(4),
                column![
                    text("Live Demo URL"),
                    text_input("https://your-project.com", &self.draft.live)
                        .on_input(Message::LiveChanged),
                ]
                .spacing(4),
            ]
            .spacing(12),
            column![
                text("Image"),
                row![
                    text_input("Image URL or path", &self.draft.image)
                        .on_input(Message::ImageChanged),
                    button("Browse").on_press(Message::BrowseImagePressed),
                ]
                .spacing(8),
            ]
            .spacing(4),
            column![
                text("Technologies"),
                row![
                    text_input("Add technology (e.g., React)", &self.tech_input)
                        .on_input(Message::TechInputChanged)
                        .on_submit(Message::AddTechPressed),
                    button("Add").on_press_maybe(
                        (!self.tech_input.trim().is_empty()).then_some(Message::AddTechPressed)
                    ),
                ]
                .spacing(8),
                tags,
            ]
            .spacing(4),
            row![
                column![
                    text("Status"),
                    pick_list(
                        Status::VARIANTS,
                        Some(self.draft.status),
                        Message::StatusSelected,
                    ),
                ]
                .spacing(4),
                row![
                    checkbox(self.draft.featured).on_toggle(Message::FeaturedToggled),
                    text("Featured Project"),
                ]
                .spacing(6),
            ]
            .spacing(12),
            space::vertical(),
            row![
                space::horizontal(),
                button("Cancel")
                    .style(button::subtle)
                    .on_press(Message::CancelPressed),
                button(save_label).on_press_maybe(
                    self.draft.is_valid().then_some(Message::SavePressed)
                ),
            ]
            .spacing(8),
        ]
        .spacing(12))
        .padding(20)
        .width(560)
        .height(640)
        .style(container::rounded_box)
        .into()
    }
}

#[cfg(test)]
mod test {
    use vitrine_lib::repository::ProjectId;

    use super::*;

    fn filled_dialog() -> ProjectDialog {
        let mut dialog = ProjectDialog::new();

        dialog.update(Message::TitleChanged("Weather App".into()));
        dialog.update(Message::DescriptionChanged("Live forecasts".into()));
        dialog.update(Message::CategorySelected(Category::Fullstack));
        dialog.update(Message::FeaturedToggled(true));

        dialog
    }

    #[test]
    fn test_save_creates_draft_and_resets() {
        let mut dialog = filled_dialog();

        match dialog.update(Message::SavePressed) {
            Action::Create(draft) => {
                assert_eq!(draft.title, "Weather App");
                assert_eq!(draft.category, Category::Fullstack);
                assert!(draft.featured);
            }
            _ => panic!("expected a create action"),
        }

        assert!(dialog.draft.title.is_empty());
        assert!(dialog.editing.is_none());
    }

    #[test]
    fn test_save_preserves_id_when_editing() {
        let mut dialog = ProjectDialog::new();
        let project = ProjectDraft {
            title: "Original".into(),
            description: "Original description".into(),
            ..ProjectDraft::default()
        }
        .into_project(ProjectId::from(42));

        dialog.load(project);
        dialog.update(Message::TitleChanged("Renamed".into()));

        match dialog.update(Message::SavePressed) {
            Action::Edit(edited) => {
                assert_eq!(edited.id, ProjectId::from(42));
                assert_eq!(edited.title, "Renamed");
            }
            _ => panic!("expected an edit action"),
        }
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut dialog = filled_dialog();

        assert!(matches!(dialog.update(Message::CancelPressed), Action::Cancel));
        assert!(dialog.draft.title.is_empty());
    }

    #[test]
    fn test_tech_input_clears_only_on_accept() {
        let mut dialog = ProjectDialog::new();

        dialog.update(Message::TechInputChanged("React".into()));
        dialog.update(Message::AddTechPressed);
        assert!(dialog.tech_input.is_empty());
        assert_eq!(dialog.draft.technologies, vec!["React".to_owned()]);

        // Duplicates are rejected and the input keeps its content.
        dialog.update(Message::TechInputChanged("React".into()));
        dialog.update(Message::AddTechPressed);
        assert_eq!(dialog.tech_input, "React");
        assert_eq!(dialog.draft.technologies.len(), 1);
    }

    #[test]
    fn test_remove_technology() {
        let mut dialog = ProjectDialog::new();

        dialog.update(Message::TechInputChanged("React".into()));
        dialog.update(Message::AddTechPressed);
        dialog.update(Message::RemoveTechPressed("React".into()));

        assert!(dialog.draft.technologies.is_empty());
    }
}
