use iced::{
    Element,
    Length::Fill,
    widget::{Column, Row, button, column, container, row, scrollable, space, text},
};
use strum::VariantArray;
use vitrine_lib::{
    Repository,
    repository::{Filter, Project, ProjectId},
};

#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(Filter),
    AddPressed,
    EditPressed(Project),
    DeletePressed(ProjectId),
    DeleteConfirmed,
    DeleteCancelled,
}

pub enum Action {
    None,
    Add,
    Edit(Project),
    Delete(ProjectId),
}

/// The projects section: filter row with live counts, the card list, and the
/// delete confirmation overlay. Mutations are delegated upward as [`Action`]s;
/// the parent commits them through the repository and calls [`refresh`].
///
/// [`refresh`]: ProjectList::refresh
pub struct ProjectList {
    repo: Repository,
    projects: Vec<Project>,
    filter: Filter,
    delete_confirm: Option<ProjectId>,
}

impl ProjectList {
    pub fn new(repo: Repository) -> Self {
        let projects = repo.projects();

        Self {
            repo,
            projects,
            filter: Filter::All,
            delete_confirm: None,
        }
    }

    /// Re-read the collection after a repository mutation.
    pub fn refresh(&mut self) {
        self.projects = self.repo.projects();
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::FilterSelected(filter) => {
                self.filter = filter;
                Action::None
            }
            Message::AddPressed => Action::Add,
            Message::EditPressed(project) => Action::Edit(project),
            Message::DeletePressed(id) => {
                self.delete_confirm = Some(id);
                Action::None
            }
            Message::DeleteCancelled => {
                self.delete_confirm = None;
                Action::None
            }
            Message::DeleteConfirmed => match self.delete_confirm.take() {
                Some(id) => Action::Delete(id),
                None => Action::None,
            },
        }
    }

    pub fn view(&self, revealed: bool) -> Element<'_, Message> {
        if !revealed {
            return space::vertical().into();
        }

        let filters = Row::with_children(
            Filter::VARIANTS
                .iter()
                .map(|&filter| self.filter_button(filter)),
        )
        .spacing(8);

        let visible: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect();

        let grid: Element<'_, Message> = if visible.is_empty() {
            column![
                text("No projects found").size(22),
                text("Try selecting a different filter or add a new project"),
                row![button("Add Your First Project").on_press(Message::AddPressed)],
            ]
            .spacing(8)
            .into()
        } else {
            scrollable(Column::with_children(visible.into_iter().map(project_card)).spacing(12))
                .into()
        };

        let content = column![
            text("My Projects").size(32),
            text("Here are some of my projects that showcase my skills and passion for development"),
            row![button("Add New Project").on_press(Message::AddPressed)],
            filters,
            grid,
        ]
        .spacing(12);

        match self.delete_confirm {
            Some(_) => crate::modal(content, delete_confirm_view(), Message::DeleteCancelled),
            None => content.into(),
        }
    }

    fn filter_button(&self, filter: Filter) -> Element<'_, Message> {
        let count = self.projects.iter().filter(|p| filter.matches(p)).count();
        let style = if self.filter == filter {
            button::primary
        } else {
            button::subtle
        };

        button(text(format!("{filter} ({count})")))
            .style(style)
            .on_press(Message::FilterSelected(filter))
            .into()
    }
}

fn project_card(project: &Project) -> Element<'_, Message> {
    let tags = Row::with_children(project.technologies.iter().map(|tech| {
        container(text(tech).size(12))
            .padding(4)
            .style(container::bordered_box)
            .into()
    }))
    .spacing(6);

    let mut headline = row![text(&project.title).size(20)].spacing(8);
    if project.featured {
        headline = headline.push(
            container(text("Featured").size(12))
                .padding(4)
                .style(container::rounded_box),
        );
    }

    container(
        column![
            row![
                headline,
                space::horizontal(),
                button("Edit").on_press(Message::EditPressed(project.clone())),
                button("Delete")
                    .style(button::danger)
                    .on_press(Message::DeletePressed(project.id)),
            ]
            .spacing(8),
            text(format!("{} · {}", project.category, project.status)).size(14),
            text(&project.description).size(14),
            tags,
            row![text(&project.github).size(12), text(&project.live).size(12)].spacing(16),
        ]
        .spacing(8),
    )
    .width(Fill)
    .padding(12)
    .style(container::bordered_box)
    .into()
}

fn delete_confirm_view<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Delete Project").size(20),
            text("Are you sure you want to delete this project? This action cannot be undone."),
            row![
                space::horizontal(),
                button("Cancel").on_press(Message::DeleteCancelled),
                button("Delete Project")
                    .style(button::danger)
                    .on_press(Message::DeleteConfirmed),
            ]
            .spacing(8),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(420)
    .style(container::rounded_box)
    .into()
}

#[cfg(test)]
mod test {
    use vitrine_lib::{Store, repository::ProjectDraft};

    use super::*;

    fn mock_list() -> (ProjectList, Project) {
        let repo = Repository::with_store(Store::in_memory());
        let project = repo.add(ProjectDraft {
            title: "Sample".into(),
            description: "Sample description".into(),
            ..ProjectDraft::default()
        });

        (ProjectList::new(repo), project)
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (mut list, project) = mock_list();

        assert!(matches!(
            list.update(Message::DeletePressed(project.id)),
            Action::None
        ));
        assert!(matches!(
            list.update(Message::DeleteConfirmed),
            Action::Delete(id) if id == project.id
        ));
    }

    #[test]
    fn test_cancel_clears_pending_delete() {
        let (mut list, project) = mock_list();

        list.update(Message::DeletePressed(project.id));
        list.update(Message::DeleteCancelled);

        assert!(matches!(list.update(Message::DeleteConfirmed), Action::None));
    }

    #[test]
    fn test_edit_is_delegated_upward() {
        let (mut list, project) = mock_list();

        assert!(matches!(
            list.update(Message::EditPressed(project.clone())),
            Action::Edit(p) if p == project
        ));
    }

    #[test]
    fn test_refresh_picks_up_new_projects() {
        let (mut list, _) = mock_list();
        assert_eq!(list.projects.len(), 1);

        list.repo.add(ProjectDraft {
            title: "Another".into(),
            description: "Another description".into(),
            ..ProjectDraft::default()
        });
        list.refresh();

        assert_eq!(list.projects.len(), 2);
    }
}
