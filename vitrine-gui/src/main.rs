use iced::{
    Color, Element,
    Length::{self, Fill},
    Task, Theme,
    advanced::widget::{self, operate, operation},
    application,
    widget::{center, column, container, mouse_area, opaque, scrollable, stack},
};
use strum::VariantArray;
use tracing::{Level, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use vitrine_lib::{
    Repository,
    tracking::{Section, SectionSpan, SectionTracker, VisibilityLatch, visible_fraction},
};

use crate::components::{
    contact_form::{self, ContactForm},
    header,
    project_dialog::{self, ProjectDialog},
    project_list::{self, ProjectList},
    sections,
};

pub mod components;

/// Fraction of a section that must have been on screen before its entrance runs.
const REVEAL_THRESHOLD: f32 = 0.1;

/// Viewport height assumed before the first scroll event arrives, so sections
/// visible at startup reveal without the user having to scroll.
const INITIAL_VIEWPORT_HEIGHT: f32 = 768.0;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Header(header::Message),
    Sections(sections::Message),
    ProjectList(project_list::Message),
    ProjectDialog(project_dialog::Message),
    ContactForm(contact_form::Message),
    Scrolled(scrollable::Viewport),
}

struct App {
    repo: Repository,
    title: String,
    theme: Theme,
    tracker: SectionTracker,
    latches: Vec<(Section, VisibilityLatch)>,
    show_project_dialog: bool,
    // Components
    project_list: ProjectList,
    project_dialog: ProjectDialog,
    contact_form: ContactForm,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let repo = Repository::new();
        repo.ensure_seeded();

        let theme = theme_for(repo.dark_mode());
        let tracker = SectionTracker::new(section_spans());

        // Latch in the sections already on screen; scroll events take over from here.
        let mut latches: Vec<(Section, VisibilityLatch)> = Section::VARIANTS
            .iter()
            .map(|&section| (section, VisibilityLatch::new(REVEAL_THRESHOLD)))
            .collect();
        for (section, latch) in &mut latches {
            if let Some(span) = tracker.span(*section) {
                latch.report(visible_fraction(span, 0.0, INITIAL_VIEWPORT_HEIGHT));
            }
        }

        let project_list = ProjectList::new(repo.clone());

        (
            Self {
                repo,
                title: "Portfolio".into(),
                theme,
                tracker,
                latches,
                show_project_dialog: false,
                project_list,
                project_dialog: ProjectDialog::new(),
                contact_form: ContactForm::new(),
            },
            Task::none(),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Scrolled(viewport) => {
                let offset = viewport.absolute_offset();
                let height = viewport.bounds().height;

                self.tracker.track(offset.y);
                for (section, latch) in &mut self.latches {
                    if let Some(span) = self.tracker.span(*section) {
                        latch.report(visible_fraction(span, offset.y, height));
                    }
                }

                Task::none()
            }
            Message::Header(msg) => match msg {
                header::Message::NavPressed(section) => self.scroll_to(section),
                header::Message::ThemeToggled => {
                    let dark = !matches!(self.theme, Theme::Dark);
                    self.repo.set_dark_mode(dark);
                    self.theme = theme_for(dark);
                    Task::none()
                }
            },
            Message::Sections(msg) => match msg {
                sections::Message::ViewProjectsPressed => self.scroll_to(Section::Projects),
            },
            Message::ProjectList(msg) => match self.project_list.update(msg) {
                project_list::Action::None => Task::none(),
                project_list::Action::Add => {
                    self.project_dialog.clear();
                    self.show_project_dialog = true;
                    Task::none()
                }
                project_list::Action::Edit(project) => {
                    self.project_dialog.load(project);
                    self.show_project_dialog = true;
                    Task::none()
                }
                project_list::Action::Delete(id) => {
                    if let Err(e) = self.repo.remove(id) {
                        warn!("failed to delete project: {e}");
                    }
                    self.project_list.refresh();
                    Task::none()
                }
            },
            Message::ProjectDialog(msg) => match self.project_dialog.update(msg) {
                project_dialog::Action::None => Task::none(),
                project_dialog::Action::Run(task) => task.map(Message::ProjectDialog),
                project_dialog::Action::Cancel => {
                    self.show_project_dialog = false;
                    Task::none()
                }
                project_dialog::Action::Create(draft) => {
                    self.repo.add(draft);
                    self.show_project_dialog = false;
                    self.project_list.refresh();
                    Task::none()
                }
                project_dialog::Action::Edit(project) => {
                    if let Err(e) = self.repo.update(project) {
                        warn!("failed to update project: {e}");
                    }
                    self.show_project_dialog = false;
                    self.project_list.refresh();
                    Task::none()
                }
            },
            Message::ContactForm(msg) => self.contact_form.update(msg).map(Message::ContactForm),
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let page = column![
            section_block(
                Section::Home,
                sections::hero(self.revealed(Section::Home)).map(Message::Sections),
            ),
            section_block(
                Section::About,
                sections::about(self.revealed(Section::About)).map(Message::Sections),
            ),
            section_block(
                Section::Skills,
                sections::skills(self.revealed(Section::Skills)).map(Message::Sections),
            ),
            section_block(
                Section::Projects,
                self.project_list
                    .view(self.revealed(Section::Projects))
                    .map(Message::ProjectList),
            ),
            section_block(
                Section::Experience,
                sections::experience(self.revealed(Section::Experience)).map(Message::Sections),
            ),
            section_block(
                Section::Contact,
                self.contact_form
                    .view(self.revealed(Section::Contact))
                    .map(Message::ContactForm),
            ),
            sections::footer().map(Message::Sections),
        ];

        let content = column![
            header::view(self.tracker.active(), matches!(self.theme, Theme::Dark))
                .map(Message::Header),
            scrollable(page)
                .id(scroll_id())
                .on_scroll(Message::Scrolled)
                .height(Fill),
        ];

        if self.show_project_dialog {
            modal(
                content,
                self.project_dialog.view().map(Message::ProjectDialog),
                Message::ProjectDialog(project_dialog::Message::CancelPressed),
            )
        } else {
            content.into()
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn revealed(&self, section: Section) -> bool {
        self.latches
            .iter()
            .find(|(s, _)| *s == section)
            .is_some_and(|(_, latch)| latch.is_seen())
    }

    fn scroll_to(&self, section: Section) -> Task<Message> {
        let top = self.tracker.span(section).map(|span| span.top).unwrap_or(0.0);

        operate(operation::scrollable::scroll_to(
            scroll_id(),
            scrollable::AbsoluteOffset { x: Some(0.0), y: Some(top) },
        ))
    }
}

fn theme_for(dark: bool) -> Theme {
    if dark { Theme::Dark } else { Theme::Light }
}

fn scroll_id() -> widget::Id {
    widget::Id::new("page")
}

/// Fixed layout height of each section; the tracker's spans are derived from these.
fn section_height(section: Section) -> f32 {
    match section {
        Section::Home => 620.0,
        Section::About => 540.0,
        Section::Skills => 560.0,
        Section::Projects => 760.0,
        Section::Experience => 620.0,
        Section::Contact => 640.0,
    }
}

fn section_spans() -> Vec<SectionSpan> {
    let mut top = 0.0;

    Section::VARIANTS
        .iter()
        .map(|&section| {
            let height = section_height(section);
            let span = SectionSpan { section, top, height };
            top += height;
            span
        })
        .collect()
}

fn section_block(section: Section, content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Fill)
        .height(section_height(section))
        .padding(24)
        .into()
}

pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_click_outside: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let backdrop = mouse_area(center(opaque(content)).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }))
    .on_press(on_click_outside);

    stack![base.into(), opaque(backdrop)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
