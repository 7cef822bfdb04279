use std::time::Duration;

use iced::{
    Element, Task,
    widget::{button, column, container, row, space, text, text_input},
};

/// How long a submission pretends to be in flight. There is no mail backend;
/// the delay exists so the sending state is visible.
const SUBMIT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    BodyChanged(String),
    SubmitPressed,
    Submitted,
}

pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    body: String,
    submitting: bool,
    submitted: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            body: String::new(),
            submitting: false,
            submitted: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(name) => {
                self.name = name;
                self.submitted = false;
                Task::none()
            }
            Message::EmailChanged(email) => {
                self.email = email;
                self.submitted = false;
                Task::none()
            }
            Message::SubjectChanged(subject) => {
                self.subject = subject;
                self.submitted = false;
                Task::none()
            }
            Message::BodyChanged(body) => {
                self.body = body;
                self.submitted = false;
                Task::none()
            }
            Message::SubmitPressed => {
                self.submitting = true;

                Task::perform(tokio::time::sleep(SUBMIT_DELAY), |()| Message::Submitted)
            }
            Message::Submitted => {
                self.submitting = false;
                self.submitted = true;
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.body.clear();

                Task::none()
            }
        }
    }

    pub fn view(&self, revealed: bool) -> Element<'_, Message> {
        if !revealed {
            return space::vertical().into();
        }

        let submit_label = if self.submitting {
            "Sending..."
        } else {
            "Send Message"
        };

        let mut form = column![
            row![
                text_input("Your Name", &self.name).on_input(Message::NameChanged),
                text_input("Your Email", &self.email).on_input(Message::EmailChanged),
            ]
            .spacing(12),
            text_input("Subject", &self.subject).on_input(Message::SubjectChanged),
            text_input("Your Message", &self.body).on_input(Message::BodyChanged),
            row![button(submit_label).on_press_maybe(
                (self.is_valid() && !self.submitting).then_some(Message::SubmitPressed)
            )],
        ]
        .spacing(12);

        if self.submitted {
            form = form.push(text("Message sent successfully! I'll get back to you soon."));
        }

        column![
            text("Get In Touch").size(32),
            text("Have a project in mind or want to collaborate? I'd love to hear from you!"),
            row![
                container(
                    column![
                        text("Let's Connect").size(20),
                        text("Email").size(14),
                        text("sk1486663@gmail.com"),
                        text("Location").size(14),
                        text("Delhi, India"),
                    ]
                    .spacing(6),
                )
                .padding(16)
                .style(container::bordered_box),
                form,
            ]
            .spacing(24),
        ]
        .spacing(16)
        .into()
    }

    fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.body.trim().is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();

        form.update(Message::NameChanged("Ada".into()));
        form.update(Message::EmailChanged("ada@example.com".into()));
        form.update(Message::SubjectChanged("Hello".into()));
        form.update(Message::BodyChanged("Interested in working together.".into()));

        form
    }

    #[test]
    fn test_blank_fields_are_invalid() {
        let mut form = ContactForm::new();
        assert!(!form.is_valid());

        form.update(Message::NameChanged("   ".into()));
        assert!(!form.is_valid());
    }

    #[tokio::test]
    async fn test_submit_enters_sending_state() {
        let mut form = filled_form();
        assert!(form.is_valid());

        form.update(Message::SubmitPressed);
        assert!(form.submitting);
        assert!(!form.submitted);
    }

    #[tokio::test]
    async fn test_completion_clears_fields() {
        let mut form = filled_form();

        form.update(Message::SubmitPressed);
        form.update(Message::Submitted);

        assert!(!form.submitting);
        assert!(form.submitted);
        assert!(form.name.is_empty());
        assert!(form.body.is_empty());
    }

    #[tokio::test]
    async fn test_typing_resets_success_notice() {
        let mut form = filled_form();

        form.update(Message::SubmitPressed);
        form.update(Message::Submitted);
        form.update(Message::NameChanged("Ada".into()));

        assert!(!form.submitted);
    }
}
