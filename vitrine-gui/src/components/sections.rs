//! Static page sections: hero, about, skills, experience, footer.
//!
//! Each takes its reveal flag; until the section has been on screen once, an
//! empty spacer holds its place so the page keeps its full scroll height.

use iced::{
    Element,
    Length::Fill,
    widget::{Column, Row, button, column, container, progress_bar, row, space, text},
};

#[derive(Debug, Clone)]
pub enum Message {
    ViewProjectsPressed,
}

pub fn hero(revealed: bool) -> Element<'static, Message> {
    if !revealed {
        return space::vertical().into();
    }

    column![
        text("Available for new opportunities").size(14),
        text("Hi, I'm").size(18),
        text("Suraj Kumar").size(48),
        text("Frontend Developer").size(28),
        text(
            "I build exceptional digital experiences focused on performance, accessibility, \
             and clean design. Currently specializing in React, JavaScript, and modern \
             frontend technologies to create impactful web applications."
        ),
        row![
            button("View Projects").on_press(Message::ViewProjectsPressed),
        ],
        text("GitHub · LinkedIn · sk1486663@gmail.com").size(14),
    ]
    .spacing(16)
    .into()
}

pub fn about(revealed: bool) -> Element<'static, Message> {
    if !revealed {
        return space::vertical().into();
    }

    column![
        text("About Me").size(32),
        text("Passionate developer crafting digital experiences that make a difference"),
        text("Hello! I'm Suraj, a Frontend Developer based in Delhi.").size(20),
        text(
            "I specialize in creating exceptional digital experiences that are fast, \
             accessible, and visually appealing. My journey in web development started \
             during my college years, and I've been passionate about creating meaningful \
             solutions ever since."
        ),
        text(
            "With experience in technologies like React, JavaScript, and modern frontend \
             tools, I enjoy turning complex problems into simple, beautiful designs. When \
             I'm not coding, you can find me exploring new technologies, contributing to \
             projects, or learning new programming concepts."
        ),
    ]
    .spacing(12)
    .into()
}

pub fn skills(revealed: bool) -> Element<'static, Message> {
    if !revealed {
        return space::vertical().into();
    }

    let groups = [
        (
            "Frontend",
            [("React", 85.0), ("JavaScript", 88.0), ("HTML/CSS", 92.0), ("TypeScript", 75.0)],
        ),
        (
            "Backend",
            [("Node.js", 80.0), ("Python", 82.0), ("Java", 78.0), ("MySQL", 85.0)],
        ),
        (
            "Tools & Languages",
            [("C++", 85.0), ("C", 80.0), ("Git", 88.0), ("REST APIs", 82.0)],
        ),
    ];

    let columns = Row::with_children(groups.into_iter().map(|(category, skills)| {
        let bars = Column::with_children(skills.into_iter().map(|(name, level)| {
            column![
                row![text(name).size(14), space::horizontal(), text(format!("{level}%")).size(14)],
                progress_bar(0.0..=100.0, level).girth(8),
            ]
            .spacing(4)
            .into()
        }))
        .spacing(10);

        container(column![text(category).size(20), bars].spacing(12))
            .width(Fill)
            .padding(16)
            .style(container::bordered_box)
            .into()
    }))
    .spacing(16);

    column![
        text("Skills & Technologies").size(32),
        columns,
    ]
    .spacing(16)
    .into()
}

pub fn experience(revealed: bool) -> Element<'static, Message> {
    if !revealed {
        return space::vertical().into();
    }

    let entries = [
        (
            "National Informatics Centre",
            "Frontend Developer Intern",
            "14 july 2025 - 14 november 2025",
            "Worked on the frontend development of E-Jagriti System, implementing responsive \
             UI components and enhancing user experience. Collaborated with the development \
             team to build scalable web applications.",
        ),
        (
            "Freelance Projects",
            "Frontend Developer",
            "2022 - Present",
            "Developed multiple web applications including Sketchbook drawing app and personal \
             portfolio. Focused on creating responsive, user-friendly interfaces with modern \
             design principles.",
        ),
        (
            "Dr. Akhilesh Das Gupta Institute of Professional Studies",
            "B.Tech Computer Science & Engineering",
            "2022 - 2026",
            "Will graduate with focus on software engineering, web technologies, and computer \
             science fundamentals. Built strong foundation in programming, algorithms, and \
             system design.",
        ),
    ];

    let cards = Column::with_children(entries.into_iter().map(
        |(company, position, period, description)| {
            container(
                column![
                    row![text(position).size(18), space::horizontal(), text(period).size(14)],
                    text(company).size(15),
                    text(description).size(14),
                ]
                .spacing(6),
            )
            .width(Fill)
            .padding(12)
            .style(container::bordered_box)
            .into()
        },
    ))
    .spacing(12);

    column![
        text("Experience & Education").size(32),
        cards,
    ]
    .spacing(16)
    .into()
}

pub fn footer() -> Element<'static, Message> {
    container(text("© 2025 Suraj Kumar. Built with Rust and iced.").size(14))
        .width(Fill)
        .padding(24)
        .center_x(Fill)
        .into()
}
