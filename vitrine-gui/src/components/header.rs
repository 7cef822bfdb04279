use iced::{
    Alignment, Element,
    widget::{Row, button, row, space, text},
};
use strum::VariantArray;
use vitrine_lib::tracking::Section;

#[derive(Debug, Clone)]
pub enum Message {
    NavPressed(Section),
    ThemeToggled,
}

/// Fixed navigation bar: brand, one link per section with the active one
/// highlighted, and the theme toggle.
pub fn view(active: Section, dark: bool) -> Element<'static, Message> {
    let links = Row::with_children(
        Section::VARIANTS
            .iter()
            .map(|&section| nav_link(section, active)),
    )
    .spacing(8);

    row![
        text("Portfolio").size(24),
        space::horizontal(),
        links,
        space::horizontal(),
        button(text(if dark { "Light" } else { "Dark" }))
            .style(button::subtle)
            .on_press(Message::ThemeToggled),
    ]
    .padding(16)
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}

fn nav_link(section: Section, active: Section) -> Element<'static, Message> {
    let style = if section == active {
        button::primary
    } else {
        button::subtle
    };

    button(text(section.to_string()))
        .style(style)
        .on_press(Message::NavPressed(section))
        .into()
}
