use iced::{widget::{button, column}, Alignment, Element, Length, Renderer, Theme};
use iced::widget::{text, vertical_space, Column, Container, Row};
use iced_font_awesome::fa_icon_solid;
use crate::app::{App, Message};

fn icon_button_content<'a>(
    icon_element: impl Into<Element<'a, Message, Theme, Renderer>>,
    label: &'a str,
) -> Row<'a, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(5)
        .push(icon_element)
        .push(text(label))
}

fn nav_button<'a>(app: &'a App, icon: &'a str, label: &'a str, message: Message) -> Element<'a, Message> {
    button(icon_button_content(
        fa_icon_solid(icon).style(move |_| text::base(&app.theme)),
        label,
    ))
        .on_press(message)
        .width(Length::Fill)
        .into()
}

pub fn nav_menu(app: &App) -> Container<'_, Message> {
    let mut content = Column::new()
        .spacing(10)
        .push(nav_button(app, "gauge", "Dashboard", Message::GoToDashboard));

    if app.session.is_admin() {
        content = content
            .push(nav_button(app, "user-graduate", "Students", Message::GoToStudents))
            .push(nav_button(app, "chalkboard-user", "Teachers", Message::GoToTeachers));
    }

    content = content
        .push(vertical_space())
        .push(nav_button(app, "gear", "Settings", Message::GoToSettings));

    content = match app.session.display_name() {
        Some(name) => content.push(column![
            text(name).size(14),
            nav_button(app, "arrow-right-from-bracket", "Logout", Message::Logout),
        ]
            .spacing(5)),
        None => content.push(nav_button(app, "right-to-bracket", "Login", Message::GoToLogin)),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10)
}
