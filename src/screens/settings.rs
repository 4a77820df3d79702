use iced::{widget::{column, text, Container, vertical_space}, Length, Center, Theme};
use iced::widget::pick_list;
use crate::app::{App, Message};
use crate::config::theme_to_str;

pub fn settings_screen(app: &App) -> Container<'_, Message> {
    let current_name = theme_to_str(&app.theme);
    let theme_names: Vec<&'static str> = Theme::ALL.iter().map(theme_to_str).collect();
    let content = column![
        text("Settings").size(30),
        vertical_space(),
        text("Theme").size(16),
        pick_list(theme_names, Some(current_name), Message::ThemeSelected)
            .placeholder("Choose a theme"),
        vertical_space(),
        text(format!("API: {}", app.api.base_url())).size(14),
        text(format!("Refresh interval: {} ms", app.config.poll.interval.as_millis())).size(14),
        text(format!("Session file: {}", app.session.path().display())).size(14),
    ]
        .spacing(15)
        .align_x(Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
