use iced::{widget::{column, text, text_input, button, vertical_space, Container}, Length, Center};
use crate::app::{App, Message};
use crate::screens::common::ERROR_COLOR;

pub fn login_screen(app: &App) -> Container<'_, Message> {
    let form = &app.login;
    let mut content = column![
        text("Administrator login").size(30),
        vertical_space(),
        text_input("Email", &form.email)
            .on_input(Message::LoginEmailChanged)
            .padding(10)
            .size(18)
            .width(Length::Fixed(350.0)),
        text_input("Password", &form.password)
            .on_input(Message::LoginPasswordChanged)
            .on_submit(Message::LoginPressed)
            .secure(true)
            .padding(10)
            .size(18)
            .width(Length::Fixed(350.0)),
        button(if form.pending { "Signing in..." } else { "Sign in" })
            .on_press_maybe((!form.pending).then_some(Message::LoginPressed))
            .padding(10),
    ]
        .spacing(15)
        .width(Length::Fill)
        .align_x(Center);

    if let Some(err) = &form.error {
        content = content.push(text(err).size(16).color(ERROR_COLOR));
    }

    content = content.push(vertical_space()).push(
        button("Register or reset password")
            .on_press(Message::GoToRegister)
            .padding(10),
    );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
