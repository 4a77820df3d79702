use iced::{widget::{column, text, text_input, button, vertical_space, Container}, Length, Center};
use iced::widget::{row, Column};
use crate::account::AccountMode;
use crate::app::{App, Message};
use crate::screens::common::{ERROR_COLOR, OK_COLOR};

fn mode_button(label: &str, mode: AccountMode, current: AccountMode) -> iced::widget::Button<'_, Message> {
    let style = if mode == current { button::primary } else { button::secondary };
    button(label)
        .style(style)
        .on_press(Message::AccountModeSelected(mode))
        .padding(10)
}

pub fn register_screen(app: &App) -> Container<'_, Message> {
    let form = &app.account;
    let (title, submit) = match form.mode {
        AccountMode::Register => ("Register administrator", "Register"),
        AccountMode::ResetPassword => ("Reset password", "Update password"),
    };

    let mut content: Column<'_, Message> = column![
        row![
            mode_button("Register", AccountMode::Register, form.mode),
            mode_button("Reset password", AccountMode::ResetPassword, form.mode),
        ]
            .spacing(10),
        text(title).size(30),
    ]
        .spacing(15)
        .width(Length::Fill)
        .align_x(Center);

    if form.mode == AccountMode::Register {
        content = content.push(
            text_input("Full name", &form.full_name)
                .on_input(Message::AccountFullNameChanged)
                .padding(10)
                .size(18)
                .width(Length::Fixed(350.0)),
        );
    }

    content = content
        .push(
            text_input("Email", &form.email)
                .on_input(Message::AccountEmailChanged)
                .padding(10)
                .size(18)
                .width(Length::Fixed(350.0)),
        )
        .push(
            text_input("Password", &form.password)
                .on_input(Message::AccountPasswordChanged)
                .secure(true)
                .padding(10)
                .size(18)
                .width(Length::Fixed(350.0)),
        )
        .push(
            text_input("Repeat password", &form.password_repeat)
                .on_input(Message::AccountPasswordRepeatChanged)
                .on_submit(Message::AccountSubmitPressed)
                .secure(true)
                .padding(10)
                .size(18)
                .width(Length::Fixed(350.0)),
        )
        .push(
            button(if form.pending { "Please wait..." } else { submit })
                .on_press_maybe((!form.pending).then_some(Message::AccountSubmitPressed))
                .padding(10),
        );

    if let Some(err) = &form.error {
        content = content.push(text(err).size(16).color(ERROR_COLOR));
    }
    if let Some(ok) = &form.success {
        content = content.push(text(ok).size(16).color(OK_COLOR));
    }

    content = content
        .push(vertical_space())
        .push(button("Back to login").on_press(Message::GoToLogin).padding(10));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
