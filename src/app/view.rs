use iced::{Element, Length};
use iced::widget::{Column, Container, Row};
use crate::app::state::Screen;
use crate::screens::common::notice_bar;
use crate::screens::{dashboard_screen, login_screen, nav_menu, register_screen, settings_screen, students_screen, teachers_screen};
use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let screen = match self.current_screen {
            Screen::Dashboard => dashboard_screen(self),
            Screen::Login => login_screen(self),
            Screen::Register => register_screen(self),
            Screen::Students => students_screen(self),
            Screen::Teachers => teachers_screen(self),
            Screen::Settings => settings_screen(self),
        };

        let mut main = Column::new().spacing(10).padding(10);
        if let Some(bar) = notice_bar(self) {
            main = main.push(bar);
        }
        main = main.push(screen.width(Length::Fill));

        Row::new()
            .spacing(20)
            .push(
                // sidebar
                Container::new(nav_menu(self))
                    .width(Length::Fixed(200.0))
                    .height(Length::Fill)
                    .padding(10),
            )
            .push(main.width(Length::Fill))
            .into()
    }
}
