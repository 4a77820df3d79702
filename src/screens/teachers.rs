use iced::widget::container::bordered_box;
use iced::widget::{button, checkbox, column, row, text, Column, Container, Scrollable};
use iced::{Alignment, Length};
use iced_font_awesome::fa_icon_solid;
use crate::app::{App, CollectionMessage, Message};
use crate::records::TeacherField;
use crate::screens::common::{collection_toolbar, record_form, with_overlays, ERROR_COLOR};

const FORM_FIELDS: [(&str, TeacherField); 4] = [
    ("Staff ID", TeacherField::StaffId),
    ("Full name", TeacherField::FullName),
    ("Department", TeacherField::Department),
    ("Email", TeacherField::Email),
];

pub fn teachers_screen(app: &App) -> Container<'_, Message> {
    let view = &app.teachers;
    let mut list = Column::new().spacing(6);

    if let Some(err) = view.live.last_error() {
        list = list.push(text(format!("Could not load teachers: {}", err)).color(ERROR_COLOR));
    }

    let visible = view.visible();
    if !view.live.is_loaded() {
        list = list.push(text("Loading teachers..."));
    } else if visible.is_empty() {
        list = list.push(text("No teachers found"));
    }

    for teacher in visible {
        let key = teacher.staff_id.clone();
        let selected = view.selection.contains(&key);
        let line = row![
            checkbox("", selected)
                .on_toggle(move |_| Message::Teachers(CollectionMessage::ToggleSelected(key.clone()))),
            column![
                text(&teacher.full_name).size(16),
                text(format!(
                    "{} | {} | {}",
                    teacher.staff_id,
                    teacher.department,
                    teacher.email.as_deref().unwrap_or("-")
                ))
                    .size(13),
            ]
                .width(Length::Fill),
            button(fa_icon_solid("pen").style(move |_| text::base(&app.theme)))
                .on_press(Message::Teachers(CollectionMessage::BeginEdit(teacher.clone()))),
            button(fa_icon_solid("trash").style(move |_| text::base(&app.theme)))
                .on_press_maybe((!view.deletes.is_in_flight()).then(|| {
                    Message::Teachers(CollectionMessage::RequestDelete(teacher.staff_id.clone()))
                })),
        ]
            .spacing(10)
            .align_y(Alignment::Center);

        list = list.push(Container::new(line).style(bordered_box).padding(8).width(Length::Fill));
    }

    let content = column![
        text("Teachers").size(30),
        collection_toolbar(view, Message::Teachers, "Search by name or staff ID"),
        Scrollable::new(list).height(Length::Fill),
    ]
        .spacing(15);

    let form = view
        .editor
        .is_open()
        .then(|| record_form(view, &FORM_FIELDS, Message::Teachers, None));

    with_overlays(
        Container::new(content).width(Length::Fill).height(Length::Fill).padding(20),
        view,
        form,
        Message::Teachers,
    )
}
