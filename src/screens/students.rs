use iced::widget::container::bordered_box;
use iced::widget::image::Handle;
use iced::widget::{button, checkbox, column, image, row, text, Column, Container, Row, Scrollable};
use iced::{Alignment, Element, Length};
use iced_font_awesome::fa_icon_solid;
use crate::app::{App, CollectionMessage, Message};
use crate::photo::decode_data_url;
use crate::records::{Student, StudentField};
use crate::screens::common::{collection_toolbar, record_form, with_overlays, ERROR_COLOR};
use crate::sync::{group_by_year_and_class, EditPhase};

const FORM_FIELDS: [(&str, StudentField); 6] = [
    ("Student ID", StudentField::StudentId),
    ("Full name", StudentField::FullName),
    ("Class", StudentField::ClassCode),
    ("Year level", StudentField::YearLevel),
    ("Email", StudentField::Email),
    ("Phone", StudentField::Phone),
];

fn avatar<'a>(data_url: Option<&str>, size: f32) -> Element<'a, Message> {
    match data_url.and_then(decode_data_url) {
        Some(bytes) => image(Handle::from_bytes(bytes))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        None => Container::new(text("No photo").size(11))
            .center(Length::Fixed(size))
            .style(bordered_box)
            .into(),
    }
}

fn student_row<'a>(app: &'a App, student: &'a Student) -> Row<'a, Message> {
    let key = student.student_id.clone();
    let selected = app.students.selection.contains(&key);
    let contact = [student.email.as_deref(), student.phone.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    row![
        checkbox("", selected)
            .on_toggle(move |_| Message::Students(CollectionMessage::ToggleSelected(key.clone()))),
        avatar(student.image.as_deref(), 40.0),
        column![
            text(&student.full_name).size(16),
            text(format!("{} | {}", student.student_id, contact)).size(13),
        ]
            .width(Length::Fill),
        button(fa_icon_solid("pen").style(move |_| text::base(&app.theme)))
            .on_press(Message::Students(CollectionMessage::BeginEdit(student.clone()))),
        button(fa_icon_solid("trash").style(move |_| text::base(&app.theme)))
            .on_press_maybe((!app.students.deletes.is_in_flight()).then(|| {
                Message::Students(CollectionMessage::RequestDelete(student.student_id.clone()))
            })),
    ]
        .spacing(10)
        .align_y(Alignment::Center)
}

fn photo_controls(app: &App) -> Column<'_, Message> {
    let image_url = app.students.editor.draft().and_then(|d| d.image.as_deref());
    let editing = app.students.editor.phase() == EditPhase::Editing;
    column![
        text("Photo").size(13),
        row![
            avatar(image_url, 96.0),
            column![
                button("Choose photo").on_press_maybe(editing.then_some(Message::ChoosePhoto)),
                button("Remove photo")
                    .on_press_maybe((editing && image_url.is_some()).then_some(Message::RemovePhoto)),
            ]
                .spacing(8),
        ]
            .spacing(15)
            .align_y(Alignment::Center),
    ]
        .spacing(4)
}

pub fn students_screen(app: &App) -> Container<'_, Message> {
    let view = &app.students;
    let mut list = Column::new().spacing(8);

    if let Some(err) = view.live.last_error() {
        list = list.push(text(format!("Could not load students: {}", err)).color(ERROR_COLOR));
    }

    let visible = view.visible();
    if !view.live.is_loaded() {
        list = list.push(text("Loading students..."));
    } else if visible.is_empty() {
        list = list.push(text("No students found"));
    }

    for (year, classes) in group_by_year_and_class(&visible) {
        list = list.push(text(format!("Year {}", year)).size(22));
        for (class, students) in classes {
            let mut group = Column::new()
                .spacing(6)
                .push(text(format!("Class {} ({})", class, students.len())).size(17));
            for student in students {
                group = group.push(student_row(app, student));
            }
            list = list.push(Container::new(group).style(bordered_box).padding(10).width(Length::Fill));
        }
    }

    let content = column![
        text("Students").size(30),
        collection_toolbar(view, Message::Students, "Search by name, ID or class"),
        Scrollable::new(list).height(Length::Fill),
    ]
        .spacing(15);

    let form = view.editor.is_open().then(|| {
        record_form(view, &FORM_FIELDS, Message::Students, Some(photo_controls(app).into()))
    });

    with_overlays(
        Container::new(content).width(Length::Fill).height(Length::Fill).padding(20),
        view,
        form,
        Message::Students,
    )
}
