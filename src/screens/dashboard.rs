use iced::widget::container::bordered_box;
use iced::widget::{button, column, horizontal_space, row, text, text_input, Column, Container, Row, Scrollable};
use iced::{Alignment, Color, Length};
use iced_font_awesome::fa_icon_solid;
use crate::app::{App, Message};
use crate::records::{LockStatus, Room};
use crate::screens::common::{ERROR_COLOR, OK_COLOR};

const ROOMS_PER_ROW: usize = 4;

fn lock_color(status: LockStatus) -> Color {
    match status {
        LockStatus::Locked => ERROR_COLOR,
        LockStatus::Unlocked => OK_COLOR,
    }
}

fn room_card<'a>(app: &'a App, room: &'a Room) -> Container<'a, Message> {
    let icon = match room.lock_status {
        LockStatus::Locked => "lock",
        LockStatus::Unlocked => "lock-open",
    };
    let content = column![
        row![
            fa_icon_solid(icon).style(move |_| text::base(&app.theme)),
            text(&room.room_name).size(18),
        ]
            .spacing(8)
            .align_y(Alignment::Center),
        text(&room.room_id).size(13),
        text(room.lock_status.to_string()).size(16).color(lock_color(room.lock_status)),
    ]
        .spacing(6);

    Container::new(content)
        .style(bordered_box)
        .padding(12)
        .width(Length::Fill)
}

fn lookup_panel(app: &App) -> Column<'_, Message> {
    let lookup = &app.dashboard.lookup;
    let mut panel = column![
        text("Find student").size(20),
        row![
            text_input("Student ID", &lookup.query)
                .on_input(Message::LookupQueryChanged)
                .on_submit(Message::LookupPressed)
                .padding(10)
                .width(Length::Fixed(250.0)),
            button(if lookup.pending { "Searching..." } else { "Search" })
                .on_press_maybe((!lookup.pending).then_some(Message::LookupPressed)),
        ]
            .spacing(10),
    ]
        .spacing(10);

    if let Some(student) = &lookup.result {
        let mut actions = Row::new().spacing(10);
        if app.session.is_admin() {
            actions = actions.push(button("Edit").on_press(Message::EditLookedUpStudent(student.clone())));
        }
        actions = actions.push(button("Clear").on_press(Message::ClearLookup));

        panel = panel.push(
            Container::new(
                column![
                    text(&student.full_name).size(18),
                    text(format!(
                        "{} | Class {} | Year {}",
                        student.student_id,
                        student.class_code,
                        student.year_level.as_deref().unwrap_or("-")
                    ))
                        .size(14),
                    actions,
                ]
                    .spacing(8),
            )
                .style(bordered_box)
                .padding(12)
                .width(Length::Fill),
        );
    }
    panel
}

pub fn dashboard_screen(app: &App) -> Container<'_, Message> {
    let rooms = &app.dashboard.rooms;

    let synced = match rooms.last_synced() {
        Some(at) => format!("Last update: {}", at.format("%H:%M:%S")),
        None => "Waiting for first update...".to_string(),
    };
    let mut header = column![
        row![text("Room status").size(30), horizontal_space(), text(synced).size(14)]
            .align_y(Alignment::Center),
    ]
        .spacing(8);
    if let Some(err) = rooms.last_error() {
        header = header.push(text(format!("Connection problem: {}", err)).color(ERROR_COLOR));
    }

    let mut board = Column::new().spacing(10);
    if rooms.is_loaded() && rooms.items().is_empty() {
        board = board.push(text("No rooms reported"));
    }
    for chunk in rooms.items().chunks(ROOMS_PER_ROW) {
        let mut line = Row::new().spacing(10);
        for room in chunk {
            line = line.push(room_card(app, room));
        }
        for _ in chunk.len()..ROOMS_PER_ROW {
            line = line.push(horizontal_space());
        }
        board = board.push(line);
    }

    let mut staff = Column::new().spacing(6).push(text("Teachers on record").size(20));
    for teacher in &app.dashboard.staff {
        staff = staff.push(text(format!("{} ({}) - {}", teacher.full_name, teacher.staff_id, teacher.department)).size(14));
    }

    let content = column![
        header,
        Scrollable::new(board).height(Length::FillPortion(3)),
        row![
            Container::new(lookup_panel(app)).width(Length::FillPortion(1)),
            Scrollable::new(staff).width(Length::FillPortion(1)),
        ]
            .spacing(20)
            .height(Length::FillPortion(2)),
    ]
        .spacing(20);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
}
