use iced::widget::container::{background, bordered_box};
use iced::widget::{button, column, horizontal_space, mouse_area, row, text, text_input, Column, Container, Row, Stack};
use iced::{Alignment, Color, Element, Length};
use crate::app::state::NoticeKind;
use crate::app::{App, CollectionMessage, Message};
use crate::records::Editable;
use crate::sync::{CollectionView, EditPhase, PendingDelete, Searchable};

pub const ERROR_COLOR: Color = Color { r: 0.85, g: 0.2, b: 0.2, a: 1.0 };
pub const OK_COLOR: Color = Color { r: 0.1, g: 0.6, b: 0.3, a: 1.0 };

pub fn notice_bar(app: &App) -> Option<Container<'_, Message>> {
    let notice = app.notice.as_ref()?;
    let color = match notice.kind {
        NoticeKind::Success => OK_COLOR,
        NoticeKind::Error => ERROR_COLOR,
    };
    let content = row![
        text(&notice.text).size(16).color(color),
        horizontal_space(),
        button("OK").on_press(Message::DismissNotice),
    ]
        .spacing(10)
        .align_y(Alignment::Center);

    Some(
        Container::new(content)
            .style(bordered_box)
            .padding(10)
            .width(Length::Fill),
    )
}

/// Dims `base` and puts `content` in a centred box on top.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    width: f32,
) -> Container<'a, Message> {
    let modal = Container::new(content)
        .style(bordered_box)
        .padding(20)
        .width(Length::Fixed(width));

    let overlay = Container::new(
        mouse_area(Container::new(modal).center(Length::Fill).padding(40))
            .on_press(Message::NoOp),
    )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| background(Color { r: 0.0, g: 0.0, b: 0.0, a: 0.7 }));

    Container::new(Stack::new().push(base).push(overlay))
        .width(Length::Fill)
        .height(Length::Fill)
}

/// Labelled text input; read-only when `on_input` is `None`.
pub fn labelled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_input: Option<Box<dyn Fn(String) -> Message + 'a>>,
) -> Column<'a, Message> {
    let mut input = text_input(label, value).padding(8).size(16);
    if let Some(on_input) = on_input {
        input = input.on_input(on_input);
    }
    column![text(label).size(13), input].spacing(4)
}

/// Edit/add form for any record type. `extra` goes under the text fields.
pub fn record_form<'a, R: Editable + Searchable>(
    view: &'a CollectionView<R>,
    fields: &[(&'static str, R::Field)],
    wrap: fn(CollectionMessage<R>) -> Message,
    extra: Option<Element<'a, Message>>,
) -> Column<'a, Message> {
    let title = if view.editor.key_locked() {
        format!("Edit {}", R::NOUN)
    } else {
        format!("Add {}", R::NOUN)
    };
    let mut form = Column::new().spacing(10).push(text(title).size(24));

    if let Some(draft) = view.editor.draft() {
        for &(label, field) in fields {
            let editable = !(field == R::KEY_FIELD && view.editor.key_locked())
                && view.editor.phase() == EditPhase::Editing;
            let on_input: Option<Box<dyn Fn(String) -> Message + 'a>> = if editable {
                Some(Box::new(move |value| wrap(CollectionMessage::FieldChanged(field, value))))
            } else {
                None
            };
            form = form.push(labelled_input(label, draft.field(field), on_input));
        }
    }

    if let Some(extra) = extra {
        form = form.push(extra);
    }

    if view.editor.original().is_some_and(|original| Some(original) != view.editor.draft()) {
        form = form.push(text("Unsaved changes").size(13));
    }

    if let Some(err) = view.editor.error() {
        form = form.push(text(err).color(ERROR_COLOR));
    }

    let saving = view.editor.phase() == EditPhase::Saving;
    form.push(
        Row::new()
            .spacing(10)
            .push(button("Cancel").on_press_maybe((!saving).then(|| wrap(CollectionMessage::Cancel))))
            .push(
                button(if saving { "Saving..." } else { "Save" })
                    .on_press_maybe((!saving).then(|| wrap(CollectionMessage::Save))),
            ),
    )
}

pub fn confirm_delete<'a, R: Editable>(
    pending: &PendingDelete,
    wrap: fn(CollectionMessage<R>) -> Message,
) -> Column<'a, Message> {
    let question = match pending {
        PendingDelete::One(key) => format!("Delete {} {}?", R::NOUN, key),
        PendingDelete::Many(_) => format!("Delete {} selected {}(s)?", pending.count(), R::NOUN),
    };
    column![
        text("Confirm delete").size(24),
        text(question),
        text("This cannot be undone.").size(14),
        row![
            button("Cancel").on_press(wrap(CollectionMessage::DismissDelete)),
            button("Delete").on_press(wrap(CollectionMessage::ConfirmDelete)),
        ]
            .spacing(10),
    ]
        .spacing(12)
}

/// Search box, select-all toggle and bulk actions shared by the CRUD screens.
pub fn collection_toolbar<'a, R: Editable + Searchable>(
    view: &'a CollectionView<R>,
    wrap: fn(CollectionMessage<R>) -> Message,
    placeholder: &'a str,
) -> Row<'a, Message> {
    let select_label = if view.all_selected() { "Deselect all" } else { "Select all" };
    let delete_label = format!("Delete selected ({})", view.selection.len());
    row![
        text_input(placeholder, &view.query)
            .on_input(move |q| wrap(CollectionMessage::QueryChanged(q)))
            .padding(10)
            .size(16)
            .width(Length::Fixed(320.0)),
        button(select_label).on_press(wrap(CollectionMessage::ToggleAll)),
        button(text(delete_label)).on_press_maybe(
            (!view.selection.is_empty() && !view.deletes.is_in_flight())
                .then(|| wrap(CollectionMessage::RequestDeleteSelected)),
        ),
        horizontal_space(),
        button("Refresh").on_press(wrap(CollectionMessage::Refresh)),
        button(text(format!("Add {}", R::NOUN))).on_press(wrap(CollectionMessage::BeginAdd)),
    ]
        .spacing(10)
        .align_y(Alignment::Center)
}

/// Wraps a screen body with the edit form and the delete confirmation when open.
pub fn with_overlays<'a, R: Editable + Searchable>(
    base: Container<'a, Message>,
    view: &'a CollectionView<R>,
    form: Option<Column<'a, Message>>,
    wrap: fn(CollectionMessage<R>) -> Message,
) -> Container<'a, Message> {
    let base = match form {
        Some(form) if view.editor.is_open() => modal(base, form, 460.0),
        _ => base,
    };
    match view.deletes.staged() {
        Some(pending) => modal(base, confirm_delete(pending, wrap), 400.0),
        None => base,
    }
}
