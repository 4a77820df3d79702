use iced::{Subscription, Task};
use crate::account::AccountMode;
use crate::api::KioskApi;
use crate::config::theme_from_str;
use crate::photo;
use crate::records::{Editable, Resource, StudentField};
use crate::sync::{Applied, CollectionView, PendingDelete, SaveRequest, Searchable};
use super::messages::CollectionMessage;
use super::state::{post_notice, Notice, Screen};
use super::{App, Message};

impl App {
    pub fn boot(&mut self) -> Task<Message> {
        self.navigate(Screen::Dashboard)
    }

    /// The room board polls only while it is on screen.
    pub fn is_polling(&self) -> bool {
        self.current_screen == Screen::Dashboard
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Dropped as soon as the dashboard is left, which stops the timer.
        if self.is_polling() {
            iced::time::every(self.config.poll.interval).map(|_| Message::DashboardTick)
        } else {
            Subscription::none()
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GoToDashboard => self.navigate(Screen::Dashboard),
            Message::GoToStudents => self.navigate(Screen::Students),
            Message::GoToTeachers => self.navigate(Screen::Teachers),
            Message::GoToSettings => self.navigate(Screen::Settings),
            Message::GoToLogin => self.navigate(Screen::Login),
            Message::GoToRegister => self.navigate(Screen::Register),
            Message::Logout => {
                if let Err(err) = self.session.sign_out() {
                    tracing::error!("Could not remove session file: {}", err);
                }
                self.notify(Notice::success("Signed out"));
                self.navigate(Screen::Dashboard)
            }
            Message::ThemeSelected(name) => {
                if let Some(theme) = theme_from_str(name) {
                    if let Err(err) = self.config.set_theme(theme.clone()) {
                        tracing::warn!("Could not save theme: {}", err);
                    }
                    self.theme = theme;
                }
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::LoginEmailChanged(v) => {
                self.login.email = v;
                Task::none()
            }
            Message::LoginPasswordChanged(v) => {
                self.login.password = v;
                Task::none()
            }
            Message::LoginPressed => {
                let (email, password) = match self.login.validate() {
                    Ok(credentials) => credentials,
                    Err(err) => {
                        self.login.error = Some(err.to_string());
                        return Task::none();
                    }
                };
                self.login.error = None;
                self.login.pending = true;
                let api = self.api.clone();
                Task::perform(async move { api.login(&email, &password).await }, Message::LoggedIn)
            }
            Message::LoggedIn(result) => {
                self.login.pending = false;
                match result {
                    Ok(user) => {
                        let greeting = format!("Welcome back, {}", user.full_name);
                        if let Err(err) = self.session.sign_in(user) {
                            tracing::error!("Could not persist session: {}", err);
                        }
                        self.login.clear();
                        self.notify(Notice::success(greeting));
                        self.navigate(Screen::Dashboard)
                    }
                    Err(err) => {
                        tracing::warn!("Login failed: {}", err);
                        self.login.error = Some(err.to_string());
                        Task::none()
                    }
                }
            }
            Message::AccountModeSelected(mode) => {
                self.account.switch_mode(mode);
                Task::none()
            }
            Message::AccountFullNameChanged(v) => {
                self.account.full_name = v;
                Task::none()
            }
            Message::AccountEmailChanged(v) => {
                self.account.email = v;
                Task::none()
            }
            Message::AccountPasswordChanged(v) => {
                self.account.password = v;
                Task::none()
            }
            Message::AccountPasswordRepeatChanged(v) => {
                self.account.password_repeat = v;
                Task::none()
            }
            Message::AccountSubmitPressed => {
                self.account.success = None;
                let request = match self.account.validate() {
                    Ok(request) => request,
                    Err(err) => {
                        self.account.error = Some(err.to_string());
                        return Task::none();
                    }
                };
                self.account.error = None;
                self.account.pending = true;
                let api = self.api.clone();
                let mode = request.mode;
                Task::perform(
                    async move {
                        match request.mode {
                            AccountMode::Register => {
                                api.register(&request.full_name, &request.email, &request.password).await
                            }
                            AccountMode::ResetPassword => {
                                api.update_password(&request.email, &request.password).await
                            }
                        }
                    },
                    move |result| Message::AccountSubmitted(mode, result),
                )
            }
            Message::AccountSubmitted(mode, result) => {
                self.account.pending = false;
                match result {
                    Ok(_) => {
                        let text = match mode {
                            AccountMode::Register => "Registration successful",
                            AccountMode::ResetPassword => "Password updated successfully",
                        };
                        self.account.clear_inputs();
                        self.account.success = Some(text.to_string());
                        self.notify(Notice::success(text));
                        self.navigate(Screen::Login)
                    }
                    Err(err) => {
                        self.account.error = Some(err.to_string());
                        Task::none()
                    }
                }
            }
            Message::DashboardTick => self.fetch_dashboard(),
            Message::DashboardFetched(ticket, result) => {
                match self.dashboard.apply(ticket, result) {
                    Applied::Replaced => {
                        tracing::debug!("Dashboard refreshed: {} room(s)", self.dashboard.rooms.items().len());
                    }
                    // Shown inline on the board; a notice every tick would be noise.
                    Applied::Failed(err) => tracing::warn!("Dashboard refresh failed: {}", err),
                    Applied::Discarded => {}
                }
                Task::none()
            }
            Message::LookupQueryChanged(v) => {
                self.dashboard.lookup.query = v;
                Task::none()
            }
            Message::LookupPressed => {
                let student_id = self.dashboard.lookup.query.trim().to_string();
                if student_id.is_empty() || self.dashboard.lookup.pending {
                    return Task::none();
                }
                self.dashboard.lookup.pending = true;
                let api = self.api.clone();
                Task::perform(async move { api.fetch_one(&student_id).await }, Message::LookupFinished)
            }
            Message::LookupFinished(result) => {
                self.dashboard.lookup.pending = false;
                match result {
                    Ok(Some(student)) => self.dashboard.lookup.result = Some(student),
                    Ok(None) => {
                        self.dashboard.lookup.result = None;
                        self.notify(Notice::error("Student not found"));
                    }
                    Err(err) => self.notify(err.into()),
                }
                Task::none()
            }
            Message::EditLookedUpStudent(student) => {
                let task = self.navigate(Screen::Students);
                if self.current_screen == Screen::Students {
                    self.students.editor.begin_edit(student);
                }
                task
            }
            Message::ClearLookup => {
                self.dashboard.lookup = Default::default();
                Task::none()
            }
            Message::Students(message) => {
                update_collection(&mut self.students, &self.api, &mut self.notice, message)
                    .map(Message::Students)
            }
            Message::Teachers(message) => {
                update_collection(&mut self.teachers, &self.api, &mut self.notice, message)
                    .map(Message::Teachers)
            }
            Message::ChoosePhoto => {
                if !self.students.editor.is_open() {
                    return Task::none();
                }
                Task::perform(photo::pick_photo(), Message::PhotoChosen)
            }
            Message::PhotoChosen(result) => {
                match result {
                    Ok(Some(data_url)) => {
                        if let Err(err) = self.students.editor.mutate_field(StudentField::Image, data_url) {
                            self.notify(err.into());
                        }
                    }
                    Ok(None) => tracing::debug!("Photo selection cancelled"),
                    Err(err) => self.notify(err.into()),
                }
                Task::none()
            }
            Message::RemovePhoto => {
                if let Err(err) = self.students.editor.mutate_field(StudentField::Image, String::new()) {
                    self.notify(err.into());
                }
                Task::none()
            }
            Message::NoOp => Task::none(),
        }
    }

    /// Tears down the screen being left and mounts the next one.
    fn navigate(&mut self, screen: Screen) -> Task<Message> {
        if screen.requires_admin() && !self.session.is_admin() {
            self.notify(Notice::error("Please sign in as an administrator first"));
            return self.navigate(Screen::Login);
        }

        match self.current_screen {
            Screen::Dashboard => self.dashboard.rooms.detach(),
            Screen::Students => self.students.detach(),
            Screen::Teachers => self.teachers.detach(),
            _ => {}
        }
        tracing::debug!("Screen {:?} -> {:?}", self.current_screen, screen);
        self.current_screen = screen;

        match screen {
            Screen::Dashboard => {
                self.dashboard.rooms.mount();
                self.fetch_dashboard()
            }
            Screen::Students => {
                let ticket = self.students.mount();
                fetch_collection(&self.api, ticket).map(Message::Students)
            }
            Screen::Teachers => {
                let ticket = self.teachers.mount();
                fetch_collection(&self.api, ticket).map(Message::Teachers)
            }
            Screen::Login => {
                self.login.error = None;
                Task::none()
            }
            Screen::Register => {
                self.account.error = None;
                self.account.success = None;
                Task::none()
            }
            Screen::Settings => Task::none(),
        }
    }

    fn fetch_dashboard(&self) -> Task<Message> {
        let Some(ticket) = self.dashboard.rooms.ticket() else {
            return Task::none();
        };
        let api = self.api.clone();
        Task::perform(
            async move { api.fetch_status().await },
            move |result| Message::DashboardFetched(ticket, result),
        )
    }
}

fn fetch_collection<R: Editable>(api: &KioskApi, ticket: u64) -> Task<CollectionMessage<R>> {
    let api = api.clone();
    Task::perform(
        async move { api.fetch_all::<R>().await },
        move |result| CollectionMessage::Fetched(ticket, result),
    )
}

/// Refetch after a write; skipped once the screen is gone.
fn refresh<R: Editable + Searchable>(view: &CollectionView<R>, api: &KioskApi) -> Task<CollectionMessage<R>> {
    match view.live.ticket() {
        Some(ticket) => fetch_collection(api, ticket),
        None => Task::none(),
    }
}

pub fn update_collection<R: Editable + Searchable>(
    view: &mut CollectionView<R>,
    api: &KioskApi,
    notice: &mut Option<Notice>,
    message: CollectionMessage<R>,
) -> Task<CollectionMessage<R>> {
    match message {
        CollectionMessage::Refresh => refresh(view, api),
        CollectionMessage::Fetched(ticket, result) => {
            match view.apply_fetch(ticket, result) {
                Applied::Replaced => tracing::debug!("Loaded {} {}(s)", view.live.items().len(), R::NOUN),
                Applied::Failed(err) => {
                    post_notice(notice, Notice::error(format!("Failed to load {}s: {}", R::NOUN, err)));
                }
                Applied::Discarded => {}
            }
            Task::none()
        }
        CollectionMessage::QueryChanged(query) => {
            view.query = query;
            Task::none()
        }
        CollectionMessage::ToggleSelected(key) => {
            view.selection.toggle(&key);
            Task::none()
        }
        CollectionMessage::ToggleAll => {
            view.toggle_all();
            Task::none()
        }
        CollectionMessage::BeginAdd => {
            view.editor.begin_add();
            Task::none()
        }
        CollectionMessage::BeginEdit(record) => {
            view.editor.begin_edit(record);
            Task::none()
        }
        CollectionMessage::FieldChanged(field, value) => {
            if let Err(err) = view.editor.mutate_field(field, value) {
                post_notice(notice, err.into());
            }
            Task::none()
        }
        CollectionMessage::Cancel => {
            view.editor.cancel();
            Task::none()
        }
        CollectionMessage::Save => match view.editor.save() {
            Ok(request) => {
                tracing::debug!("Saving {} {}", R::NOUN, request.record().key());
                let api = api.clone();
                Task::perform(
                    async move {
                        match request {
                            SaveRequest::Create(record) => api.create(&record).await,
                            SaveRequest::Update(record) => api.update(&record).await,
                        }
                    },
                    CollectionMessage::Saved,
                )
            }
            Err(err) => {
                post_notice(notice, err.into());
                Task::none()
            }
        },
        CollectionMessage::Saved(Ok(ack)) => {
            view.editor.save_succeeded();
            post_notice(notice, Notice::success(ack_text(&ack.message, "Saved successfully")));
            refresh(view, api)
        }
        CollectionMessage::Saved(Err(err)) => {
            // Draft stays so nothing typed is lost.
            view.editor.save_failed(&err);
            post_notice(notice, err.into());
            Task::none()
        }
        CollectionMessage::RequestDelete(key) => {
            view.deletes.request_one(&key);
            Task::none()
        }
        CollectionMessage::RequestDeleteSelected => {
            view.deletes.request_selected(&view.selection);
            Task::none()
        }
        CollectionMessage::ConfirmDelete => {
            let Some(pending) = view.deletes.confirm() else {
                return Task::none();
            };
            let api = api.clone();
            Task::perform(
                async move {
                    match pending {
                        PendingDelete::One(key) => api.delete_one::<R>(&key).await,
                        PendingDelete::Many(keys) => api.delete_many::<R>(&keys).await,
                    }
                },
                CollectionMessage::Deleted,
            )
        }
        CollectionMessage::DismissDelete => {
            view.deletes.dismiss();
            Task::none()
        }
        CollectionMessage::Deleted(Ok(ack)) => {
            view.delete_succeeded();
            post_notice(notice, Notice::success(ack_text(&ack.message, "Deleted successfully")));
            refresh(view, api)
        }
        CollectionMessage::Deleted(Err(err)) => {
            view.delete_failed();
            post_notice(notice, err.into());
            Task::none()
        }
    }
}

fn ack_text(message: &str, fallback: &str) -> String {
    if message.trim().is_empty() { fallback.to_string() } else { message.to_string() }
}
