use iced::Theme;
use crate::account::{AccountForm, LoginForm};
use crate::api::KioskApi;
use crate::config::AppConfig;
use crate::error::KioskError;
use crate::records::{Room, StatusReport, Student, Teacher};
use crate::session::SessionStore;
use crate::sync::{Applied, CollectionView, LiveCollection};

pub struct App {
    pub config: AppConfig,
    pub api: KioskApi,
    pub session: SessionStore,
    pub theme: Theme,
    //
    pub current_screen: Screen,
    pub notice: Option<Notice>,
    //
    pub login: LoginForm,
    pub account: AccountForm,
    //
    pub dashboard: Dashboard,
    pub students: CollectionView<Student>,
    pub teachers: CollectionView<Teacher>,
}

impl App {
    pub fn new(config: AppConfig, api: KioskApi) -> Self {
        let session = SessionStore::load(config.session_file.clone());
        Self {
            theme: config.theme.clone(),
            config,
            api,
            session,
            current_screen: Screen::Dashboard,
            notice: None,
            login: LoginForm::default(),
            account: AccountForm::default(),
            dashboard: Dashboard::default(),
            students: CollectionView::new(),
            teachers: CollectionView::new(),
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        post_notice(&mut self.notice, notice);
    }
}

/// Replaces whatever notice is showing; every notice is also logged.
pub fn post_notice(slot: &mut Option<Notice>, notice: Notice) {
    match notice.kind {
        NoticeKind::Error => tracing::warn!("{}", notice.text),
        NoticeKind::Success => tracing::info!("{}", notice.text),
    }
    *slot = Some(notice);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Login,
    Register,
    Students,
    Teachers,
    Settings,
}

impl Screen {
    pub fn requires_admin(self) -> bool {
        matches!(self, Screen::Students | Screen::Teachers)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot message shown until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

impl From<KioskError> for Notice {
    fn from(err: KioskError) -> Self {
        Notice::error(err.to_string())
    }
}

/// Live room board. Rooms and staff come from the same feed; the staff list
/// only moves when the room snapshot is replaced.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub rooms: LiveCollection<Room>,
    pub staff: Vec<Teacher>,
    pub lookup: StudentLookup,
}

impl Dashboard {
    pub fn apply(&mut self, ticket: u64, result: Result<StatusReport, KioskError>) -> Applied {
        match result {
            Ok(report) => {
                let applied = self.rooms.apply(ticket, Ok(report.rooms));
                if applied == Applied::Replaced {
                    self.staff = report.teachers;
                }
                applied
            }
            Err(err) => self.rooms.apply(ticket, Err(err)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StudentLookup {
    pub query: String,
    pub result: Option<Student>,
    pub pending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::LockStatus;

    fn report() -> StatusReport {
        StatusReport {
            teachers: vec![Teacher { staff_id: "T1".into(), full_name: "Kru A".into(), ..Default::default() }],
            rooms: vec![Room { room_id: "R1".into(), room_name: "Lab".into(), lock_status: LockStatus::Locked }],
            timestamp: None,
        }
    }

    #[test]
    fn dashboard_takes_rooms_and_staff_from_one_feed() {
        let mut dashboard = Dashboard::default();
        let ticket = dashboard.rooms.mount();
        assert_eq!(dashboard.apply(ticket, Ok(report())), Applied::Replaced);
        assert_eq!(dashboard.rooms.items().len(), 1);
        assert_eq!(dashboard.staff[0].staff_id, "T1");
    }

    #[test]
    fn stale_feed_does_not_touch_staff() {
        let mut dashboard = Dashboard::default();
        let ticket = dashboard.rooms.mount();
        dashboard.rooms.detach();
        assert_eq!(dashboard.apply(ticket, Ok(report())), Applied::Discarded);
        assert!(dashboard.staff.is_empty());
    }

    #[test]
    fn only_crud_screens_need_a_session() {
        assert!(Screen::Students.requires_admin());
        assert!(Screen::Teachers.requires_admin());
        assert!(!Screen::Dashboard.requires_admin());
    }
}
