use crate::account::AccountMode;
use crate::error::KioskError;
use crate::records::{Ack, Editable, SessionUser, StatusReport, Student, Teacher};

#[derive(Debug, Clone)]
pub enum Message {
    GoToDashboard,
    GoToStudents,
    GoToTeachers,
    GoToSettings,
    GoToLogin,
    GoToRegister,
    Logout,
    //
    ThemeSelected(&'static str),
    DismissNotice,
    //
    LoginEmailChanged(String),
    LoginPasswordChanged(String),
    LoginPressed,
    LoggedIn(Result<SessionUser, KioskError>),
    //
    AccountModeSelected(AccountMode),
    AccountFullNameChanged(String),
    AccountEmailChanged(String),
    AccountPasswordChanged(String),
    AccountPasswordRepeatChanged(String),
    AccountSubmitPressed,
    AccountSubmitted(AccountMode, Result<Ack, KioskError>),
    // Dashboard
    DashboardTick,
    DashboardFetched(u64, Result<StatusReport, KioskError>),
    LookupQueryChanged(String),
    LookupPressed,
    LookupFinished(Result<Option<Student>, KioskError>),
    EditLookedUpStudent(Student),
    ClearLookup,
    // CRUD screens
    Students(CollectionMessage<Student>),
    Teachers(CollectionMessage<Teacher>),
    ChoosePhoto,
    PhotoChosen(Result<Option<String>, KioskError>),
    RemovePhoto,
    NoOp,
}

/// Messages every CRUD screen understands, whatever the record type.
#[derive(Debug, Clone)]
pub enum CollectionMessage<R: Editable> {
    Refresh,
    Fetched(u64, Result<Vec<R>, KioskError>),
    QueryChanged(String),
    ToggleSelected(String),
    ToggleAll,
    BeginAdd,
    BeginEdit(R),
    FieldChanged(R::Field, String),
    Cancel,
    Save,
    Saved(Result<Ack, KioskError>),
    RequestDelete(String),
    RequestDeleteSelected,
    ConfirmDelete,
    DismissDelete,
    Deleted(Result<Ack, KioskError>),
}
