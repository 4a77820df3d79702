pub mod common;
pub mod dashboard;
pub mod login;
pub mod nav_menu;
pub mod register;
pub mod settings;
pub mod students;
pub mod teachers;

pub use dashboard::dashboard_screen;
pub use login::login_screen;
pub use nav_menu::nav_menu;
pub use register::register_screen;
pub use settings::settings_screen;
pub use students::students_screen;
pub use teachers::teachers_screen;
