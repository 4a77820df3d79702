use std::fs;
use std::path::PathBuf;
use iced::Theme;
use serde::{Deserialize, Serialize};
use crate::sync::PollSchedule;

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 3000;
pub const DEFAULT_SESSION_FILE: &str = "session.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of `config.json`. Every field is optional so older files keep loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Resolved settings: file values, then environment overrides, then defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub poll: PollSchedule,
    pub session_file: PathBuf,
    pub log_level: String,
    pub theme: Theme,
    file: Config,
}

impl AppConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::resolve(load_config(), |key| std::env::var(key).ok())
    }

    pub fn resolve(file: Option<Config>, env: impl Fn(&str) -> Option<String>) -> Self {
        let file = file.unwrap_or_default();

        let api_base_url = env("KIOSK_API_URL")
            .or_else(|| file.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let poll_ms = match env("KIOSK_POLL_INTERVAL_MS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid KIOSK_POLL_INTERVAL_MS {:?}, using default", raw);
                DEFAULT_POLL_INTERVAL_MS
            }),
            None => file.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS),
        };

        let session_file = env("KIOSK_SESSION_FILE")
            .or_else(|| file.session_file.clone())
            .unwrap_or_else(|| DEFAULT_SESSION_FILE.to_string())
            .into();

        let log_level = env("KIOSK_LOG")
            .or_else(|| file.log_level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let theme = theme_from_str(&file.theme_name).unwrap_or(Theme::Light);

        Self {
            api_base_url,
            poll: PollSchedule::from_millis(poll_ms),
            session_file,
            log_level,
            theme,
            file,
        }
    }

    /// Remembers the theme and writes the file back, keeping the other keys.
    pub fn set_theme(&mut self, theme: Theme) -> std::io::Result<()> {
        self.file.theme_name = theme_to_str(&theme).to_string();
        self.theme = theme;
        save_config(&self.file)
    }
}

pub fn theme_from_str(name: &str) -> Option<Theme> {
    Theme::ALL
        .iter()
        .find(|t| theme_to_str(t).eq_ignore_ascii_case(name))
        .cloned()
}

pub fn save_config(config: &Config) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(CONFIG_FILE, json)?;
    Ok(())
}

pub fn load_config() -> Option<Config> {
    let contents = fs::read_to_string(CONFIG_FILE).ok()?;
    serde_json::from_str(&contents).ok()
}

pub fn theme_to_str(theme: &Theme) -> &'static str {
    match theme {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
        Theme::Dracula => "Dracula",
        Theme::Nord => "Nord",
        Theme::SolarizedLight => "SolarizedLight",
        Theme::SolarizedDark => "SolarizedDark",
        Theme::GruvboxLight => "GruvboxLight",
        Theme::GruvboxDark => "GruvboxDark",
        Theme::CatppuccinLatte => "CatppuccinLatte",
        Theme::CatppuccinFrappe => "CatppuccinFrappe",
        Theme::CatppuccinMacchiato => "CatppuccinMacchiato",
        Theme::CatppuccinMocha => "CatppuccinMocha",
        Theme::TokyoNight => "TokyoNight",
        Theme::TokyoNightStorm => "TokyoNightStorm",
        Theme::TokyoNightLight => "TokyoNightLight",
        Theme::KanagawaWave => "KanagawaWave",
        Theme::KanagawaDragon => "KanagawaDragon",
        Theme::KanagawaLotus => "KanagawaLotus",
        Theme::Moonfly => "Moonfly",
        Theme::Nightfly => "Nightfly",
        Theme::Oxocarbon => "Oxocarbon",
        Theme::Ferra => "Ferra",
        _ => "Unknown",
    }
}
