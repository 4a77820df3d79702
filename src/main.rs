mod account;
mod api;
mod app;
mod config;
mod error;
mod photo;
mod records;
mod screens;
mod session;
mod sync;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use api::KioskApi;
use app::App;
use config::AppConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Kiosk admin starting against {}", config.api_base_url);
    let api = KioskApi::new(&config.api_base_url)?;

    iced::application("Kiosk Admin", App::update, App::view)
        .subscription(App::subscription)
        .theme(|app: &App| app.theme.clone())
        .window_size(iced::Size::new(1400.0, 800.0))
        .run_with(move || {
            let mut app = App::new(config, api);
            let task = app.boot();
            (app, task)
        })?;
    Ok(())
}
