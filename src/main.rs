//! Albumkit - album list components rendered with iced

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .antialiasing(true)
        .run()
}
