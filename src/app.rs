//! Demo application: one album list screen

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use albumkit::cache::ImageCache;
use albumkit::settings::Settings;

pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let cache_dir = settings.storage.resolved_cache_dir();
        let images = match ImageCache::new(cache_dir.clone()) {
            Ok(images) => {
                images.cleanup_temp_files();
                images.enforce_limit(settings.storage.max_cache_mb);
                images
            }
            Err(e) => {
                tracing::warn!("Image cache unavailable, covers will not be stored: {:#}", e);
                ImageCache::detached(cache_dir)
            }
        };

        let library_path = settings.library.path.clone();
        let app = Self::with_parts(settings, images);

        (
            app,
            Task::perform(update::load_library(library_path), Message::RecordsLoaded),
        )
    }

    pub fn title(&self) -> String {
        match self.last_opened() {
            Some(id) => format!("Albumkit - {id}"),
            None => "Albumkit".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
