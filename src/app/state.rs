//! Application state

use albumkit::MediaRecord;
use albumkit::cache::ImageCache;
use albumkit::settings::Settings;

/// Main application state
pub struct App {
    pub settings: Settings,
    pub images: ImageCache,
    pub client: reqwest::Client,
    /// Empty until the library task completes
    pub records: Vec<MediaRecord>,
    pub load_error: Option<String>,
    pub last_opened: Option<String>,
}

impl App {
    pub fn with_parts(settings: Settings, images: ImageCache) -> Self {
        Self {
            settings,
            images,
            client: reqwest::Client::new(),
            records: Vec::new(),
            load_error: None,
            last_opened: None,
        }
    }

    pub fn last_opened(&self) -> Option<&str> {
        self.last_opened.as_deref()
    }
}
