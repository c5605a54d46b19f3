//! Message handling

use std::collections::HashSet;
use std::path::PathBuf;

use iced::Task;
use tracing::{debug, info, warn};

use albumkit::cache;
use albumkit::library::{self, CoverArt, MediaRecord};

use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RecordsLoaded(Ok(records)) => {
                info!("Loaded {} albums", records.len());
                self.records = records;
                self.load_error = None;
                self.fetch_missing_covers()
            }
            Message::RecordsLoaded(Err(e)) => {
                warn!("Failed to load library: {}", e);
                self.load_error = Some(e);
                Task::none()
            }
            Message::ImageFetched(uri, Ok(path)) => {
                self.images.insert(&uri, &path);
                Task::none()
            }
            Message::ImageFetched(uri, Err(e)) => {
                warn!("Failed to fetch cover {}: {}", uri, e);
                self.images.mark_failed(&uri);
                Task::none()
            }
            Message::OpenAlbum(id) => {
                info!("Open album {}", id);
                self.last_opened = Some(id);
                Task::none()
            }
        }
    }

    /// Remote covers not yet on disk, each listed once in record order
    pub fn covers_to_fetch(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter_map(|record| match record.cover() {
                CoverArt::Present(uri) if self.images.needs_fetch(uri) => Some(uri),
                _ => None,
            })
            .filter(|uri| seen.insert(*uri))
            .map(str::to_string)
            .collect()
    }

    /// One download task per remote cover not yet on disk
    fn fetch_missing_covers(&self) -> Task<Message> {
        let tasks: Vec<_> = self
            .covers_to_fetch()
            .into_iter()
            .map(|uri| {
                debug!("Fetching cover {}", uri);
                let fetch = cache::fetch(
                    self.client.clone(),
                    self.images.cache_dir().to_path_buf(),
                    uri.clone(),
                );
                Task::perform(fetch, move |result| {
                    Message::ImageFetched(uri.clone(), result.map_err(|e| format!("{e:#}")))
                })
            })
            .collect();

        Task::batch(tasks)
    }
}

/// Read the configured library file, or fall back to the built-in samples
pub async fn load_library(path: Option<PathBuf>) -> Result<Vec<MediaRecord>, String> {
    let Some(path) = path else {
        return Ok(library::sample_records());
    };
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    library::parse_records(&content).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use albumkit::cache::ImageCache;
    use albumkit::settings::Settings;

    fn app_with(records: Vec<MediaRecord>) -> App {
        let dir = std::env::temp_dir().join(format!("albumkit-app-{}", std::process::id()));
        let mut app = App::with_parts(Settings::default(), ImageCache::detached(dir));
        app.records = records;
        app
    }

    #[test]
    fn shared_cover_is_fetched_once() {
        let shared = "https://example.com/shared.png";
        let app = app_with(vec![
            MediaRecord::new("a1", "One", "Me").with_cover(shared),
            MediaRecord::new("a2", "Two", "You").with_cover("https://example.com/other.png"),
            MediaRecord::new("a3", "Three", "Them").with_cover(shared),
            MediaRecord::new("a4", "Four", "Us"),
        ]);

        assert_eq!(
            app.covers_to_fetch(),
            [shared, "https://example.com/other.png"]
        );
    }

    #[test]
    fn failed_cover_is_not_fetched_again() {
        let uri = "https://example.com/broken.png";
        let mut app = app_with(vec![MediaRecord::new("a1", "One", "Me").with_cover(uri)]);

        let _ = app.update(Message::ImageFetched(uri.to_string(), Err("404".to_string())));

        assert!(app.covers_to_fetch().is_empty());
    }

    #[test]
    fn opening_an_album_records_its_id() {
        let mut app = app_with(library::sample_records());
        let _ = app.update(Message::OpenAlbum("a2".to_string()));
        assert_eq!(app.last_opened(), Some("a2"));
    }
}
