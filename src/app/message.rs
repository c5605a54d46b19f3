//! Application messages

use std::path::PathBuf;

use albumkit::MediaRecord;

#[derive(Debug, Clone)]
pub enum Message {
    /// Library file read (or samples substituted)
    RecordsLoaded(Result<Vec<MediaRecord>, String>),
    /// A cover download finished
    ImageFetched(String, Result<PathBuf, String>),
    /// A row was activated
    OpenAlbum(String),
}
