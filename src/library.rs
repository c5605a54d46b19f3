//! Album records supplied to list rows
//!
//! The collection itself belongs to the application; this module only
//! defines the record shape and how to read a collection from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An album-like entry shown in a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Stable within a session
    pub id: String,
    pub name: String,
    pub owner: String,
    #[serde(default, alias = "url", skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// Which cover a record should show, derived once per record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverArt<'a> {
    Present(&'a str),
    Missing,
}

impl MediaRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
            cover_url: None,
        }
    }

    pub fn with_cover(mut self, url: impl Into<String>) -> Self {
        self.cover_url = Some(url.into());
        self
    }

    /// Only an absent or empty reference counts as missing; anything else is
    /// handed to the cover as is
    pub fn cover(&self) -> CoverArt<'_> {
        match self.cover_url.as_deref() {
            Some(url) if !url.is_empty() => CoverArt::Present(url),
            _ => CoverArt::Missing,
        }
    }
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read library file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse library file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read a JSON array of records
pub fn load_records(path: &Path) -> Result<Vec<MediaRecord>, LibraryError> {
    let content = std::fs::read_to_string(path)?;
    parse_records(&content)
}

pub fn parse_records(json: &str) -> Result<Vec<MediaRecord>, LibraryError> {
    Ok(serde_json::from_str(json)?)
}

/// Records shown when no library file is configured
pub fn sample_records() -> Vec<MediaRecord> {
    vec![
        MediaRecord::new("a1", "Long Album Title Exceeding Width Of The Row", "Artist X"),
        MediaRecord::new("a2", "Night Drive", "Neon Coast")
            .with_cover("https://picsum.photos/seed/night-drive/200"),
        MediaRecord::new("a3", "Field Recordings", "Various Artists").with_cover(""),
        MediaRecord::new("a4", "Morning Light", "Aurora Lane")
            .with_cover("https://picsum.photos/seed/morning-light/200"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_branch_is_total() {
        let record = MediaRecord::new("a1", "Album", "Owner");
        assert_eq!(record.cover(), CoverArt::Missing);
        assert_eq!(record.clone().with_cover("").cover(), CoverArt::Missing);
        assert_eq!(
            record.clone().with_cover("   ").cover(),
            CoverArt::Present("   ")
        );
        assert_eq!(
            record.with_cover("https://x/y.png").cover(),
            CoverArt::Present("https://x/y.png")
        );
    }

    #[test]
    fn parses_records_with_and_without_cover() {
        let json = r#"[
            {"id": "a1", "name": "One", "owner": "Me"},
            {"id": "a2", "name": "Two", "owner": "You", "url": "https://x/y.png"}
        ]"#;
        let records = parse_records(json).expect("valid json");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cover_url, None);
        assert_eq!(records[1].cover(), CoverArt::Present("https://x/y.png"));
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let json = r#"[{"id": "a1", "name": "One"}]"#;
        assert!(matches!(parse_records(json), Err(LibraryError::Parse(_))));
    }

    #[test]
    fn sample_ids_are_unique() {
        let records = sample_records();
        let mut ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }
}
