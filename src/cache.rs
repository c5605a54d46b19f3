//! Image cache backing the cached image strategy
//!
//! Resolves a URI to an `iced` image handle. Three kinds of URI are handled:
//!
//! - `asset://...` - rasters bundled with the binary (see [`assets`])
//! - `http(s)://...` - downloaded once with [`fetch`] and kept on disk
//! - anything else - treated as a local file path
//!
//! Lookups never block: a remote image that has not been fetched yet simply
//! resolves to `None` and the renderer draws a placeholder.

pub mod assets;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result, bail};
use iced::widget::image::Handle;
use parking_lot::RwLock;
use tracing::{debug, info, warn};
use xxhash_rust::xxh3::xxh3_64;

/// Extensions a downloaded image may be stored under
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "gif", "webp", "bmp"];

/// Where the pixels for a URI come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOrigin<'a> {
    Asset(&'a str),
    Remote(&'a str),
    Local(&'a Path),
}

/// Classify a URI
pub fn origin(uri: &str) -> ImageOrigin<'_> {
    if let Some(name) = uri.strip_prefix(assets::SCHEME) {
        ImageOrigin::Asset(name)
    } else if uri.starts_with("http://") || uri.starts_with("https://") {
        ImageOrigin::Remote(uri)
    } else {
        ImageOrigin::Local(Path::new(uri.strip_prefix("file://").unwrap_or(uri)))
    }
}

/// Disk-backed cache of image handles keyed by URI
#[derive(Debug)]
pub struct ImageCache {
    cache_dir: PathBuf,
    handles: RwLock<HashMap<String, Handle>>,
    /// Remote URIs whose download failed; not looked up on disk again
    failed: RwLock<HashSet<String>>,
}

impl ImageCache {
    /// Create a cache rooted at `cache_dir`, creating the directory if needed
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&cache_dir).context("Failed to create image cache directory")?;
        Ok(Self {
            cache_dir,
            handles: RwLock::new(HashMap::new()),
            failed: RwLock::new(HashSet::new()),
        })
    }

    /// Cache that never touched the disk; used when `new` fails so the UI
    /// still renders bundled assets and local files
    pub fn detached(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            handles: RwLock::new(HashMap::new()),
            failed: RwLock::new(HashSet::new()),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// File stem under which a remote URI is stored
    pub fn key(uri: &str) -> String {
        format!("{:016x}", xxh3_64(uri.as_bytes()))
    }

    /// Resolve a URI to a handle if its pixels are available right now
    pub fn get(&self, uri: &str) -> Option<Handle> {
        if let Some(handle) = self.handles.read().get(uri) {
            return Some(handle.clone());
        }

        let handle = match origin(uri) {
            ImageOrigin::Asset(name) => assets::handle(name)?,
            ImageOrigin::Local(path) => {
                if !path.is_file() {
                    return None;
                }
                Handle::from_path(path)
            }
            ImageOrigin::Remote(_) => {
                if self.failed.read().contains(uri) {
                    return None;
                }
                Handle::from_path(find_cached_image(&self.cache_dir, &Self::key(uri))?)
            }
        };

        self.handles.write().insert(uri.to_string(), handle.clone());
        Some(handle)
    }

    /// Whether [`fetch`] would do anything for this URI
    pub fn needs_fetch(&self, uri: &str) -> bool {
        matches!(origin(uri), ImageOrigin::Remote(_))
            && !self.has_failed(uri)
            && self.get(uri).is_none()
    }

    /// Remember that downloading `uri` failed
    pub fn mark_failed(&self, uri: &str) {
        self.failed.write().insert(uri.to_string());
    }

    pub fn has_failed(&self, uri: &str) -> bool {
        self.failed.read().contains(uri)
    }

    /// Register a file produced by [`fetch`]
    pub fn insert(&self, uri: &str, path: &Path) {
        debug!("Image cached: {} -> {:?}", uri, path);
        self.failed.write().remove(uri);
        self.handles
            .write()
            .insert(uri.to_string(), Handle::from_path(path));
    }

    /// Forget every in-memory handle and failure; files on disk are kept
    pub fn clear_memory(&self) {
        self.handles.write().clear();
        self.failed.write().clear();
    }

    /// Size and count of the files on disk
    pub fn stats(&self) -> CacheStats {
        let entries = collect_entries(&self.cache_dir);
        CacheStats {
            total_bytes: entries.iter().map(|e| e.size).sum(),
            file_count: entries.len(),
        }
    }

    /// Delete the oldest files until the cache fits in `max_cache_mb`
    pub fn enforce_limit(&self, max_cache_mb: u64) -> ClearResult {
        let max_bytes = max_cache_mb.saturating_mul(1024 * 1024);
        let mut result = ClearResult::default();

        let mut entries = collect_entries(&self.cache_dir);
        let current_size: u64 = entries.iter().map(|e| e.size).sum();

        if current_size <= max_bytes {
            debug!(
                "Image cache size {} MB is within limit {} MB",
                current_size / (1024 * 1024),
                max_cache_mb
            );
            return result;
        }

        // Oldest first
        entries.sort_by(|a, b| a.modified.cmp(&b.modified));
        let target_free = current_size - max_bytes;

        for entry in entries {
            if result.bytes_freed >= target_free {
                break;
            }
            match fs::remove_file(&entry.path) {
                Ok(_) => {
                    result.files_deleted += 1;
                    result.bytes_freed += entry.size;
                }
                Err(e) => {
                    warn!("Failed to delete cache file {:?}: {}", entry.path, e);
                    result.errors += 1;
                }
            }
        }

        // Handles may point at deleted files
        self.clear_memory();

        info!(
            "Image cache cleanup: {} files deleted, {} MB freed (target was {} MB)",
            result.files_deleted,
            result.mb_freed(),
            target_free / (1024 * 1024)
        );

        result
    }

    /// Remove `.tmp` files left behind by interrupted downloads
    pub fn cleanup_temp_files(&self) -> ClearResult {
        let mut result = ClearResult::default();

        for entry in collect_entries(&self.cache_dir) {
            if entry.path.extension().is_none_or(|e| e != "tmp") {
                continue;
            }
            match fs::remove_file(&entry.path) {
                Ok(_) => {
                    result.files_deleted += 1;
                    result.bytes_freed += entry.size;
                }
                Err(e) => {
                    warn!("Failed to delete temp file {:?}: {}", entry.path, e);
                    result.errors += 1;
                }
            }
        }

        if result.files_deleted > 0 {
            info!(
                "Temp file cleanup: {} files deleted, {} bytes freed",
                result.files_deleted, result.bytes_freed
            );
        }

        result
    }
}

/// Download `uri` into `cache_dir` and return the stored file
///
/// Free-standing so it can run inside a `Task` without borrowing the cache.
pub async fn fetch(client: reqwest::Client, cache_dir: PathBuf, uri: String) -> Result<PathBuf> {
    let stem = ImageCache::key(&uri);
    if let Some(existing) = find_cached_image(&cache_dir, &stem) {
        return Ok(existing);
    }

    let response = client
        .get(&uri)
        .send()
        .await
        .with_context(|| format!("Failed to request {uri}"))?;
    if !response.status().is_success() {
        bail!("Image request for {} failed with {}", uri, response.status());
    }
    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read body of {uri}"))?;

    let temp_path = cache_dir.join(format!("{stem}.tmp"));
    tokio::fs::write(&temp_path, &bytes)
        .await
        .context("Failed to write downloaded image")?;

    let final_path = cache_dir.join(format!("{}.{}", stem, detect_image_format(&bytes)));
    if let Err(e) = tokio::fs::rename(&temp_path, &final_path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e).context("Failed to move downloaded image into place");
    }

    Ok(final_path)
}

/// Find an existing cached image file with any known extension
pub fn find_cached_image(dir: &Path, stem: &str) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|p| p.exists())
}

/// Detect image format from magic bytes, returning a file extension
fn detect_image_format(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "png";
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "jpg";
    }
    if bytes.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
        return "gif";
    }
    if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        return "webp";
    }
    if bytes.starts_with(&[0x42, 0x4D]) {
        return "bmp";
    }
    "jpg"
}

/// Information about a cached file
#[derive(Debug)]
struct CacheEntry {
    path: PathBuf,
    size: u64,
    modified: SystemTime,
}

fn collect_entries(dir: &Path) -> Vec<CacheEntry> {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            warn!("Failed to read cache directory {:?}: {}", dir, e);
            return Vec::new();
        }
    };

    read_dir
        .flatten()
        .filter_map(|entry| {
            let metadata = entry.metadata().ok()?;
            if !metadata.is_file() {
                return None;
            }
            Some(CacheEntry {
                path: entry.path(),
                size: metadata.len(),
                modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            })
        })
        .collect()
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub total_bytes: u64,
    pub file_count: usize,
}

impl CacheStats {
    pub fn total_mb(&self) -> u64 {
        self.total_bytes / (1024 * 1024)
    }
}

/// Result of a cleanup pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearResult {
    pub files_deleted: usize,
    pub bytes_freed: u64,
    pub errors: usize,
}

impl ClearResult {
    pub fn mb_freed(&self) -> u64 {
        self.bytes_freed / (1024 * 1024)
    }
}

/// Default location of the image cache
pub fn default_cache_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "albumkit", "Albumkit")
        .map(|dirs| dirs.cache_dir().join("images"))
        .unwrap_or_else(|| PathBuf::from(".cache/images"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache(name: &str) -> ImageCache {
        let dir = std::env::temp_dir().join(format!(
            "albumkit-cache-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        ImageCache::new(dir).expect("temp dir is writable")
    }

    #[test]
    fn key_is_stable_and_distinct() {
        assert_eq!(ImageCache::key("https://x/y.png"), ImageCache::key("https://x/y.png"));
        assert_ne!(ImageCache::key("https://x/y.png"), ImageCache::key("https://x/z.png"));
        assert_eq!(ImageCache::key("https://x/y.png").len(), 16);
    }

    #[test]
    fn classifies_uris() {
        assert_eq!(
            origin("asset://covers/no-playlist"),
            ImageOrigin::Asset("covers/no-playlist")
        );
        assert_eq!(origin("https://x/y.png"), ImageOrigin::Remote("https://x/y.png"));
        assert_eq!(
            origin("file:///tmp/a.png"),
            ImageOrigin::Local(Path::new("/tmp/a.png"))
        );
        assert_eq!(origin(""), ImageOrigin::Local(Path::new("")));
    }

    #[test]
    fn remote_image_resolves_once_on_disk() {
        let cache = temp_cache("remote");
        let uri = "https://example.com/cover.png";

        assert!(cache.get(uri).is_none());
        assert!(cache.needs_fetch(uri));

        let path = cache.cache_dir().join(format!("{}.png", ImageCache::key(uri)));
        fs::write(&path, [0x89, 0x50, 0x4E, 0x47]).expect("write");

        assert!(cache.get(uri).is_some());
        assert!(!cache.needs_fetch(uri));
        let _ = fs::remove_dir_all(cache.cache_dir());
    }

    #[test]
    fn bundled_assets_never_need_fetching() {
        let cache = temp_cache("assets");
        assert!(cache.get(crate::ui::theme::NO_PLAYLIST_COVER).is_some());
        assert!(!cache.needs_fetch(crate::ui::theme::NO_PLAYLIST_COVER));
        let _ = fs::remove_dir_all(cache.cache_dir());
    }

    #[test]
    fn enforce_limit_and_temp_cleanup() {
        let cache = temp_cache("limit");
        fs::write(cache.cache_dir().join("a.jpg"), vec![0u8; 1024]).expect("write");
        fs::write(cache.cache_dir().join("b.tmp"), vec![0u8; 10]).expect("write");

        assert_eq!(cache.stats().file_count, 2);
        assert_eq!(cache.enforce_limit(1), ClearResult::default());

        let cleaned = cache.cleanup_temp_files();
        assert_eq!(cleaned.files_deleted, 1);
        assert_eq!(cleaned.bytes_freed, 10);
        assert_eq!(cache.stats().file_count, 1);

        let cleared = cache.enforce_limit(0);
        assert_eq!(cleared.files_deleted, 1);
        assert_eq!(cache.stats(), CacheStats::default());
        let _ = fs::remove_dir_all(cache.cache_dir());
    }

    #[test]
    fn failed_download_is_not_retried_until_cleared() {
        let cache = temp_cache("failed");
        let uri = "https://example.com/missing.png";

        cache.mark_failed(uri);
        assert!(cache.has_failed(uri));
        assert!(!cache.needs_fetch(uri));

        // Even a file that shows up later is ignored while the failure stands
        let path = cache.cache_dir().join(format!("{}.png", ImageCache::key(uri)));
        fs::write(&path, [0x89, 0x50, 0x4E, 0x47]).expect("write");
        assert!(cache.get(uri).is_none());

        cache.clear_memory();
        assert!(!cache.has_failed(uri));
        assert!(cache.get(uri).is_some());
        let _ = fs::remove_dir_all(cache.cache_dir());
    }

    #[test]
    fn successful_insert_clears_failure() {
        let cache = temp_cache("recovered");
        let uri = "https://example.com/late.png";
        let path = cache.cache_dir().join(format!("{}.png", ImageCache::key(uri)));
        fs::write(&path, [0x89, 0x50, 0x4E, 0x47]).expect("write");

        cache.mark_failed(uri);
        cache.insert(uri, &path);
        assert!(!cache.has_failed(uri));
        assert!(cache.get(uri).is_some());
        let _ = fs::remove_dir_all(cache.cache_dir());
    }

    #[test]
    fn huge_limit_keeps_every_file() {
        let cache = temp_cache("huge-limit");
        fs::write(cache.cache_dir().join("a.jpg"), vec![0u8; 1024]).expect("write");

        assert_eq!(cache.enforce_limit(u64::MAX), ClearResult::default());
        assert_eq!(cache.enforce_limit(1 << 44), ClearResult::default());
        assert_eq!(cache.stats().file_count, 1);
        let _ = fs::remove_dir_all(cache.cache_dir());
    }

    #[test]
    fn detects_common_formats() {
        assert_eq!(detect_image_format(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]), "png");
        assert_eq!(detect_image_format(&[0xFF, 0xD8, 0xFF, 0xE0]), "jpg");
        assert_eq!(detect_image_format(b"RIFF\0\0\0\0WEBPVP8 "), "webp");
        assert_eq!(detect_image_format(b"??"), "jpg");
    }
}
