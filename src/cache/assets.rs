//! Images bundled with the binary, addressed as `asset://<name>`
//!
//! Rasters are generated once with the `image` crate instead of shipping
//! binary files.

use iced::widget::image::Handle;
use image::{Rgba, RgbaImage};
use once_cell::sync::Lazy;

pub const SCHEME: &str = "asset://";

const COVER_SIZE: u32 = 128;

static NO_PLAYLIST: Lazy<Handle> = Lazy::new(|| {
    let raster = no_playlist_raster();
    let (width, height) = raster.dimensions();
    Handle::from_rgba(width, height, raster.into_raw())
});

/// Handle for a bundled asset name (without the scheme)
pub fn handle(name: &str) -> Option<Handle> {
    match name {
        "covers/no-playlist" => Some(NO_PLAYLIST.clone()),
        _ => None,
    }
}

/// Dark gradient tile with a lighter inset frame
fn no_playlist_raster() -> RgbaImage {
    let inset = COVER_SIZE / 4;
    let frame = 3;

    RgbaImage::from_fn(COVER_SIZE, COVER_SIZE, |x, y| {
        let in_outer = x >= inset && x < COVER_SIZE - inset && y >= inset && y < COVER_SIZE - inset;
        let in_inner = x >= inset + frame
            && x < COVER_SIZE - inset - frame
            && y >= inset + frame
            && y < COVER_SIZE - inset - frame;

        if in_outer && !in_inner {
            return Rgba([0x66, 0x66, 0x66, 0xff]);
        }

        // 0x2a at the top fading to 0x1a at the bottom
        let shade = 0x2a - ((y * 0x10) / COVER_SIZE) as u8;
        Rgba([shade, shade, shade, 0xff])
    })
}
