//! Theme tokens shared by every component
//!
//! Read-only: components take their defaults from here and never write back.
//! The iced style functions at the bottom are used by the rendering adapter.

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Theme};

// ============================================================================
// Color Palette
// ============================================================================

/// Default text tint and glyph tint
pub const WHITE: Color = color!(0xffffff);

/// Secondary line of a list row
pub const TEXT_SECONDARY: Color = color!(0xcccccc);

/// Muted text (hints, empty states)
pub const TEXT_MUTED: Color = color!(0x888888);

/// Screen background (dark mode)
pub const BACKGROUND: Color = color!(0x121212);

/// Fallback asset shown when an album has no cover
pub const NO_PLAYLIST_COVER: &str = "asset://covers/no-playlist";

/// Bold font weight
/// - macOS: Semibold (SF Pro looks better with Semibold)
/// - elsewhere: Bold
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

pub const NORMAL_WEIGHT: Weight = Weight::Normal;

fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

/// Public function to check if theme is dark mode
pub fn is_dark_theme(theme: &Theme) -> bool {
    is_dark(theme)
}

/// Screen background based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        BACKGROUND
    } else {
        color!(0xffffff)
    }
}

/// Placeholder background (covers still loading or unreadable)
pub fn placeholder_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.18, 0.18, 0.18)
    } else {
        Color::from_rgb(0.9, 0.9, 0.9)
    }
}

/// Pressed overlay for a touch region
pub fn pressed_bg(theme: &Theme, active_opacity: f32) -> Color {
    let alpha = (1.0 - active_opacity).clamp(0.0, 1.0) * 0.15;
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, alpha)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, alpha)
    }
}

/// Divider/separator color
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main screen background
pub fn screen(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Tile drawn in place of an image that is not available yet
pub fn placeholder_tile(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(placeholder_bg(theme))),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Touch surface: transparent at rest, dimmed while pressed
pub fn touch_surface(
    theme: &Theme,
    status: button::Status,
    active_opacity: f32,
) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: WHITE,
        border: Border::default(),
        shadow: Shadow::default(),
        ..Default::default()
    };

    match status {
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(pressed_bg(theme, active_opacity))),
            ..base
        },
        _ => base,
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar for album lists
pub fn list_scrollable(theme: &Theme, status: scrollable::Status) -> scrollable::Style {
    let mut style = scrollable::default(theme, status);
    style.vertical_rail.background = Some(Background::Color(Color::TRANSPARENT));
    style.vertical_rail.scroller.background = Background::Color(divider(theme));
    style
}
