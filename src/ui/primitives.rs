//! Primitive UI elements - atomic building blocks
//!
//! Each primitive wraps exactly one rendered element, adds a typed prop
//! contract, applies a default style and forwards the caller's override.
//!
//! # Design Principles
//!
//! - **Required props are constructor arguments**: nothing required is defaulted
//! - **Generic Message types**: callbacks produce the caller's message
//! - **Pure**: building a primitive never runs a callback or touches I/O
//!
//! # Contents
//!
//! - [`Icon`] - One named glyph, optionally tappable
//! - [`SimpleImage`] / [`CachedImage`] - The two [`ImageSource`] strategies
//! - [`Text`] - Styled text with five defaulted typography options
//! - [`TouchSurface`] - Activation region around a child

pub mod icon;
pub mod image;
pub mod text;
pub mod touch_surface;

pub use icon::Icon;
pub use image::{CachedImage, ImageSource, SimpleImage};
pub use text::{Text, TextConfig, TextPassThrough};
pub use touch_surface::TouchSurface;
