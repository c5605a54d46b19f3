//! albumkit - album list building blocks for iced
//!
//! A fixed set of presentational components (icons, images, text, touch
//! regions, covers, list rows) whose styles combine by last-wins merging.

pub mod cache;
pub mod library;
pub mod settings;
pub mod ui;

pub use library::{CoverArt, MediaRecord};
pub use ui::node::Node;
pub use ui::style::{Style, StyleKey, StyleValue};
