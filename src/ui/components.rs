//! UI Components - rows driven by library records
//!
//! Components combine widgets and primitives with a record from
//! [`crate::library`] and a caller-supplied callback. They are the only layer
//! that knows about records.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): One rendered element each
//! - **Widgets** (`crate::ui::widgets`): Composable UI patterns (no records)
//! - **Components** (this module): Record-specific rows

pub mod album_row;

pub use album_row::AlbumRow;
