//! Composite widgets - primitives arranged into reusable pieces
//!
//! Widgets combine primitives into fixed arrangements and add their own
//! defaults (a fallback asset, a fixed number of dots). They carry no
//! business data and do not depend on [`crate::library`].
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): One rendered element each
//! - **Widgets** (this module): Composable UI patterns
//! - **Components** (`crate::ui::components`): Driven by library records

pub mod cover;
pub mod cover_blank;
pub mod dots_indicator;
pub mod download_header;

pub use cover::Cover;
pub use cover_blank::CoverBlank;
pub use dots_indicator::DotsIndicator;
pub use download_header::DownloadHeader;
