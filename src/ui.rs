//! Album list building blocks
//!
//! # Architecture
//!
//! The UI is organized into three layers, leaves first:
//!
//! - **Primitives** (`primitives`): One rendered element each
//! - **Widgets** (`widgets`): Fixed arrangements of primitives
//! - **Components** (`components`): Rows driven by library records
//!
//! Every layer returns a [`node::Node`] tree built purely from its props.
//! Styles resolve through [`style::Style::layered`], and [`render`] maps the
//! finished tree onto iced widgets.

pub mod components;
pub mod icons;
pub mod node;
pub mod primitives;
pub mod render;
pub mod style;
pub mod theme;
pub mod widgets;
