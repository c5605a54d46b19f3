//! Image primitive
//!
//! One capability, two strategies. [`SimpleImage`] hands the URI straight to
//! the image widget, even when it is empty. [`CachedImage`] routes it through
//! the image cache. Both take the same inputs and produce the same kind of
//! node, so callers depend on [`ImageSource`] and can swap one for the other.

use crate::ui::node::{LoadStrategy, Node, Picture};
use crate::ui::style::Style;

/// Renders an image from a URI with an optional style
pub trait ImageSource {
    /// How the rendering adapter should obtain the pixels
    fn strategy(&self) -> LoadStrategy;

    /// Style applied underneath the caller's override
    fn default_style(&self) -> Style {
        Style::new()
    }

    fn image<Message>(&self, uri: impl Into<String>, style: &Style) -> Node<Message> {
        Node::Image(Picture {
            uri: uri.into(),
            style: Style::layered([&self.default_style(), style]),
            strategy: self.strategy(),
        })
    }
}

/// Loads the URI directly, with no fallback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleImage;

impl ImageSource for SimpleImage {
    fn strategy(&self) -> LoadStrategy {
        LoadStrategy::Direct
    }
}

/// Delegates loading to the image cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachedImage;

impl ImageSource for CachedImage {
    fn strategy(&self) -> LoadStrategy {
        LoadStrategy::Cached
    }
}
