//! Cover widget
//!
//! Named seam between list rows and the image strategy. Renders the cached
//! image with exactly the URI it was given.

use crate::ui::node::Node;
use crate::ui::primitives::{CachedImage, ImageSource};
use crate::ui::style::Style;

pub struct Cover<I = CachedImage> {
    source: I,
    uri: String,
    style: Style,
}

impl Cover<CachedImage> {
    pub fn new(uri: impl Into<String>) -> Self {
        Self::with_source(CachedImage, uri)
    }
}

impl<I: ImageSource> Cover<I> {
    /// Cover backed by a different image strategy
    pub fn with_source(source: I, uri: impl Into<String>) -> Self {
        Self {
            source,
            uri: uri.into(),
            style: Style::new(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn view<Message>(self) -> Node<Message> {
        self.source.image(self.uri, &self.style)
    }
}
