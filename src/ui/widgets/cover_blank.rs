//! Fallback cover widget
//!
//! Used when an album has no cover reference. Always points the cached image
//! at the theme's bundled fallback asset; there is no way to pass a URI.

use crate::ui::node::Node;
use crate::ui::primitives::{CachedImage, ImageSource};
use crate::ui::style::Style;
use crate::ui::theme;

pub struct CoverBlank<I = CachedImage> {
    source: I,
    styles: Vec<Style>,
}

impl CoverBlank<CachedImage> {
    /// `styles` are merged first to last
    pub fn new(styles: impl IntoIterator<Item = Style>) -> Self {
        Self {
            source: CachedImage,
            styles: styles.into_iter().collect(),
        }
    }
}

impl<I: ImageSource> CoverBlank<I> {
    pub fn view<Message>(self) -> Node<Message> {
        let style = Style::layered(&self.styles);
        self.source.image(theme::NO_PLAYLIST_COVER, &style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::node::LoadStrategy;
    use crate::ui::style::StyleKey;

    #[test]
    fn renders_fallback_asset() {
        let node: Node<()> = CoverBlank::new([]).view();
        let pictures = node.pictures();
        assert_eq!(pictures.len(), 1);
        assert_eq!(pictures[0].uri, theme::NO_PLAYLIST_COVER);
        assert_eq!(pictures[0].strategy, LoadStrategy::Cached);
    }

    #[test]
    fn style_sequence_merges_in_order() {
        let node: Node<()> = CoverBlank::new([
            Style::new()
                .with(StyleKey::Width, 50.0)
                .with(StyleKey::Height, 50.0),
            Style::new().with(StyleKey::Width, 40.0),
        ])
        .view();

        let style = &node.pictures()[0].style;
        assert_eq!(style.number(StyleKey::Width), Some(40.0));
        assert_eq!(style.number(StyleKey::Height), Some(50.0));
    }

    #[test]
    fn building_twice_gives_equal_trees() {
        let build = || -> Node<()> {
            CoverBlank::new([Style::new().with(StyleKey::Width, 50.0)]).view()
        };
        assert_eq!(build(), build());
    }
}
