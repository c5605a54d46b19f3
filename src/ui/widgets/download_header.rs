//! "Download" label with a toggle
//!
//! The toggle is presentational: its value is always off and, unless the
//! application wires [`DownloadHeader::on_toggle`], it has no change handler.

use crate::ui::node::{Group, Node, Toggle, ToggleHandler};
use crate::ui::primitives::Text;
use crate::ui::style::{Align, FlexDirection, Style, StyleKey};

const LABEL: &str = "Download";

pub struct DownloadHeader<Message> {
    style: Style,
    on_toggle: Option<ToggleHandler<Message>>,
}

impl<Message> Default for DownloadHeader<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> DownloadHeader<Message> {
    pub fn new() -> Self {
        Self {
            style: Style::new(),
            on_toggle: None,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Integration point for an application that owns download state.
    /// The displayed value stays off; the handler only reports requests.
    pub fn on_toggle(mut self, f: impl Fn(bool) -> Message + 'static) -> Self {
        self.on_toggle = Some(ToggleHandler::new(f));
        self
    }

    pub fn view(self) -> Node<Message> {
        let base = Style::new()
            .with(StyleKey::FlexDirection, FlexDirection::Row)
            .with(StyleKey::AlignItems, Align::Center);

        Node::Group(Group {
            style: Style::layered([&base, &self.style]),
            children: vec![
                Text::new(LABEL).view(),
                Node::Toggle(Toggle {
                    value: false,
                    on_toggle: self.on_toggle,
                    style: Style::new(),
                }),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(node: &Node<bool>) -> &Toggle<bool> {
        node.descendants()
            .into_iter()
            .find_map(|n| match n {
                Node::Toggle(t) => Some(t),
                _ => None,
            })
            .expect("toggle present")
    }

    #[test]
    fn inert_by_default() {
        let node = DownloadHeader::<bool>::new().view();
        let t = toggle(&node);
        assert!(!t.value);
        assert!(t.on_toggle.is_none());
        assert_eq!(node.labels()[0].content, "Download");
    }

    #[test]
    fn row_layout_with_caller_override() {
        let node = DownloadHeader::<bool>::new()
            .style(Style::new().with(StyleKey::Padding, 12.0))
            .view();
        let group = node.as_group().expect("group");
        assert_eq!(group.style.direction(), FlexDirection::Row);
        assert_eq!(group.style.align(StyleKey::AlignItems), Some(Align::Center));
        assert_eq!(group.style.number(StyleKey::Padding), Some(12.0));
    }

    #[test]
    fn wired_toggle_keeps_value_off() {
        let node = DownloadHeader::new().on_toggle(|on| on).view();
        let t = toggle(&node);
        assert!(!t.value);
        assert_eq!(t.on_toggle.as_ref().map(|h| h.fire(true)), Some(true));
    }

    #[test]
    fn building_twice_gives_equal_trees() {
        let build = || {
            DownloadHeader::new()
                .style(Style::new().with(StyleKey::Padding, 16.0))
                .on_toggle(|on| on)
                .view()
        };
        assert_eq!(build(), build());
    }
}
