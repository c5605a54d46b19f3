//! Vertical three-dot affordance (loading / overflow menu)

use iced::Color;

use crate::ui::node::{Group, Node};
use crate::ui::primitives::Icon;
use crate::ui::style::{FlexDirection, Style, StyleKey};
use crate::ui::theme;

/// Number of dots; part of the widget's contract
pub const DOT_COUNT: usize = 3;
const DOT_GLYPH: &str = "circle-small";
const DOT_SIZE: f32 = 2.5;

pub struct DotsIndicator {
    color: Color,
    style: Style,
}

impl Default for DotsIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl DotsIndicator {
    pub fn new() -> Self {
        Self {
            color: theme::WHITE,
            style: Style::new(),
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Container style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn view<Message>(self) -> Node<Message> {
        let base = Style::new().with(StyleKey::FlexDirection, FlexDirection::Column);
        let children = (0..DOT_COUNT)
            .map(|_| Icon::new(DOT_GLYPH, DOT_SIZE, self.color).view())
            .collect();

        Node::Group(Group {
            style: Style::layered([&base, &self.style]),
            children,
        })
    }
}
