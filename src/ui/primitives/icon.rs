//! Icon primitive
//!
//! Wraps exactly one glyph. The glyph name is forwarded as-is; unknown names
//! are the renderer's problem and come out as an empty slot.

use iced::Color;

use crate::ui::node::{Glyph, Handler, Node};
use crate::ui::style::Style;

/// A single named glyph
pub struct Icon<Message> {
    name: String,
    size: f32,
    color: Color,
    style: Style,
    on_press: Option<Handler<Message>>,
}

impl<Message> Icon<Message> {
    /// All three arguments are required; none of them is defaulted
    pub fn new(name: impl Into<String>, size: f32, color: Color) -> Self {
        Self {
            name: name.into(),
            size,
            color,
            style: Style::new(),
            on_press: None,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Make the glyph tappable; without this it is inert
    pub fn on_press(mut self, f: impl Fn() -> Message + 'static) -> Self {
        self.on_press = Some(Handler::new(f));
        self
    }

    pub fn view(self) -> Node<Message> {
        Node::Glyph(Glyph {
            name: self.name,
            size: self.size,
            color: self.color,
            style: self.style,
            on_press: self.on_press,
        })
    }
}
