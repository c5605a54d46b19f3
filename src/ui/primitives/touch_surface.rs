//! Touch surface primitive
//!
//! Wraps one child in an activation region. Activation properties are
//! forwarded as given; only the style is merged with a default.

use crate::ui::node::{Handler, Node, Touch, TouchProps};
use crate::ui::style::Style;

fn default_style() -> Style {
    Style::new()
}

pub struct TouchSurface<Message> {
    child: Node<Message>,
    style: Style,
    props: TouchProps<Message>,
}

impl<Message> TouchSurface<Message> {
    pub fn new(child: Node<Message>) -> Self {
        Self {
            child,
            style: Style::new(),
            props: TouchProps::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn on_press(mut self, f: impl Fn() -> Message + 'static) -> Self {
        self.props.on_press = Some(Handler::new(f));
        self
    }

    pub fn on_long_press(mut self, f: impl Fn() -> Message + 'static) -> Self {
        self.props.on_long_press = Some(Handler::new(f));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    pub fn active_opacity(mut self, opacity: f32) -> Self {
        self.props.active_opacity = opacity;
        self
    }

    pub fn view(self) -> Node<Message> {
        Node::Touch(Touch {
            child: Box::new(self.child),
            style: Style::layered([&default_style(), &self.style]),
            props: self.props,
        })
    }
}
