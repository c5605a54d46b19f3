//! Rendered tree produced by every component
//!
//! Components do not talk to iced directly. They return a [`Node`] tree that
//! describes exactly what should be drawn, and [`crate::ui::render`] adapts it
//! to iced widgets. Keeping the tree as plain data lets the composition rules
//! be checked without a window or a GPU.

use std::fmt;
use std::rc::Rc;

use iced::Color;

use super::style::Style;

/// Deferred activation callback
///
/// The closure is stored, never called, while the tree is built. It runs only
/// when the rendering adapter reports an activation.
pub struct Handler<Message>(Rc<dyn Fn() -> Message>);

impl<Message> Handler<Message> {
    pub fn new(f: impl Fn() -> Message + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callback once
    pub fn fire(&self) -> Message {
        (self.0)()
    }
}

impl<Message> Clone for Handler<Message> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<Message> fmt::Debug for Handler<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// Handlers compare by presence only: two renders of the same props hold
/// distinct closures but describe the same tree.
impl<Message> PartialEq for Handler<Message> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Deferred callback receiving the new value of a toggle
pub struct ToggleHandler<Message>(Rc<dyn Fn(bool) -> Message>);

impl<Message> ToggleHandler<Message> {
    pub fn new(f: impl Fn(bool) -> Message + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn fire(&self, value: bool) -> Message {
        (self.0)(value)
    }
}

impl<Message> Clone for ToggleHandler<Message> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<Message> fmt::Debug for ToggleHandler<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ToggleHandler(..)")
    }
}

impl<Message> PartialEq for ToggleHandler<Message> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// How the rendering adapter obtains image pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Hand the URI straight to the image widget
    Direct,
    /// Resolve through the image cache
    Cached,
}

/// A single icon glyph
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph<Message> {
    pub name: String,
    pub size: f32,
    pub color: Color,
    pub style: Style,
    pub on_press: Option<Handler<Message>>,
}

/// An image loaded from a URI
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pub uri: String,
    pub style: Style,
    pub strategy: LoadStrategy,
}

/// A run of styled text
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub content: String,
    /// Fully resolved: always carries the five typography keys
    pub style: Style,
    /// Clamp to this many lines; `Some(1)` disables wrapping
    pub number_of_lines: Option<u32>,
    pub selectable: bool,
}

/// Activation properties forwarded unchanged to the touch region
#[derive(Debug, Clone, PartialEq)]
pub struct TouchProps<Message> {
    pub on_press: Option<Handler<Message>>,
    pub on_long_press: Option<Handler<Message>>,
    pub disabled: bool,
    /// Opacity of the content while pressed
    pub active_opacity: f32,
}

impl<Message> Default for TouchProps<Message> {
    fn default() -> Self {
        Self {
            on_press: None,
            on_long_press: None,
            disabled: false,
            active_opacity: 0.2,
        }
    }
}

/// An activation region wrapping one child
#[derive(Debug, Clone, PartialEq)]
pub struct Touch<Message> {
    pub child: Box<Node<Message>>,
    pub style: Style,
    pub props: TouchProps<Message>,
}

impl<Message> Touch<Message> {
    /// Simulate a tap: returns the press message unless the region is
    /// disabled or has no handler
    pub fn activate(&self) -> Option<Message> {
        if self.props.disabled {
            return None;
        }
        self.props.on_press.as_ref().map(Handler::fire)
    }

    pub fn long_press(&self) -> Option<Message> {
        if self.props.disabled {
            return None;
        }
        self.props.on_long_press.as_ref().map(Handler::fire)
    }
}

/// Children laid out along `style.direction()`
#[derive(Debug, Clone, PartialEq)]
pub struct Group<Message> {
    pub style: Style,
    pub children: Vec<Node<Message>>,
}

/// A binary switch
#[derive(Debug, Clone, PartialEq)]
pub struct Toggle<Message> {
    pub value: bool,
    pub on_toggle: Option<ToggleHandler<Message>>,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node<Message> {
    Glyph(Glyph<Message>),
    Image(Picture),
    Text(Label),
    Touch(Touch<Message>),
    Group(Group<Message>),
    Toggle(Toggle<Message>),
}

impl<Message> Node<Message> {
    /// Direct children of this node
    pub fn children(&self) -> Vec<&Node<Message>> {
        match self {
            Node::Touch(touch) => vec![touch.child.as_ref()],
            Node::Group(group) => group.children.iter().collect(),
            Node::Glyph(_) | Node::Image(_) | Node::Text(_) | Node::Toggle(_) => Vec::new(),
        }
    }

    /// Pre-order traversal including `self`
    pub fn descendants(&self) -> Vec<&Node<Message>> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.descendants());
        }
        out
    }

    pub fn glyphs(&self) -> Vec<&Glyph<Message>> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Node::Glyph(glyph) => Some(glyph),
                _ => None,
            })
            .collect()
    }

    pub fn pictures(&self) -> Vec<&Picture> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Node::Image(picture) => Some(picture),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<&Label> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Node::Text(label) => Some(label),
                _ => None,
            })
            .collect()
    }

    pub fn as_touch(&self) -> Option<&Touch<Message>> {
        match self {
            Node::Touch(touch) => Some(touch),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group<Message>> {
        match self {
            Node::Group(group) => Some(group),
            _ => None,
        }
    }
}
