//! Album row component
//!
//! One tappable row per library record: cover (or fallback cover), then the
//! album name on a single line and "by {owner}" below it.

use iced::Color;

use crate::library::{CoverArt, MediaRecord};
use crate::ui::node::{Group, Node};
use crate::ui::primitives::{Text, TouchSurface};
use crate::ui::style::{Align, FlexDirection, Style, StyleKey, StyleValue};
use crate::ui::theme;
use crate::ui::widgets::{Cover, CoverBlank};

pub const COVER_SIZE: f32 = 50.0;

/// Share of the available width the row may take; the rest is left for
/// trailing elements added by the caller
pub const MAX_WIDTH_PERCENT: f32 = 77.0;

fn container_style() -> Style {
    Style::new()
        .with(StyleKey::MarginLeft, 15.0)
        .with(StyleKey::MarginVertical, 10.0)
        .with(StyleKey::Flex, 1.0)
        .with(StyleKey::MaxWidth, StyleValue::Percent(MAX_WIDTH_PERCENT))
}

fn cover_style() -> Style {
    Style::new()
        .with(StyleKey::Width, COVER_SIZE)
        .with(StyleKey::Height, COVER_SIZE)
}

fn title_style() -> Style {
    Style::new()
        .with(StyleKey::Color, theme::WHITE)
        .with(StyleKey::TextAlignVertical, Align::Center)
        .with(StyleKey::FontSize, 16.0)
}

fn owner_style() -> Style {
    Style::new()
        .with(StyleKey::Color, theme::TEXT_SECONDARY)
        .with(StyleKey::TextAlignVertical, Align::Center)
}

fn text_container_style() -> Style {
    Style::new()
        .with(StyleKey::MarginLeft, 10.0)
        .with(StyleKey::JustifyContent, Align::Center)
}

pub struct AlbumRow<'r, Message> {
    record: &'r MediaRecord,
    on_press: Box<dyn Fn(String) -> Message>,
    style: Style,
    owner_color: Option<Color>,
}

impl<'r, Message: 'static> AlbumRow<'r, Message> {
    /// `on_press` receives the record id; it is not called while rendering
    pub fn new(record: &'r MediaRecord, on_press: impl Fn(String) -> Message + 'static) -> Self {
        Self {
            record,
            on_press: Box::new(on_press),
            style: Style::new(),
            owner_color: None,
        }
    }

    /// Caller override for the row container
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Tint of the "by {owner}" line
    pub fn owner_color(mut self, color: Color) -> Self {
        self.owner_color = Some(color);
        self
    }

    pub fn view(self) -> Node<Message> {
        let cover = match self.record.cover() {
            CoverArt::Present(uri) => Cover::new(uri).style(cover_style()).view(),
            CoverArt::Missing => CoverBlank::new([cover_style()]).view(),
        };

        let owner_override = self
            .owner_color
            .map(|c| Style::new().with(StyleKey::Color, c))
            .unwrap_or_default();

        let title = Text::new(self.record.name.clone())
            .style(title_style())
            .number_of_lines(1)
            .view();
        let owner = Text::new(format!("by {}", self.record.owner))
            .style(Style::layered([&owner_style(), &owner_override]))
            .view();

        let text_block = Node::Group(Group {
            style: text_container_style(),
            children: vec![title, owner],
        });

        let row = Node::Group(Group {
            style: Style::new().with(StyleKey::FlexDirection, FlexDirection::Row),
            children: vec![cover, text_block],
        });

        let id = self.record.id.clone();
        let on_press = self.on_press;
        TouchSurface::new(row)
            .style(Style::layered([&container_style(), &self.style]))
            .on_press(move || on_press(id.clone()))
            .view()
    }
}
