//! Adapter from [`Node`] trees to iced widgets
//!
//! This is the only place that knows how the component tree maps onto the
//! rendering engine:
//!
//! - `Glyph` → tinted `svg`, inside a bare `button` when tappable
//! - `Image` → `image`, or a placeholder tile while the pixels are missing
//! - `Text` → `text` with size, color, weight and alignment
//! - `Touch` → `button` with a lazily evaluated press handler
//! - `Group` → `row` / `column`
//! - `Toggle` → `toggler`
//!
//! Handlers are wired with `on_press_with`, so a callback stored in the tree
//! runs only when iced reports a press.
//!
//! Letter spacing and long presses have no iced counterpart; they stay in the
//! tree and are ignored here.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Space, button, column, container, image, row, svg, text, toggler};
use iced::{Alignment, Background, Border, ContentFit, Element, Font, Length, Padding};
use tracing::debug;

use crate::cache::ImageCache;
use crate::ui::icons;
use crate::ui::node::{Glyph, Group, Label, LoadStrategy, Node, Picture, Toggle, Touch};
use crate::ui::style::{Align, FlexDirection, FontWeight, Style, StyleKey, TextAlign};
use crate::ui::theme;

const FALLBACK_FONT_SIZE: f32 = 16.0;
const TOGGLE_SIZE: f32 = 20.0;

/// Turns component trees into iced elements
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'c> {
    images: &'c ImageCache,
}

impl<'c> Renderer<'c> {
    pub fn new(images: &'c ImageCache) -> Self {
        Self { images }
    }

    pub fn element<'a, Message: Clone + 'a>(&self, node: Node<Message>) -> Element<'a, Message> {
        match node {
            Node::Glyph(glyph) => self.glyph(glyph),
            Node::Image(picture) => self.picture(picture),
            Node::Text(label) => self.label(label),
            Node::Touch(touch) => self.touch(touch),
            Node::Group(group) => self.group(group),
            Node::Toggle(toggle) => self.toggle(toggle),
        }
    }

    fn glyph<'a, Message: Clone + 'a>(&self, glyph: Glyph<Message>) -> Element<'a, Message> {
        let color = glyph.color;
        let content: Element<'a, Message> = match icons::glyph(&glyph.name) {
            Some(source) => svg(svg::Handle::from_memory(source.as_bytes()))
                .width(glyph.size)
                .height(glyph.size)
                .style(move |_theme, _status| svg::Style { color: Some(color) })
                .into(),
            None => {
                debug!("Unknown glyph {:?}, rendering empty slot", glyph.name);
                Space::new().width(glyph.size).height(glyph.size).into()
            }
        };

        let content = match glyph.on_press {
            Some(handler) => button(content)
                .padding(0)
                .style(|t, status| theme::touch_surface(t, status, 0.2))
                .on_press_with(move || handler.fire())
                .into(),
            None => content,
        };

        boxed(content, &glyph.style)
    }

    fn picture<'a, Message: Clone + 'a>(&self, picture: Picture) -> Element<'a, Message> {
        let handle = match picture.strategy {
            LoadStrategy::Direct => Some(image::Handle::from_path(&picture.uri)),
            LoadStrategy::Cached => self.images.get(&picture.uri),
        };

        let width = length(&picture.style, StyleKey::Width);
        let height = length(&picture.style, StyleKey::Height);
        let radius = picture.style.number(StyleKey::BorderRadius).unwrap_or(0.0);

        let content: Element<'a, Message> = match handle {
            Some(handle) => image(handle)
                .width(width)
                .height(height)
                .content_fit(ContentFit::Cover)
                .border_radius(radius)
                .into(),
            None => container(Space::new())
                .width(width)
                .height(height)
                .style(theme::placeholder_tile)
                .into(),
        };

        boxed(content, &without(&picture.style, &[StyleKey::Width, StyleKey::Height]))
    }

    fn label<'a, Message: Clone + 'a>(&self, label: Label) -> Element<'a, Message> {
        let style = &label.style;

        let weight = match style.font_weight() {
            Some(FontWeight::Bold) => theme::BOLD_WEIGHT,
            _ => theme::NORMAL_WEIGHT,
        };
        let align = match style.text_align().unwrap_or_default() {
            TextAlign::Left => Horizontal::Left,
            TextAlign::Center => Horizontal::Center,
            TextAlign::Right => Horizontal::Right,
        };

        let mut content = text(label.content)
            .size(style.number(StyleKey::FontSize).unwrap_or(FALLBACK_FONT_SIZE))
            .font(Font {
                weight,
                ..Font::default()
            })
            .align_x(align);

        if let Some(color) = style.color(StyleKey::Color) {
            content = content.color(color);
        }
        if label.number_of_lines == Some(1) {
            content = content.wrapping(text::Wrapping::None);
        }

        boxed(content.into(), &typography_free(style))
    }

    fn touch<'a, Message: Clone + 'a>(&self, touch: Touch<Message>) -> Element<'a, Message> {
        let child = self.element(*touch.child);
        let opacity = touch.props.active_opacity;

        let mut surface = button(child)
            .padding(0)
            .width(length(&touch.style, StyleKey::Width))
            .style(move |t, status| theme::touch_surface(t, status, opacity));

        if !touch.props.disabled {
            if let Some(handler) = touch.props.on_press {
                surface = surface.on_press_with(move || handler.fire());
            }
        }

        boxed(
            surface.into(),
            &without(&touch.style, &[StyleKey::Width, StyleKey::Flex]),
        )
    }

    fn group<'a, Message: Clone + 'a>(&self, group: Group<Message>) -> Element<'a, Message> {
        let style = group.style;
        let cross = style.align(StyleKey::AlignItems).map(alignment);
        let children: Vec<Element<'a, Message>> = group
            .children
            .into_iter()
            .map(|child| self.element(child))
            .collect();

        let content: Element<'a, Message> = match style.direction() {
            FlexDirection::Row => {
                let mut r = row(children);
                if let Some(cross) = cross {
                    r = r.align_y(cross);
                }
                r.into()
            }
            FlexDirection::Column => {
                let mut c = column(children);
                if let Some(cross) = cross {
                    c = c.align_x(cross);
                }
                c.into()
            }
        };

        boxed(content, &style)
    }

    fn toggle<'a, Message: Clone + 'a>(&self, toggle: Toggle<Message>) -> Element<'a, Message> {
        let mut content = toggler(toggle.value).size(TOGGLE_SIZE);
        if let Some(handler) = toggle.on_toggle {
            content = content.on_toggle(move |value| handler.fire(value));
        }
        boxed(content.into(), &toggle.style)
    }
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Start => Alignment::Start,
        Align::Center => Alignment::Center,
        Align::End => Alignment::End,
    }
}

/// Width/height for a style key
fn length(style: &Style, key: StyleKey) -> Length {
    if let Some(points) = style.number(key) {
        Length::Fixed(points)
    } else if style.percent(key).is_some() || style.contains(StyleKey::Flex) {
        Length::Fill
    } else {
        Length::Shrink
    }
}

/// Outer spacing from margin keys
fn margins(style: &Style) -> Padding {
    let vertical = style.number(StyleKey::MarginVertical).unwrap_or(0.0);
    Padding::new(0.0)
        .top(vertical)
        .bottom(vertical)
        .left(style.number(StyleKey::MarginLeft).unwrap_or(0.0))
        .right(style.number(StyleKey::MarginRight).unwrap_or(0.0))
}

fn without(style: &Style, keys: &[StyleKey]) -> Style {
    style.iter().filter(|(k, _)| !keys.contains(k)).collect()
}

/// Drop keys consumed by the text widget itself
fn typography_free(style: &Style) -> Style {
    without(
        style,
        &[
            StyleKey::Color,
            StyleKey::FontSize,
            StyleKey::FontWeight,
            StyleKey::LetterSpacing,
            StyleKey::TextAlign,
            StyleKey::TextAlignVertical,
        ],
    )
}

/// Apply geometry and decoration keys around an element
fn boxed<'a, Message: 'a>(content: Element<'a, Message>, style: &Style) -> Element<'a, Message> {
    if style.is_empty() {
        return content;
    }

    let background = style.color(StyleKey::BackgroundColor);
    let radius = style.number(StyleKey::BorderRadius).unwrap_or(0.0);

    let mut inner = container(content)
        .padding(style.number(StyleKey::Padding).unwrap_or(0.0))
        .width(length(style, StyleKey::Width))
        .height(length(style, StyleKey::Height));

    if let Some(max) = style.number(StyleKey::MaxWidth) {
        inner = inner.max_width(max);
    }
    if let Some(justify) = style.align(StyleKey::JustifyContent) {
        inner = match style.direction() {
            FlexDirection::Row => inner.align_x(match justify {
                Align::Start => Horizontal::Left,
                Align::Center => Horizontal::Center,
                Align::End => Horizontal::Right,
            }),
            FlexDirection::Column => inner.align_y(match justify {
                Align::Start => Vertical::Top,
                Align::Center => Vertical::Center,
                Align::End => Vertical::Bottom,
            }),
        };
    }
    if background.is_some() || radius > 0.0 {
        inner = inner.style(move |_theme| container::Style {
            background: background.map(Background::Color),
            border: Border {
                radius: radius.into(),
                ..Default::default()
            },
            ..Default::default()
        });
    }

    let mut element: Element<'a, Message> = inner.into();

    let margin = margins(style);
    if margin != Padding::ZERO {
        element = container(element)
            .padding(margin)
            .width(length(style, StyleKey::Width))
            .into();
    }

    // Percentage max width: give the element its share, leave the rest empty
    if let Some(percent) = style.percent(StyleKey::MaxWidth) {
        let share = percent.clamp(1.0, 100.0).round() as u16;
        element = row![
            container(element).width(Length::FillPortion(share)),
            Space::new().width(Length::FillPortion(100 - share)),
        ]
        .into();
    }

    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::sample_records;
    use crate::ui::components::AlbumRow;
    use crate::ui::primitives::{Icon, Text, TouchSurface};
    use crate::ui::style::StyleValue;
    use crate::ui::widgets::{DotsIndicator, DownloadHeader};

    #[test]
    fn lengths_follow_style() {
        let style = Style::new()
            .with(StyleKey::Width, 50.0)
            .with(StyleKey::Flex, 1.0);
        assert_eq!(length(&style, StyleKey::Width), Length::Fixed(50.0));
        assert_eq!(length(&style, StyleKey::Height), Length::Fill);
        assert_eq!(length(&Style::new(), StyleKey::Height), Length::Shrink);
        assert_eq!(
            length(
                &Style::new().with(StyleKey::Width, StyleValue::Percent(50.0)),
                StyleKey::Width
            ),
            Length::Fill
        );
    }

    #[test]
    fn margins_become_outer_padding() {
        let style = Style::new()
            .with(StyleKey::MarginLeft, 15.0)
            .with(StyleKey::MarginVertical, 10.0);
        assert_eq!(
            margins(&style),
            Padding {
                top: 10.0,
                right: 0.0,
                bottom: 10.0,
                left: 15.0,
            }
        );
    }

    #[test]
    fn typography_keys_are_not_boxed() {
        let style = Style::new()
            .with(StyleKey::FontSize, 16.0)
            .with(StyleKey::MarginLeft, 4.0);
        let rest = typography_free(&style);
        assert_eq!(rest.len(), 1);
        assert!(rest.contains(StyleKey::MarginLeft));
    }

    #[test]
    fn renders_every_component_kind() {
        let dir = std::env::temp_dir().join(format!("albumkit-render-{}", std::process::id()));
        let cache = ImageCache::new(dir.clone()).expect("cache");
        let renderer = Renderer::new(&cache);

        for record in sample_records() {
            let _: Element<'_, String> = renderer.element(AlbumRow::new(&record, |id| id).view());
        }
        let _: Element<'_, String> = renderer.element(DotsIndicator::new().view());
        let _: Element<'_, String> = renderer.element(DownloadHeader::new().view());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Pressed {
        Glyph,
        Surface,
    }

    #[test]
    fn renders_pressable_nodes_for_clone_messages() {
        let cache = ImageCache::detached(std::env::temp_dir().join("albumkit-render-buttons"));
        let renderer = Renderer::new(&cache);

        let glyph = Icon::new("heart", 24.0, theme::WHITE).on_press(|| Pressed::Glyph);
        let _: Element<'_, Pressed> = renderer.element(glyph.view());

        for disabled in [false, true] {
            let surface = TouchSurface::new(Text::new("Open").view())
                .on_press(|| Pressed::Surface)
                .disabled(disabled);
            let _: Element<'_, Pressed> = renderer.element(surface.view());
        }
    }
}
