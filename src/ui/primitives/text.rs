//! Text primitive
//!
//! Five typography options with fixed defaults, resolved in this order:
//! base text style, then the options, then the caller's style. Values are
//! passed through without range checks.

use iced::Color;

use crate::ui::node::{Label, Node};
use crate::ui::style::{FontWeight, Style, StyleKey, TextAlign};
use crate::ui::theme;

pub const DEFAULT_FONT_SIZE: f32 = 16.0;
pub const DEFAULT_LETTER_SPACING: f32 = 0.6;

/// Properties forwarded to the text renderer untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextPassThrough {
    pub number_of_lines: Option<u32>,
    pub selectable: bool,
}

/// Typography options after defaulting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextConfig {
    pub color: Color,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub letter_spacing: f32,
    pub text_align: TextAlign,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            color: theme::WHITE,
            font_size: DEFAULT_FONT_SIZE,
            font_weight: FontWeight::Normal,
            letter_spacing: DEFAULT_LETTER_SPACING,
            text_align: TextAlign::Left,
        }
    }
}

impl TextConfig {
    fn to_style(self) -> Style {
        Style::new()
            .with(StyleKey::Color, self.color)
            .with(StyleKey::FontSize, self.font_size)
            .with(StyleKey::FontWeight, self.font_weight)
            .with(StyleKey::LetterSpacing, self.letter_spacing)
            .with(StyleKey::TextAlign, self.text_align)
    }
}

fn base_style() -> Style {
    Style::new().with(StyleKey::Color, theme::WHITE)
}

/// Styled text
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    color: Option<Color>,
    font_size: Option<f32>,
    font_weight: Option<FontWeight>,
    letter_spacing: Option<f32>,
    text_align: Option<TextAlign>,
    style: Style,
    pass_through: TextPassThrough,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: None,
            font_size: None,
            font_weight: None,
            letter_spacing: None,
            text_align: None,
            style: Style::new(),
            pass_through: TextPassThrough::default(),
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Caller override, applied last
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn number_of_lines(mut self, lines: u32) -> Self {
        self.pass_through.number_of_lines = Some(lines);
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.pass_through.selectable = selectable;
        self
    }

    /// Options with unset values replaced by their defaults
    pub fn config(&self) -> TextConfig {
        let defaults = TextConfig::default();
        TextConfig {
            color: self.color.unwrap_or(defaults.color),
            font_size: self.font_size.unwrap_or(defaults.font_size),
            font_weight: self.font_weight.unwrap_or(defaults.font_weight),
            letter_spacing: self.letter_spacing.unwrap_or(defaults.letter_spacing),
            text_align: self.text_align.unwrap_or(defaults.text_align),
        }
    }

    pub fn view<Message>(self) -> Node<Message> {
        let style = Style::layered([&base_style(), &self.config().to_style(), &self.style]);
        Node::Text(Label {
            content: self.content,
            style,
            number_of_lines: self.pass_through.number_of_lines,
            selectable: self.pass_through.selectable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(text: Text) -> Label {
        match text.view::<()>() {
            Node::Text(label) => label,
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn defaults_without_overrides() {
        let l = label(Text::new("hello"));

        assert_eq!(l.content, "hello");
        assert_eq!(l.style.color(StyleKey::Color), Some(theme::WHITE));
        assert_eq!(l.style.number(StyleKey::FontSize), Some(16.0));
        assert_eq!(l.style.font_weight(), Some(FontWeight::Normal));
        assert_eq!(l.style.number(StyleKey::LetterSpacing), Some(0.6));
        assert_eq!(l.style.text_align(), Some(TextAlign::Left));
        assert_eq!(l.number_of_lines, None);
    }

    #[test]
    fn each_option_is_isolated() {
        let defaults = label(Text::new("x")).style;

        let cases: Vec<(Text, StyleKey)> = vec![
            (Text::new("x").color(Color::BLACK), StyleKey::Color),
            (Text::new("x").font_size(22.0), StyleKey::FontSize),
            (Text::new("x").font_weight(FontWeight::Bold), StyleKey::FontWeight),
            (Text::new("x").letter_spacing(2.0), StyleKey::LetterSpacing),
            (Text::new("x").text_align(TextAlign::Center), StyleKey::TextAlign),
        ];

        for (text, changed) in cases {
            let style = label(text).style;
            for (key, value) in defaults.iter() {
                if key == changed {
                    assert_ne!(style.get(key), Some(value), "{key:?} should change");
                } else {
                    assert_eq!(style.get(key), Some(value), "{key:?} should not change");
                }
            }
        }
    }

    #[test]
    fn caller_style_wins_over_options() {
        let l = label(
            Text::new("x")
                .font_size(20.0)
                .style(Style::new().with(StyleKey::FontSize, 12.0)),
        );
        assert_eq!(l.style.number(StyleKey::FontSize), Some(12.0));
        assert_eq!(l.style.number(StyleKey::LetterSpacing), Some(0.6));
    }

    #[test]
    fn sizes_are_not_validated() {
        let l = label(Text::new("x").font_size(-3.0));
        assert_eq!(l.style.number(StyleKey::FontSize), Some(-3.0));
    }

    #[test]
    fn pass_through_is_forwarded() {
        let l = label(Text::new("x").number_of_lines(1).selectable(true));
        assert_eq!(l.number_of_lines, Some(1));
        assert!(l.selectable);
    }

    #[test]
    fn building_twice_gives_equal_trees() {
        let build = || {
            Text::new("Night Drive")
                .font_size(18.0)
                .font_weight(FontWeight::Bold)
                .number_of_lines(1)
                .view::<()>()
        };
        assert_eq!(build(), build());
    }
}
