//! Style fragments and their resolution
//!
//! A [`Style`] is a typed map from [`StyleKey`] to [`StyleValue`]. Components
//! never mutate a caller's style; they stack fragments and resolve them with
//! [`Style::layered`], where later fragments win key by key:
//!
//! primitive default → composite default → fragment override → caller override
//!
//! Merging is shallow. A key set by an earlier fragment survives unless a
//! later fragment sets the same key, so an override never invalidates the
//! properties next to it.

use std::collections::BTreeMap;

use iced::Color;

/// Property names understood by the rendering adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    // Geometry
    Width,
    Height,
    MaxWidth,
    Flex,
    MarginLeft,
    MarginRight,
    MarginVertical,
    Padding,
    // Layout
    FlexDirection,
    AlignItems,
    JustifyContent,
    // Decoration
    BackgroundColor,
    BorderRadius,
    Opacity,
    // Typography
    Color,
    FontSize,
    FontWeight,
    LetterSpacing,
    TextAlign,
    TextAlignVertical,
}

/// Font weight accepted by [`StyleKey::FontWeight`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Horizontal text alignment accepted by [`StyleKey::TextAlign`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Main axis of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    Row,
    #[default]
    Column,
}

/// Cross/main axis placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// A single style value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    Number(f32),
    /// Percentage of the parent's extent (0-100)
    Percent(f32),
    Color(Color),
    FontWeight(FontWeight),
    TextAlign(TextAlign),
    Direction(FlexDirection),
    Align(Align),
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        StyleValue::Color(value)
    }
}

impl From<FontWeight> for StyleValue {
    fn from(value: FontWeight) -> Self {
        StyleValue::FontWeight(value)
    }
}

impl From<TextAlign> for StyleValue {
    fn from(value: TextAlign) -> Self {
        StyleValue::TextAlign(value)
    }
}

impl From<FlexDirection> for StyleValue {
    fn from(value: FlexDirection) -> Self {
        StyleValue::Direction(value)
    }
}

impl From<Align> for StyleValue {
    fn from(value: Align) -> Self {
        StyleValue::Align(value)
    }
}

/// A style fragment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    entries: BTreeMap<StyleKey, StyleValue>,
}

impl Style {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::set`]
    pub fn with(mut self, key: StyleKey, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: StyleKey, value: impl Into<StyleValue>) {
        self.entries.insert(key, value.into());
    }

    pub fn get(&self, key: StyleKey) -> Option<StyleValue> {
        self.entries.get(&key).copied()
    }

    pub fn contains(&self, key: StyleKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, StyleValue)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    /// Merge `over` on top of `self`; keys in `over` win
    pub fn merge(&self, over: &Style) -> Style {
        let mut merged = self.clone();
        merged
            .entries
            .extend(over.entries.iter().map(|(k, v)| (*k, *v)));
        merged
    }

    /// Resolve an ordered sequence of fragments, first to last
    pub fn layered<'s>(fragments: impl IntoIterator<Item = &'s Style>) -> Style {
        fragments
            .into_iter()
            .fold(Style::new(), |acc, fragment| acc.merge(fragment))
    }

    // ------------------------------------------------------------------
    // Typed accessors used by the rendering adapter
    // ------------------------------------------------------------------

    pub fn number(&self, key: StyleKey) -> Option<f32> {
        match self.get(key)? {
            StyleValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn percent(&self, key: StyleKey) -> Option<f32> {
        match self.get(key)? {
            StyleValue::Percent(p) => Some(p),
            _ => None,
        }
    }

    pub fn color(&self, key: StyleKey) -> Option<Color> {
        match self.get(key)? {
            StyleValue::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn font_weight(&self) -> Option<FontWeight> {
        match self.get(StyleKey::FontWeight)? {
            StyleValue::FontWeight(w) => Some(w),
            _ => None,
        }
    }

    pub fn text_align(&self) -> Option<TextAlign> {
        match self.get(StyleKey::TextAlign)? {
            StyleValue::TextAlign(a) => Some(a),
            _ => None,
        }
    }

    pub fn direction(&self) -> FlexDirection {
        match self.get(StyleKey::FlexDirection) {
            Some(StyleValue::Direction(d)) => d,
            _ => FlexDirection::default(),
        }
    }

    pub fn align(&self, key: StyleKey) -> Option<Align> {
        match self.get(key)? {
            StyleValue::Align(a) => Some(a),
            _ => None,
        }
    }
}

impl FromIterator<(StyleKey, StyleValue)> for Style {
    fn from_iter<I: IntoIterator<Item = (StyleKey, StyleValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Style {
        Style::new()
            .with(StyleKey::Width, 50.0)
            .with(StyleKey::Height, 50.0)
            .with(StyleKey::Color, Color::WHITE)
    }

    #[test]
    fn later_fragment_wins() {
        let over = Style::new().with(StyleKey::Width, 80.0);
        let merged = base().merge(&over);

        assert_eq!(merged.number(StyleKey::Width), Some(80.0));
        // Adjacent keys survive the override
        assert_eq!(merged.number(StyleKey::Height), Some(50.0));
        assert_eq!(merged.color(StyleKey::Color), Some(Color::WHITE));
    }

    #[test]
    fn merge_is_total() {
        let over = Style::new()
            .with(StyleKey::MarginLeft, 15.0)
            .with(StyleKey::Width, 10.0);
        let merged = base().merge(&over);

        for (key, _) in base().iter().chain(over.iter()) {
            assert!(merged.contains(key), "{key:?} dropped by merge");
        }
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn key_lookup_follows_last_wins() {
        let s1 = base();
        let s2 = Style::new()
            .with(StyleKey::Height, 20.0)
            .with(StyleKey::FontSize, 12.0);
        let merged = s1.merge(&s2);

        for key in [
            StyleKey::Width,
            StyleKey::Height,
            StyleKey::Color,
            StyleKey::FontSize,
            StyleKey::Padding,
        ] {
            let expected = s2.get(key).or_else(|| s1.get(key));
            assert_eq!(merged.get(key), expected, "mismatch for {key:?}");
        }
    }

    #[test]
    fn layering_is_associative() {
        let a = base();
        let b = Style::new()
            .with(StyleKey::Width, 1.0)
            .with(StyleKey::Opacity, 0.5);
        let c = Style::new()
            .with(StyleKey::Opacity, 0.9)
            .with(StyleKey::Height, 3.0);

        let left = a.merge(&b).merge(&c);
        let right = a.merge(&b.merge(&c));
        assert_eq!(left, right);
        assert_eq!(Style::layered([&a, &b, &c]), left);
    }

    #[test]
    fn layering_nothing_is_empty() {
        assert!(Style::layered(std::iter::empty()).is_empty());
    }

    #[test]
    fn typed_accessors_reject_other_variants() {
        let style = Style::new()
            .with(StyleKey::MaxWidth, StyleValue::Percent(77.0))
            .with(StyleKey::FlexDirection, FlexDirection::Row);

        assert_eq!(style.number(StyleKey::MaxWidth), None);
        assert_eq!(style.percent(StyleKey::MaxWidth), Some(77.0));
        assert_eq!(style.direction(), FlexDirection::Row);
        assert_eq!(Style::new().direction(), FlexDirection::Column);
    }
}
