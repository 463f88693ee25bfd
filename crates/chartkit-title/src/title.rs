#![forbid(unsafe_code)]

//! The title style value object.

use chartkit_style::{FontSpec, Paint};
use serde::{Deserialize, Serialize};

/// Horizontal placement of text within its allocated region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Styling for a chart title: text, font, fills, and layout knobs.
///
/// This is a plain value type. Equality is structural across every field,
/// equal values hash identically, and `Clone` is a deep, independent copy
/// (mutating a clone's gradient never touches the original). Construction
/// uses consuming single-field setters:
///
/// ```
/// use chartkit_style::Rgba;
/// use chartkit_title::{HorizontalAlignment, TitleStyle};
///
/// let title = TitleStyle::new("Quarterly Revenue")
///     .alignment(HorizontalAlignment::Left)
///     .paint(Rgba::rgb(30, 30, 30))
///     .max_lines(2);
/// assert_eq!(title.text, "Quarterly Revenue");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleStyle {
    /// The display text.
    pub text: String,
    /// Font for the title text.
    pub font: FontSpec,
    /// Horizontal alignment of each line.
    pub alignment: HorizontalAlignment,
    /// Foreground fill for the text.
    pub paint: Paint,
    /// Background fill behind the title, if any.
    pub background_paint: Option<Paint>,
    /// Maximum lines to display when arranging; 0 means unlimited.
    pub max_lines: u32,
    /// Hover tooltip text, if any.
    pub tooltip: Option<String>,
    /// Hyperlink target, if any.
    pub url: Option<String>,
    /// Expand to fill the available layout space instead of hugging the text.
    pub expand_to_fit: bool,
}

impl TitleStyle {
    /// The baseline title font.
    pub fn default_font() -> FontSpec {
        FontSpec::bold("SansSerif", 12)
    }

    /// Create a title style with the given text and default everything else.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the display text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the font.
    #[must_use]
    pub fn font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    /// Set the horizontal alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the foreground fill.
    #[must_use]
    pub fn paint(mut self, paint: impl Into<Paint>) -> Self {
        self.paint = paint.into();
        self
    }

    /// Set the background fill.
    #[must_use]
    pub fn background_paint(mut self, paint: impl Into<Paint>) -> Self {
        self.background_paint = Some(paint.into());
        self
    }

    /// Set the maximum number of lines to display (0 = unlimited).
    #[must_use]
    pub fn max_lines(mut self, max_lines: u32) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Set the tooltip text.
    #[must_use]
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set the hyperlink target.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set whether the title expands to fill available space.
    #[must_use]
    pub fn expand_to_fit(mut self, expand: bool) -> Self {
        self.expand_to_fit = expand;
        self
    }
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: Self::default_font(),
            alignment: HorizontalAlignment::default(),
            paint: Paint::default(),
            background_paint: None,
            max_lines: 0,
            tooltip: None,
            url: None,
            expand_to_fit: false,
        }
    }
}
