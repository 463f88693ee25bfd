#![forbid(unsafe_code)]

//! Font descriptors.
//!
//! [`FontSpec`] names a font without loading one: family, style, and point
//! size. Resolution against installed fonts is a rendering concern and lives
//! outside this crate.

/// Weight/slant variant of a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// Check whether the style carries bold weight.
    pub const fn is_bold(&self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    /// Check whether the style carries an italic slant.
    pub const fn is_italic(&self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }
}

/// A font described by family name, style, and point size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSpec {
    /// Family name, e.g. `"SansSerif"`.
    pub family: String,
    /// Weight/slant variant.
    pub style: FontStyle,
    /// Size in points.
    pub size: u16,
}

impl FontSpec {
    /// Create a font descriptor.
    pub fn new(family: impl Into<String>, style: FontStyle, size: u16) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }

    /// Create a normal-weight descriptor.
    pub fn plain(family: impl Into<String>, size: u16) -> Self {
        Self::new(family, FontStyle::Normal, size)
    }

    /// Create a bold descriptor.
    pub fn bold(family: impl Into<String>, size: u16) -> Self {
        Self::new(family, FontStyle::Bold, size)
    }
}
