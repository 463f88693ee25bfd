#![forbid(unsafe_code)]

//! Fill descriptors: solid colors and two-point gradients.
//!
//! A [`Paint`] describes how an area is filled, without saying anything about
//! how it gets rasterized. Gradients are compared structurally (endpoints and
//! colors), never by identity, so two independently built gradients with the
//! same geometry are the same paint.

use std::hash::{Hash, Hasher};

use crate::color::Rgba;

/// A 2-D position in abstract drawing units.
///
/// Coordinates are `f32`, but equality and hashing are bitwise: two points
/// are equal exactly when their coordinate bit patterns match. This keeps
/// `Eq`/`Hash` coherent for every value, NaN included, at the cost of
/// treating `0.0` and `-0.0` as distinct.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

/// A linear gradient between two endpoint/color pairs.
///
/// `cyclic` controls whether the gradient repeats beyond the endpoints or
/// clamps to the end colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gradient {
    /// Start anchor of the gradient axis.
    pub start: Point,
    /// End anchor of the gradient axis.
    pub end: Point,
    /// Color at the start anchor.
    pub start_color: Rgba,
    /// Color at the end anchor.
    pub end_color: Rgba,
    /// Repeat the gradient beyond the anchors instead of clamping.
    pub cyclic: bool,
}

impl Gradient {
    /// Create an acyclic gradient between two endpoint/color pairs.
    pub fn new(start: Point, end: Point, start_color: Rgba, end_color: Rgba) -> Self {
        if start == end {
            tracing::debug!(?start, "gradient endpoints coincide; fill degenerates to start color");
        }
        Self {
            start,
            end,
            start_color,
            end_color,
            cyclic: false,
        }
    }

    /// Set whether the gradient repeats beyond its anchors.
    #[must_use]
    pub fn cyclic(mut self, cyclic: bool) -> Self {
        self.cyclic = cyclic;
        self
    }
}

/// A fill style: a solid color or a two-point gradient.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum Paint {
    /// A uniform fill.
    Solid(Rgba),
    /// A linear gradient fill.
    Gradient(Gradient),
}

impl Paint {
    /// Check whether this paint is a solid color.
    pub const fn is_solid(&self) -> bool {
        matches!(self, Paint::Solid(_))
    }

    /// The solid color, if this paint is one.
    pub const fn as_solid(&self) -> Option<Rgba> {
        match self {
            Paint::Solid(color) => Some(*color),
            Paint::Gradient(_) => None,
        }
    }

    /// The gradient descriptor, if this paint is one.
    pub const fn as_gradient(&self) -> Option<&Gradient> {
        match self {
            Paint::Solid(_) => None,
            Paint::Gradient(gradient) => Some(gradient),
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(Rgba::BLACK)
    }
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Paint::Solid(color)
    }
}

impl From<Gradient> for Paint {
    fn from(gradient: Gradient) -> Self {
        Paint::Gradient(gradient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn sample_gradient() -> Gradient {
        Gradient::new(
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Rgba::RED,
            Rgba::BLUE,
        )
    }

    #[test]
    fn point_equality_is_bitwise() {
        assert_eq!(Point::new(1.5, -2.5), Point::new(1.5, -2.5));
        assert_ne!(Point::new(0.0, 0.0), Point::new(-0.0, 0.0));
        // NaN equals itself under bitwise comparison
        let nan = Point::new(f32::NAN, 0.0);
        assert_eq!(nan, nan);
    }

    #[test]
    fn equal_points_hash_identically() {
        let a = Point::new(3.25, 7.5);
        let b = Point::new(3.25, 7.5);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn gradients_compare_structurally() {
        assert_eq!(sample_gradient(), sample_gradient());
        let shifted = Gradient::new(
            Point::new(1.0, 2.0),
            Point::new(3.0, 5.0),
            Rgba::RED,
            Rgba::BLUE,
        );
        assert_ne!(sample_gradient(), shifted);
    }

    #[test]
    fn cyclic_flag_distinguishes_gradients() {
        let acyclic = sample_gradient();
        let cyclic = sample_gradient().cyclic(true);
        assert_ne!(acyclic, cyclic);
    }

    #[test]
    fn paint_accessors() {
        let solid = Paint::from(Rgba::GREEN);
        assert!(solid.is_solid());
        assert_eq!(solid.as_solid(), Some(Rgba::GREEN));
        assert!(solid.as_gradient().is_none());

        let gradient = Paint::from(sample_gradient());
        assert!(!gradient.is_solid());
        assert_eq!(gradient.as_gradient(), Some(&sample_gradient()));
    }

    #[test]
    fn cloned_gradient_is_independent() {
        let original = Paint::from(sample_gradient());
        let mut copy = original.clone();
        if let Paint::Gradient(g) = &mut copy {
            g.end_color = Rgba::WHITE;
        }
        assert_ne!(original, copy);
        assert_eq!(
            original.as_gradient().map(|g| g.end_color),
            Some(Rgba::BLUE)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn paint_serde_round_trip() {
        let paint = Paint::from(sample_gradient().cyclic(true));
        let json = serde_json::to_string(&paint).unwrap();
        let back: Paint = serde_json::from_str(&json).unwrap();
        assert_eq!(paint, back);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn solid_paint_serializes_as_tagged_hex() {
        let json = serde_json::to_value(Paint::from(Rgba::RED)).unwrap();
        assert_eq!(json["kind"], "solid");
        assert_eq!(json["value"], "#ff0000");
    }
}
