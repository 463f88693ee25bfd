#![forbid(unsafe_code)]

//! Style primitives for chartkit.
//!
//! # Role in chartkit
//! `chartkit-style` is the shared vocabulary for colors, fills, and fonts.
//! The title layer (and any future chart element) uses these types to stay
//! consistent without dragging in layout or rendering dependencies.
//!
//! # This crate provides
//! - [`Rgba`] colors with a hex text form.
//! - [`Paint`] fills: solid colors and two-point [`Gradient`]s with
//!   structural equality.
//! - [`FontSpec`] font descriptors.
//!
//! All types keep `Eq` and `Hash` coherent, including the float-bearing
//! gradient endpoints (compared bitwise), so styles can be deduplicated or
//! used as map keys safely. Serde support sits behind the `serde` feature.

/// RGBA color and hex parsing.
pub mod color;
/// Font descriptors.
pub mod font;
/// Solid and gradient fills.
pub mod paint;

pub use color::Rgba;
pub use font::{FontSpec, FontStyle};
pub use paint::{Gradient, Paint, Point};
