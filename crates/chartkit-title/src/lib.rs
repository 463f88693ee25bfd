#![forbid(unsafe_code)]

//! Chart title styling for chartkit.
//!
//! # Role in chartkit
//! A title is a labeled element positioned around a chart's drawing area.
//! This crate owns its styling: what the title says, how it is filled and
//! aligned, and how many lines it may occupy. Rendering is out of scope;
//! a drawing layer consumes [`TitleArrangement`]s and `chartkit-style`
//! paints.
//!
//! # This crate provides
//! - [`TitleStyle`], a structural value object: derived equality and
//!   hashing over every field, deep `Clone`, builder-style setters.
//! - [`arrange`], which turns a style plus an available width into wrapped,
//!   clamped, aligned display lines.
//! - [`encode`]/[`decode`], a versioned persistence pair for title styles.

/// Line arrangement: wrapping, max-lines clamping, alignment offsets.
pub mod arrange;
/// Versioned encode/decode of title styles.
pub mod codec;
/// The title style value object.
pub mod title;

pub use arrange::{TRUNCATION_MARKER, TitleArrangement, arrange};
pub use codec::{CodecError, FORMAT_VERSION, decode, encode};
pub use title::{HorizontalAlignment, TitleStyle};
