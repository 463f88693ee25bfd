#![forbid(unsafe_code)]

//! Versioned persistence for title styles.
//!
//! Styles are stored as a JSON envelope `{ "version": N, "title": {…} }`.
//! The version is checked before the payload is touched, so a future format
//! bump fails with [`CodecError::UnsupportedVersion`] rather than a
//! field-level parse error. Gradient paints round-trip exactly: endpoints
//! keep their bit patterns and colors travel in hex form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::title::TitleStyle;

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to parse title style JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported title style format version {0} (supported: {FORMAT_VERSION})")]
    UnsupportedVersion(u32),
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    title: &'a TitleStyle,
}

#[derive(Deserialize)]
struct Envelope {
    #[allow(dead_code)]
    version: u32,
    title: TitleStyle,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

/// Encode a title style as a versioned JSON document.
pub fn encode(title: &TitleStyle) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec(&EnvelopeRef {
        version: FORMAT_VERSION,
        title,
    })?;
    tracing::trace!(len = bytes.len(), version = FORMAT_VERSION, "encoded title style");
    Ok(bytes)
}

/// Decode a title style from a versioned JSON document.
///
/// Rejects documents whose version is not [`FORMAT_VERSION`].
pub fn decode(bytes: &[u8]) -> Result<TitleStyle> {
    let probe: VersionProbe = serde_json::from_slice(bytes)?;
    if probe.version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion(probe.version));
    }
    let envelope: Envelope = serde_json::from_slice(bytes)?;
    Ok(envelope.title)
}
