#![forbid(unsafe_code)]

//! Title line arrangement.
//!
//! Turns a [`TitleStyle`] plus an available width into concrete display
//! lines: word-wrapped with a grapheme fallback for overlong words, clamped
//! to `max_lines` (with a `…` marker when content was dropped), and given a
//! per-line x-offset for the title's alignment.
//!
//! Widths are display columns, not bytes or chars: CJK graphemes count as
//! two columns, combining sequences as one.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::title::{HorizontalAlignment, TitleStyle};

/// The ellipsis appended to a clamped arrangement.
pub const TRUNCATION_MARKER: &str = "\u{2026}";

/// The outcome of arranging a title into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleArrangement {
    /// Display lines, top to bottom.
    pub lines: Vec<String>,
    /// X-offset in columns for each line, per the title's alignment.
    pub offsets: Vec<u16>,
    /// Whether the max-lines clamp dropped content.
    pub truncated: bool,
}

impl TitleArrangement {
    /// Check whether nothing will be displayed.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of display lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    fn empty() -> Self {
        Self {
            lines: Vec::new(),
            offsets: Vec::new(),
            truncated: false,
        }
    }
}

/// Arrange a title's text into display lines for the given width.
///
/// Explicit newlines in the text start new lines; each resulting paragraph
/// is word-wrapped to `width` columns. When `max_lines` is nonzero and the
/// title does not [`expand_to_fit`](TitleStyle::expand_to_fit), the result
/// is clamped and the last kept line ends in [`TRUNCATION_MARKER`]. An
/// expanding title claims all the space it is given, so the clamp does not
/// apply to it.
///
/// A zero width yields an empty arrangement.
pub fn arrange(style: &TitleStyle, width: u16) -> TitleArrangement {
    let _span = tracing::debug_span!("title_arrange", width, max_lines = style.max_lines).entered();

    if width == 0 || style.text.is_empty() {
        return TitleArrangement::empty();
    }

    let columns = width as usize;
    let mut lines: Vec<String> = Vec::new();
    for paragraph in style.text.split('\n') {
        wrap_paragraph(paragraph, columns, &mut lines);
    }

    let mut truncated = false;
    let clamp = if style.expand_to_fit { 0 } else { style.max_lines };
    if clamp > 0 && lines.len() > clamp as usize {
        lines.truncate(clamp as usize);
        if let Some(last) = lines.last_mut() {
            fit_marker(last, columns);
        }
        truncated = true;
        tracing::trace!(kept = lines.len(), "clamped title to max lines");
    }

    let offsets = lines
        .iter()
        .map(|line| align_offset(line.width(), width, style.alignment))
        .collect();

    TitleArrangement {
        lines,
        offsets,
        truncated,
    }
}

/// Word-wrap one paragraph into `out`, breaking overlong words at grapheme
/// boundaries.
fn wrap_paragraph(paragraph: &str, columns: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in paragraph.split_word_bounds() {
        let word_width = word.width();
        if word_width == 0 {
            current.push_str(word);
            continue;
        }

        let is_space = word.chars().all(char::is_whitespace);
        if current_width + word_width <= columns {
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        // Break point: flush the current line, drop the separating space.
        if is_space {
            flush(&mut current, &mut current_width, out);
            continue;
        }

        if word_width <= columns {
            flush(&mut current, &mut current_width, out);
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Word wider than the whole line: split it at grapheme boundaries.
        for grapheme in word.graphemes(true) {
            let gw = grapheme.width();
            if current_width + gw > columns {
                flush(&mut current, &mut current_width, out);
            }
            current.push_str(grapheme);
            current_width += gw;
        }
    }

    let trimmed = current.trim_end();
    if !trimmed.is_empty() || out.is_empty() {
        out.push(trimmed.to_string());
    }
}

fn flush(current: &mut String, current_width: &mut usize, out: &mut Vec<String>) {
    let trimmed = current.trim_end();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
    current.clear();
    *current_width = 0;
}

/// Pop graphemes off the end of `line` until the truncation marker fits,
/// then append it.
fn fit_marker(line: &mut String, columns: usize) {
    let marker_width = TRUNCATION_MARKER.width();
    while !line.is_empty() && line.width() + marker_width > columns {
        let cut = line
            .grapheme_indices(true)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        line.truncate(cut);
    }
    while line.ends_with(char::is_whitespace) {
        line.pop();
    }
    line.push_str(TRUNCATION_MARKER);
}

/// Starting column for a line of the given width, per alignment.
fn align_offset(line_width: usize, width: u16, alignment: HorizontalAlignment) -> u16 {
    let line_width = u16::try_from(line_width).unwrap_or(u16::MAX);
    match alignment {
        HorizontalAlignment::Left => 0,
        HorizontalAlignment::Center => width.saturating_sub(line_width) / 2,
        HorizontalAlignment::Right => width.saturating_sub(line_width),
    }
}
