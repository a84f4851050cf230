//! # Banner Rendering
//!
//! Validate caller text and compose glyphs into a multi-line banner.
//!
//! ```text
//!  _    _   _
//! | |  | | (_)
//! | |__| |  _      "Hi" in the standard font:
//! |  __  | | |     every character contributes one
//! | |  | | | |     strip to each of the 8 rows
//! |_|  |_| |_|
//!
//!
//! ```

use crate::error::{BannerError, Result};
use crate::font::FontName;
use crate::glyph::{GlyphTable, FIRST_CHAR, GLYPH_HEIGHT, LAST_CHAR};

/// Hard line separator accepted at the request layer
pub const SEGMENT_SEPARATOR: &str = "\r\n";

/// Most segments one request may carry
pub const MAX_SEGMENTS: usize = 2;

/// Literal two-character escape expanded to a newline
const NEWLINE_ESCAPE: &str = "\\n";

/// One render call: raw caller text and the font to draw it with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub text: String,
    pub font: FontName,
}

impl RenderRequest {
    pub fn new(text: impl Into<String>, font: FontName) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

/// Run the validation pipeline and return the normalized text.
///
/// Checks run in order and the first failure wins:
/// emptiness, segment count, escape expansion, character range.
pub fn normalize(text: &str) -> Result<String> {
    if text.is_empty() {
        return Err(BannerError::EmptyInput);
    }

    let segments: Vec<&str> = text.split(SEGMENT_SEPARATOR).collect();
    if segments.len() > MAX_SEGMENTS {
        return Err(BannerError::TooManyLines {
            segments: segments.len(),
            max: MAX_SEGMENTS,
        });
    }
    let joined = segments.join("\n");

    let expanded = joined.replace(NEWLINE_ESCAPE, "\n");
    if expanded == "\n" {
        return Err(BannerError::EmptyInput);
    }

    if let Some((position, ch)) = expanded
        .chars()
        .enumerate()
        .find(|&(_, ch)| !is_renderable(ch))
    {
        return Err(BannerError::InvalidCharacter { ch, position });
    }

    Ok(expanded)
}

/// Printable ASCII or a line break
fn is_renderable(ch: char) -> bool {
    ch == '\n' || (FIRST_CHAR..=LAST_CHAR).contains(&ch)
}

/// Validate `text` and render it with `table`
pub fn render(text: &str, table: &GlyphTable) -> Result<String> {
    let text = normalize(text)?;
    compose(&text, table)
}

/// Compose already-normalized text.
///
/// A blank line after output has started becomes a single empty row.
fn compose(text: &str, table: &GlyphTable) -> Result<String> {
    let mut out = String::new();
    let mut offset = 0;

    for line in text.split('\n') {
        let start = offset;
        offset += line.chars().count() + 1;

        if line.is_empty() && !out.is_empty() {
            out.push('\n');
            continue;
        }

        let glyphs = line
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                table.glyph(ch).ok_or(BannerError::InvalidCharacter {
                    ch,
                    position: start + i,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for row in 0..GLYPH_HEIGHT {
            for glyph in &glyphs {
                out.push_str(glyph.row(row).unwrap_or_default());
            }
            out.push('\n');
        }
    }

    Ok(out)
}
