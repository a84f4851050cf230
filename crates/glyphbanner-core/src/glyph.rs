//! # Glyph Tables
//!
//! Parse banner font resources into a lookup table of one glyph per
//! printable ASCII character.
//!
//! A font resource starts with a marker character (a newline in the usual
//! files), followed by 95 glyphs of 8 rows each, separated by blank lines:
//!
//! ```text
//! <marker>
//! <8 rows for ' '>
//!
//! <8 rows for '!'>
//!
//! ...
//! <8 rows for '~'>
//! ```

use crate::error::{BannerError, Result};

/// Number of rows in every glyph
pub const GLYPH_HEIGHT: usize = 8;

/// Number of glyphs in a complete table (ASCII 32..=126)
pub const GLYPH_COUNT: usize = 95;

/// First code point covered by a table
pub const FIRST_CHAR: char = ' ';

/// Last code point covered by a table
pub const LAST_CHAR: char = '~';

/// One character's visual rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
}

impl Glyph {
    /// Build a glyph from one block of the font resource
    fn from_block(block: &str, ch: char) -> Result<Self> {
        let rows: Vec<String> = block
            .split('\n')
            .take(GLYPH_HEIGHT)
            .map(str::to_owned)
            .collect();

        if rows.len() < GLYPH_HEIGHT {
            return Err(BannerError::MalformedFont(format!(
                "glyph for {:?} has {} rows, expected {}",
                ch,
                rows.len(),
                GLYPH_HEIGHT
            )));
        }

        Ok(Self { rows })
    }

    /// Row `index` (0..8) of this glyph
    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(String::as_str)
    }

    /// Widest row, in characters
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }
}

/// Map a character to its slot in a glyph table.
///
/// Returns `None` for anything outside printable ASCII.
pub fn glyph_index(ch: char) -> Option<usize> {
    if (FIRST_CHAR..=LAST_CHAR).contains(&ch) {
        Some(ch as usize - FIRST_CHAR as usize)
    } else {
        None
    }
}

/// Complete set of 95 glyphs for one font.
///
/// Immutable once parsed, so a table can be shared between threads behind
/// an `Arc` without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: Vec<Glyph>,
}

impl GlyphTable {
    /// Parse a font resource.
    ///
    /// The first character is a structural marker and is skipped. The rest
    /// must split on blank lines into exactly [`GLYPH_COUNT`] blocks.
    pub fn parse(resource: &str) -> Result<Self> {
        let normalized;
        let resource = if resource.contains("\r\n") {
            normalized = resource.replace("\r\n", "\n");
            normalized.as_str()
        } else {
            resource
        };

        let mut chars = resource.chars();
        if chars.next().is_none() {
            return Err(BannerError::MalformedFont("resource is empty".into()));
        }
        let body = chars.as_str();

        let blocks: Vec<&str> = body.split("\n\n").collect();
        if blocks.len() != GLYPH_COUNT {
            return Err(BannerError::MalformedFont(format!(
                "found {} glyph blocks, expected {}",
                blocks.len(),
                GLYPH_COUNT
            )));
        }

        let glyphs = blocks
            .into_iter()
            .zip(FIRST_CHAR..=LAST_CHAR)
            .map(|(block, ch)| Glyph::from_block(block, ch))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { glyphs })
    }

    /// Glyph for `ch`, or `None` if the character is not printable ASCII
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        glyph_index(ch).and_then(|i| self.glyphs.get(i))
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate glyphs in code-point order
    pub fn iter(&self) -> impl Iterator<Item = (char, &Glyph)> {
        (FIRST_CHAR..=LAST_CHAR).zip(self.glyphs.iter())
    }

    /// Rendered width of one logical line, or `None` if it holds a
    /// character the table does not cover
    pub fn width_of(&self, line: &str) -> Option<usize> {
        line.chars()
            .map(|ch| self.glyph(ch).map(Glyph::width))
            .sum()
    }
}

/// Synthetic fonts for tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::{FIRST_CHAR, GLYPH_HEIGHT, LAST_CHAR};

    /// Row `row` of the synthetic glyph for `ch`.
    ///
    /// Width grows with the code point so glyph widths differ.
    pub fn glyph_row(ch: char, row: usize) -> String {
        let pad = (ch as usize) % 3;
        format!("{}{}{}", ch, row, " ".repeat(pad))
    }

    /// Font resource with `count` blocks, laid out like the real files
    pub fn font_with_blocks(count: usize) -> String {
        let blocks: Vec<String> = (0..count)
            .map(|i| {
                let ch = char::from_u32(FIRST_CHAR as u32 + (i as u32 % 95)).unwrap_or('?');
                (0..GLYPH_HEIGHT)
                    .map(|row| glyph_row(ch, row))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect();

        format!("\n{}\n", blocks.join("\n\n"))
    }

    /// Complete, valid font resource
    pub fn font() -> String {
        font_with_blocks((FIRST_CHAR..=LAST_CHAR).count())
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{font, font_with_blocks, glyph_row};
    use super::*;

    #[test]
    fn test_parse_complete_font() {
        let table = GlyphTable::parse(&font()).unwrap();
        assert_eq!(table.len(), GLYPH_COUNT);

        let a = table.glyph('A').unwrap();
        assert_eq!(a.rows().count(), GLYPH_HEIGHT);
        for row in 0..GLYPH_HEIGHT {
            assert_eq!(a.row(row), Some(glyph_row('A', row).as_str()));
        }
    }

    #[test]
    fn test_wrong_block_count_is_malformed() {
        for count in [94, 96] {
            let err = GlyphTable::parse(&font_with_blocks(count)).unwrap_err();
            assert!(matches!(err, BannerError::MalformedFont(_)), "{count}");
        }
    }

    #[test]
    fn test_empty_resource_is_malformed() {
        assert!(matches!(
            GlyphTable::parse(""),
            Err(BannerError::MalformedFont(_))
        ));
    }

    #[test]
    fn test_short_glyph_is_malformed() {
        let resource = font().replacen("!0\n!1\n", "", 1);
        let err = GlyphTable::parse(&resource).unwrap_err();
        assert!(err.to_string().contains("'!'"));
    }

    #[test]
    fn test_crlf_resource() {
        let crlf = font().replace('\n', "\r\n");
        let table = GlyphTable::parse(&crlf).unwrap();
        assert_eq!(table, GlyphTable::parse(&font()).unwrap());
    }

    #[test]
    fn test_glyph_lookup_is_bounds_checked() {
        let table = GlyphTable::parse(&font()).unwrap();
        assert!(table.glyph(' ').is_some());
        assert!(table.glyph('~').is_some());
        assert!(table.glyph('\u{7f}').is_none());
        assert!(table.glyph('\n').is_none());
        assert!(table.glyph('é').is_none());
    }

    #[test]
    fn test_glyph_index() {
        assert_eq!(glyph_index(' '), Some(0));
        assert_eq!(glyph_index('A'), Some(33));
        assert_eq!(glyph_index('~'), Some(94));
        assert_eq!(glyph_index('\u{1f}'), None);
    }

    #[test]
    fn test_width_of() {
        let table = GlyphTable::parse(&font()).unwrap();
        let expected = glyph_row('H', 0).len() + glyph_row('i', 0).len();
        assert_eq!(table.width_of("Hi"), Some(expected));
        assert_eq!(table.width_of("H\ti"), None);
        assert_eq!(table.width_of(""), Some(0));
    }

    #[test]
    fn test_iter_in_code_point_order() {
        let table = GlyphTable::parse(&font()).unwrap();
        let chars: String = table.iter().map(|(ch, _)| ch).take(4).collect();
        assert_eq!(chars, " !\"#");
    }
}
