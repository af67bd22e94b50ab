use super::glyphs::GlyphSet;
use super::pattern::PatternCode;
use std::collections::VecDeque;

/// Terminals at least this wide get the full-length wave.
const WIDE_TERMINAL_COLUMNS: u16 = 64;

/// Wave length on wide terminals.
const MAX_WAVE_WIDTH: usize = 58;

/// Columns kept clear on narrow terminals.
const EDGE_MARGIN: u16 = 6;

/// Number of glyphs that fit on a terminal with the given column count.
///
/// Terminals with 6 columns or fewer get an empty wave.
pub(crate) fn wave_width(columns: u16) -> usize {
    if columns >= WIDE_TERMINAL_COLUMNS {
        MAX_WAVE_WIDTH
    } else {
        usize::from(columns.saturating_sub(EDGE_MARGIN))
    }
}

/// Glyph drawn at `frame`.
///
/// Every pattern bit covers one full glyph cycle so a rising bit draws a complete crest.
pub(crate) fn glyph_at(frame: usize, pattern: &PatternCode, glyphs: &GlyphSet) -> char {
    let cycle_len = glyphs.len();
    if pattern.rises_at(frame / cycle_len) {
        glyphs.get(cycle_len - 1 - frame % cycle_len)
    } else {
        glyphs.flat()
    }
}

/// Builds the visible wave line one glyph per frame.
///
/// New glyphs enter at the front; the oldest fall off the back once the line is full.
#[derive(Debug)]
pub(crate) struct WaveRenderer {
    pattern: PatternCode,
    glyphs: GlyphSet,
    line: VecDeque<char>,
}

impl WaveRenderer {
    pub(crate) fn new(pattern: PatternCode, glyphs: GlyphSet) -> Self {
        Self { pattern, glyphs, line: VecDeque::new() }
    }

    /// Push the glyph for `frame` and trim the line to `width` glyphs
    pub(crate) fn advance(&mut self, frame: usize, width: usize) -> char {
        let glyph = glyph_at(frame, &self.pattern, &self.glyphs);
        self.line.push_front(glyph);
        self.line.truncate(width);
        glyph
    }

    /// The current line, newest glyph first
    pub(crate) fn line(&self) -> String {
        self.line.iter().collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.line.len()
    }
}
