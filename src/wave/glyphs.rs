/// The braille cells tracing one full wave cycle, flat cell first.
pub(crate) const DEFAULT_GLYPHS: &str = "⠤⣄⣀⣠⠤⠖⠒⠋⠉⠙⠒⠲";

/// Ordered display symbols for the wave phase.
///
/// Index 0 is the flat glyph, the rest trace the crest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GlyphSet {
    glyphs: Vec<char>,
}

impl GlyphSet {
    /// Build a glyph set from the characters of a string
    pub(crate) fn new(symbols: &str) -> Result<Self, GlyphSetError> {
        let glyphs: Vec<char> = symbols.chars().collect();
        if glyphs.is_empty() {
            return Err(GlyphSetError::Empty);
        }
        Ok(Self { glyphs })
    }

    /// The glyph drawn for frames whose pattern bit is 0
    pub(crate) fn flat(&self) -> char {
        self.glyphs[0]
    }

    /// Glyph at a phase position, wrapping around the set
    pub(crate) fn get(&self, index: usize) -> char {
        self.glyphs[index % self.glyphs.len()]
    }

    pub(crate) fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, glyph: char) -> bool {
        self.glyphs.contains(&glyph)
    }
}

/// Errors that can occur when building a glyph set
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GlyphSetError {
    #[error("glyph set must contain at least one symbol")]
    Empty,
}
