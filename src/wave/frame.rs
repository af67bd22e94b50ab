/// Frame index that wraps once a full pattern cycle has been drawn.
///
/// The renderer only looks at the counter through modulo arithmetic, so wrapping at
/// `pattern length * glyph count` leaves the animation unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameCounter {
    value: usize,
    cycle: usize,
}

impl FrameCounter {
    pub(crate) fn new(pattern_len: usize, glyph_count: usize) -> Self {
        Self { value: 0, cycle: (pattern_len * glyph_count).max(1) }
    }

    pub(crate) fn value(&self) -> usize {
        self.value
    }

    pub(crate) fn advance(&mut self) {
        self.value = (self.value + 1) % self.cycle;
    }
}
