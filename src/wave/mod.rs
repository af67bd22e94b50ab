mod frame;
mod glyphs;
mod pattern;
mod renderer;

pub(crate) use frame::FrameCounter;
pub(crate) use glyphs::{DEFAULT_GLYPHS, GlyphSet, GlyphSetError};
pub(crate) use pattern::{DEFAULT_PATTERN, PatternCode, PatternError, TURBULENCE_INTENSITY};
pub(crate) use renderer::{WaveRenderer, wave_width};
