use crate::cli::Cli;
use crate::wave::{DEFAULT_GLYPHS, DEFAULT_PATTERN, GlyphSet, GlyphSetError, PatternCode, PatternError, TURBULENCE_INTENSITY};
use std::time::Duration;

/// Delay between two frames.
pub(crate) const DEFAULT_PERIOD: Duration = Duration::from_millis(16);

/// Everything the animation needs, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WaveConfig {
    /// Rise/flat decision per glyph cycle
    pub pattern: PatternCode,
    /// Symbols drawn for each wave phase
    pub glyphs: GlyphSet,
    /// Time between frames
    pub period: Duration,
}

impl WaveConfig {
    /// Build the configuration for the parsed command line.
    ///
    /// `rng` is only consulted when turbulence is requested.
    pub(crate) fn from_cli(cli: &Cli, rng: &mut fastrand::Rng) -> Result<Self, ConfigError> {
        let pattern = if cli.turbulence {
            PatternCode::turbulent(TURBULENCE_INTENSITY, rng)
        } else {
            DEFAULT_PATTERN.parse()?
        };
        let glyphs = GlyphSet::new(DEFAULT_GLYPHS)?;
        Ok(Self { pattern, glyphs, period: DEFAULT_PERIOD })
    }
}

/// Errors that can occur when building the configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid wave pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("invalid glyph set: {0}")]
    Glyphs(#[from] GlyphSetError),
}
