use std::fmt;
use std::str::FromStr;

/// The pattern used when turbulence is off.
pub(crate) const DEFAULT_PATTERN: &str = "010110111011";

/// Number of bits in a randomly generated pattern.
pub(crate) const TURBULENCE_INTENSITY: usize = 99;

/// Binary sequence deciding, per glyph cycle, whether the wave rises or stays flat.
///
/// The pattern is queried cyclically: bit `i` applies to frames
/// `i * Lg .. (i + 1) * Lg` of every pattern cycle, where `Lg` is the glyph set length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PatternCode {
    bits: Vec<bool>,
}

impl PatternCode {
    /// Generate a pattern of `intensity` independent, uniformly random bits.
    ///
    /// An intensity of zero would leave nothing to index, so at least one bit is generated.
    pub(crate) fn turbulent(intensity: usize, rng: &mut fastrand::Rng) -> Self {
        let bits = (0..intensity.max(1)).map(|_| rng.bool()).collect();
        Self { bits }
    }

    /// Whether the bit at `index` (taken cyclically) marks a rising cycle
    pub(crate) fn rises_at(&self, index: usize) -> bool {
        self.bits[index % self.bits.len()]
    }

    pub(crate) fn len(&self) -> usize {
        self.bits.len()
    }
}

impl FromStr for PatternCode {
    type Err = PatternError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(PatternError::Empty);
        }
        let bits = input
            .chars()
            .enumerate()
            .map(|(position, digit)| match digit {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(PatternError::InvalidDigit { digit, position }),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { bits })
    }
}

impl fmt::Display for PatternCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a pattern code
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern code must contain at least one digit")]
    Empty,

    #[error("invalid digit '{digit}' at position {position}, expected '0' or '1'")]
    InvalidDigit { digit: char, position: usize },
}
