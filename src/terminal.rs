use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Column count assumed when the terminal size cannot be read.
pub(crate) const FALLBACK_COLUMNS: u16 = 32;

/// Source of the current terminal width
pub(crate) trait TerminalSize {
    /// Current column count, `None` when it can't be determined
    fn columns(&self) -> Option<u16>;

    /// Current column count, or [`FALLBACK_COLUMNS`] when unknown
    fn columns_or_fallback(&self) -> u16 {
        self.columns().unwrap_or_else(|| {
            tracing::trace!(columns = FALLBACK_COLUMNS, "terminal width unavailable, using fallback");
            FALLBACK_COLUMNS
        })
    }
}

/// Queries the terminal attached to the process.
pub(crate) struct CrosstermSize;

impl TerminalSize for CrosstermSize {
    fn columns(&self) -> Option<u16> {
        usable_columns(crossterm::terminal::size())
    }
}

/// Column count from a `(columns, rows)` size query, `None` if it is unusable
fn usable_columns(size: io::Result<(u16, u16)>) -> Option<u16> {
    match size {
        // Some pseudo terminals report a zero size instead of failing
        Ok((0, _)) => None,
        Ok((columns, _)) => Some(columns),
        Err(e) => {
            tracing::trace!(error = %e, "failed to query terminal size");
            None
        }
    }
}

/// Redraws a single terminal line in place.
///
/// The line is terminated with a newline exactly once: by [`LineDisplay::finish`], or on
/// drop if `finish` was never reached.
pub(crate) struct LineDisplay<W: Write> {
    out: W,
    finished: bool,
}

impl<W: Write> LineDisplay<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Replace the current line with `line`
    pub(crate) fn draw(&mut self, line: &str) -> io::Result<()> {
        queue!(self.out, Print('\r'), Clear(ClearType::UntilNewLine), Print(line))?;
        self.out.flush()
    }

    /// Move the cursor past the drawn line
    pub(crate) fn finish(&mut self) -> io::Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> Drop for LineDisplay<W> {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}
