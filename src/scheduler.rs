use crate::config::WaveConfig;
use crate::terminal::{LineDisplay, TerminalSize};
use crate::wave::{FrameCounter, WaveRenderer, wave_width};
use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;
use tracing::{debug, trace};

/// Install a SIGINT/SIGTERM handler and return the channel it reports on.
///
/// The receiver is the stop token for [`Scheduler::run`].
pub(crate) fn stop_on_signal() -> Result<Receiver<()>, RunError> {
    let (sender, receiver) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = sender.send(());
    })?;
    Ok(receiver)
}

/// Drives the wave renderer at a fixed period until told to stop.
pub(crate) struct Scheduler<W: Write, S: TerminalSize> {
    renderer: WaveRenderer,
    counter: FrameCounter,
    period: Duration,
    display: LineDisplay<W>,
    size: S,
}

impl<W: Write, S: TerminalSize> Scheduler<W, S> {
    pub(crate) fn new(config: WaveConfig, out: W, size: S) -> Self {
        let WaveConfig { pattern, glyphs, period } = config;
        let counter = FrameCounter::new(pattern.len(), glyphs.len());
        Self {
            renderer: WaveRenderer::new(pattern, glyphs),
            counter,
            period,
            display: LineDisplay::new(out),
            size,
        }
    }

    /// Render and draw a single frame
    pub(crate) fn tick(&mut self) -> Result<(), RunError> {
        let frame = self.counter.value();
        let width = wave_width(self.size.columns_or_fallback());
        let glyph = self.renderer.advance(frame, width);
        trace!(frame, width, %glyph, "drawing frame");

        self.display.draw(&self.renderer.line())?;
        self.counter.advance();
        Ok(())
    }

    /// Draw frames until a message arrives on `stop` or its sender goes away.
    ///
    /// The next frame is scheduled only once the current one has been drawn. The line is
    /// terminated with a newline on every way out of this function.
    pub(crate) fn run(mut self, stop: &Receiver<()>) -> Result<(), RunError> {
        loop {
            self.tick()?;
            match stop.recv_timeout(self.period) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) => {
                    debug!("stop requested");
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("stop channel closed");
                    break;
                }
            }
        }
        self.display.finish()?;
        Ok(())
    }
}

/// Errors that can occur while running the animation
#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),

    #[error("failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use std::thread;

    struct FixedSize(u16);

    impl TerminalSize for FixedSize {
        fn columns(&self) -> Option<u16> {
            Some(self.0)
        }
    }

    struct UnknownSize;

    impl TerminalSize for UnknownSize {
        fn columns(&self) -> Option<u16> {
            None
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn config() -> WaveConfig {
        let mut rng = fastrand::Rng::new();
        WaveConfig::from_cli(&Cli::default(), &mut rng).expect("failed to build")
    }

    fn frames(output: &[u8]) -> Vec<String> {
        let text = String::from_utf8(output.to_vec()).expect("invalid utf8");
        text.trim_end_matches('\n').split("\r\x1b[K").skip(1).map(String::from).collect()
    }

    #[test]
    fn test_ticks_draw_growing_line() {
        let mut out = Vec::new();
        {
            let mut scheduler = Scheduler::new(config(), &mut out, FixedSize(16));
            for _ in 0..24 {
                scheduler.tick().expect("tick failed");
            }
        }
        let frames = frames(&out);
        assert_eq!(frames.len(), 24);
        for (index, frame) in frames.iter().enumerate() {
            assert_eq!(frame.chars().count(), (index + 1).min(10));
        }
        assert_eq!(frames[23], "⠤⣄⣀⣠⠤⠖⠒⠋⠉⠙");
    }

    #[test]
    fn test_width_follows_terminal() {
        let mut out = Vec::new();
        {
            let mut scheduler = Scheduler::new(config(), &mut out, FixedSize(200));
            for _ in 0..100 {
                scheduler.tick().expect("tick failed");
            }
        }
        let frames = frames(&out);
        assert_eq!(frames.last().map(|frame| frame.chars().count()), Some(58));
    }

    #[test]
    fn test_unknown_width_uses_fallback() {
        let mut out = Vec::new();
        {
            let mut scheduler = Scheduler::new(config(), &mut out, UnknownSize);
            for _ in 0..40 {
                scheduler.tick().expect("tick failed");
            }
        }
        let frames = frames(&out);
        assert_eq!(frames.len(), 40);
        assert_eq!(frames.last().map(|frame| frame.chars().count()), Some(26));
    }

    #[test]
    fn test_output_is_deterministic() {
        let run = || {
            let mut out = Vec::new();
            {
                let mut scheduler = Scheduler::new(config(), &mut out, FixedSize(80));
                for _ in 0..200 {
                    scheduler.tick().expect("tick failed");
                }
            }
            out
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_run_stops_on_message() {
        let (sender, receiver) = mpsc::channel();
        sender.send(()).expect("failed to send");
        let mut out = Vec::new();
        Scheduler::new(config(), &mut out, FixedSize(80)).run(&receiver).expect("run failed");
        assert_eq!(frames(&out).len(), 1);
        assert!(out.ends_with(b"\n"));
        assert!(!out.ends_with(b"\n\n"));
    }

    #[test]
    fn test_run_stops_when_sender_dropped() {
        let (sender, receiver) = mpsc::channel::<()>();
        drop(sender);
        let mut out = Vec::new();
        Scheduler::new(config(), &mut out, FixedSize(80)).run(&receiver).expect("run failed");
        assert!(out.ends_with(b"\n"));
    }

    #[test]
    fn test_run_keeps_drawing_until_stopped() {
        let (sender, receiver) = mpsc::channel();
        let stopper = thread::spawn(move || {
            thread::sleep(Duration::from_millis(120));
            sender.send(()).expect("failed to send");
        });
        let mut out = Vec::new();
        Scheduler::new(config(), &mut out, FixedSize(80)).run(&receiver).expect("run failed");
        stopper.join().expect("stopper panicked");
        assert!(frames(&out).len() > 1);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut scheduler = Scheduler::new(config(), BrokenPipe, FixedSize(80));
        assert!(matches!(scheduler.tick(), Err(RunError::Io(_))));
    }
}
