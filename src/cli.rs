use clap::Parser;
use std::ffi::{OsStr, OsString};

/// Draws a scrolling braille wave on the current terminal line.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "bwave", disable_help_flag = true, disable_version_flag = true)]
pub(crate) struct Cli {
    /// Replace the fixed wave pattern with a random one
    #[arg(short = 't', long = "turbulence")]
    pub(crate) turbulence: bool,
}

impl Cli {
    /// Parse the process arguments.
    ///
    /// Only the turbulence flag is recognised. It is honoured wherever it appears and
    /// every other token is ignored, so this never fails on unknown input.
    pub(crate) fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from("bwave"));
        let turbulent = args.any(|arg| is_turbulence_flag(&arg));

        let mut recognized = vec![program];
        if turbulent {
            recognized.push(OsString::from("--turbulence"));
        }
        Self::try_parse_from(recognized)
    }
}

fn is_turbulence_flag(arg: &OsStr) -> bool {
    matches!(arg.to_str(), Some("-t" | "--turbulence"))
}
