use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::report::OutputFormat;
use crate::types::ShapeKind;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "FIGSEARCH_LOG";

#[derive(Parser, Debug)]
#[command(name = "figsearch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find the longest lines and largest square outlines in a bitmap file", long_about = None)]
pub struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check the file format; prints "Valid" or "Invalid"
    Test { file: PathBuf },

    /// Find the first longest horizontal line
    Hline { file: PathBuf },

    /// Find the first longest vertical line
    Vline { file: PathBuf },

    /// Find the first largest square outline
    Square { file: PathBuf },
}

impl Commands {
    pub fn file(&self) -> &Path {
        match self {
            Self::Test { file }
            | Self::Hline { file }
            | Self::Vline { file }
            | Self::Square { file } => file,
        }
    }

    /// The shape to search for, or `None` for `test`.
    pub fn shape(&self) -> Option<ShapeKind> {
        match self {
            Self::Test { .. } => None,
            Self::Hline { .. } => Some(ShapeKind::Horizontal),
            Self::Vline { .. } => Some(ShapeKind::Vertical),
            Self::Square { .. } => Some(ShapeKind::Square),
        }
    }
}

/// Settings for a single run, taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub format: OutputFormat,
    pub verbose: bool,
}

impl RunOptions {
    /// Default filter when [`LOG_ENV`] is unset.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "figsearch=debug"
        } else {
            "warn"
        }
    }
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            verbose: cli.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["figsearch", "hline", "bitmap.txt"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Hline {
                file: PathBuf::from("bitmap.txt")
            }
        );
        assert_eq!(cli.command.shape(), Some(ShapeKind::Horizontal));
        assert_eq!(cli.command.file(), Path::new("bitmap.txt"));
        assert_eq!(cli.format, OutputFormat::Text);

        let cli = Cli::try_parse_from(["figsearch", "test", "a.txt"]).unwrap();
        assert_eq!(cli.command.shape(), None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["figsearch", "square", "b.txt", "--format", "json", "-v"]).unwrap();
        let options = RunOptions::from(&cli);
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.verbose);
        assert_eq!(options.log_directive(), "figsearch=debug");
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["figsearch"]).is_err());
        assert!(Cli::try_parse_from(["figsearch", "circle", "a.txt"]).is_err());
        assert!(Cli::try_parse_from(["figsearch", "vline"]).is_err());
        assert!(Cli::try_parse_from(["figsearch", "vline", "a.txt", "b.txt"]).is_err());
    }
}
