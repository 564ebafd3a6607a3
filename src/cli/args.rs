//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract hardcoded text into per-file message catalogs
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::core::script::TargetScript;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by commands that scan sources.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory; the config file is searched from here
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Script that marks text as translatable (overrides config file)
    #[arg(long, value_enum)]
    pub script: Option<TargetScript>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Cargo-style findings and a summary
    #[default]
    Text,
    /// Catalog and key list as JSON on stdout
    Json,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 if any translatable text is found
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract hardcoded text into per-file message catalogs
    Extract(ExtractCommand),
    /// Initialize a new .glot-extract.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn test_parse_extract_flags() {
        let args = Arguments::try_parse_from([
            "glot-extract",
            "extract",
            "--source-root",
            "web",
            "--format",
            "json",
            "--check",
            "--script",
            "hangul",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose());
        let Some(Command::Extract(cmd)) = args.command else {
            panic!("expected extract command");
        };
        assert_eq!(cmd.format, OutputFormat::Json);
        assert!(cmd.check);
        assert_eq!(cmd.common.script, Some(TargetScript::Hangul));
        assert_eq!(cmd.common.source_root, Some(PathBuf::from("web")));
    }

    #[test]
    fn test_extract_defaults() {
        let args = Arguments::try_parse_from(["glot-extract", "extract"]).unwrap();
        let Some(Command::Extract(cmd)) = args.command else {
            panic!("expected extract command");
        };
        assert_eq!(cmd.format, OutputFormat::Text);
        assert!(!cmd.check);
        assert_eq!(cmd.common.script, None);
    }
}
