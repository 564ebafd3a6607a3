pub mod extract;
pub mod init;

use std::path::PathBuf;

use super::args::OutputFormat;
use crate::core::ExtractRun;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub run: ExtractRun,
    pub format: OutputFormat,
    /// `--check`: extracted messages fail the command.
    pub check: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a glot-extract command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
