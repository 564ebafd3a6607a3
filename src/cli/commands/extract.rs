use anyhow::Result;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::core::ExtractContext;

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = ExtractContext::new(&cmd.common)?;
    let run = ctx.run();

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            run,
            format: cmd.format,
            check: cmd.check,
        }),
    })
}
