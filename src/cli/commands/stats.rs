use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::{CommandResult, CommandSummary, StatsRow, StatsSummary, helper::finish};
use crate::{context::CheckContext, issues::Issue};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let rows = ctx
        .catalogues()
        .iter()
        .map(|loaded| StatsRow {
            file_path: ctx.display_path(&loaded.path),
            locale: loaded.locale.clone(),
            stats: loaded.catalogue.stats(),
        })
        .collect();
    let issues = ctx
        .parse_errors()
        .into_iter()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary { rows }),
        issues,
        ctx.files_checked(),
        true,
    ))
}
