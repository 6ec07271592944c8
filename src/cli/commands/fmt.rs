use std::fs;

use anyhow::{Context, Result};

use super::super::args::FmtCommand;
use super::{CommandResult, CommandSummary, FmtSummary, helper::finish};
use crate::{context::CheckContext, format::save, issues::Issue};

pub fn fmt(cmd: FmtCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let mut changed = Vec::new();
    for loaded in ctx.catalogues() {
        let current = fs::read(&loaded.path)
            .with_context(|| format!("Failed to read file: {}", loaded.path.display()))?;
        let formatted = save(&loaded.catalogue);
        if current == formatted {
            continue;
        }
        if cmd.apply {
            fs::write(&loaded.path, &formatted)
                .with_context(|| format!("Failed to write file: {}", loaded.path.display()))?;
        }
        changed.push(ctx.display_path(&loaded.path));
    }

    let issues = ctx
        .parse_errors()
        .into_iter()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Fmt(FmtSummary {
            changed,
            is_apply: cmd.apply,
        }),
        issues,
        ctx.files_checked(),
        cmd.apply,
    ))
}
