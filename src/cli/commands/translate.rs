use std::fs;

use anyhow::{Context, Result};

use super::super::args::TranslateCommand;
use super::{CommandResult, CommandSummary, TranslateSummary, helper::finish};
use crate::{
    active::ActiveCatalogue,
    catalogue::Catalogue,
    config::load_config,
    translate::{Translate, TranslatePolicy},
};

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let mut config = load_config(&cmd.common.path)?.config;
    if let Some(source_language) = cmd.common.source_language {
        config.source_language = source_language;
    }
    let policy = if cmd.finished_only {
        TranslatePolicy::finished_only()
    } else {
        config.translate_policy()
    };

    let bytes = fs::read(&cmd.file)
        .with_context(|| format!("Failed to read catalogue: {}", cmd.file.display()))?;

    let active =
        ActiveCatalogue::with_policy(Catalogue::source_only(&config.source_language), policy);
    let error = active
        .switch_locale(&bytes, &config.source_language)
        .err()
        .map(|e| format!("{}: {}", cmd.file.display(), e));

    let text = active.translate(&cmd.context, &cmd.source, cmd.comment.as_deref());

    Ok(finish(
        CommandSummary::Translate(TranslateSummary { text, error }),
        Vec::new(),
        1,
        true,
    ))
}
