//! Shared state for one run over a project's catalogues.

use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
};

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    catalogue::{Entry, ValidationWarning},
    cli::args::CommonArgs,
    config::{Config, load_config},
    issues::ParseErrorIssue,
    workspace::{LoadedCatalogue, Workspace, load_workspace},
};

/// Configuration and loaded catalogues for checks and edits.
///
/// Catalogues are loaded eagerly so configuration and scan errors surface
/// immediately. Validation warnings are computed on first use.
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    workspace: Workspace,

    /// `(catalogue index, warning)` for every loaded catalogue.
    validation: OnceCell<Vec<(usize, ValidationWarning)>>,
}

impl CheckContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args.path.clone();

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .tscatrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(ref catalogues_root) = common_args.catalogues_root {
            config.catalogues_root = catalogues_root.to_string_lossy().to_string();
        }
        if let Some(ref source_language) = common_args.source_language {
            config.source_language = source_language.clone();
        }
        config.validate()?;

        Self::from_config(&root_dir, config, verbose)
    }

    pub fn from_config(root_dir: &Path, config: Config, verbose: bool) -> Result<Self> {
        let workspace = load_workspace(root_dir, &config, verbose)?;
        Ok(Self {
            config,
            root_dir: root_dir.to_path_buf(),
            verbose,
            workspace,
            validation: OnceCell::new(),
        })
    }

    pub fn catalogues(&self) -> &[LoadedCatalogue] {
        &self.workspace.catalogues
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Number of catalogue files found, loaded or not.
    pub fn files_checked(&self) -> usize {
        self.workspace.catalogues.len() + self.workspace.failures.len()
    }

    /// Every entry rules should look at: contexts in `ignoreContexts` are
    /// left out.
    pub fn entries(&self) -> impl Iterator<Item = (&LoadedCatalogue, &Entry)> {
        self.workspace.catalogues.iter().flat_map(move |loaded| {
            loaded
                .catalogue
                .entries()
                .filter(move |entry| !self.config.is_ignored_context(&entry.context))
                .map(move |entry| (loaded, entry))
        })
    }

    /// Validation warnings of every catalogue, ignored contexts removed.
    pub fn validation_warnings(&self) -> &[(usize, ValidationWarning)] {
        self.validation.get_or_init(|| {
            let config = &self.config;
            let per_catalogue: Vec<Vec<(usize, ValidationWarning)>> = self
                .workspace
                .catalogues
                .par_iter()
                .enumerate()
                .map(|(index, loaded)| {
                    loaded
                        .catalogue
                        .validate()
                        .into_iter()
                        .filter(|w| !config.is_ignored_context(&w.context))
                        .map(|w| (index, w))
                        .collect()
                })
                .collect();
            per_catalogue.into_iter().flatten().collect()
        })
    }

    pub fn parse_errors(&self) -> Vec<ParseErrorIssue> {
        self.workspace
            .failures
            .iter()
            .map(|failure| ParseErrorIssue {
                file_path: self.display_path(&failure.path),
                line: failure.line,
                error: failure.error.clone(),
            })
            .collect()
    }

    /// Path as shown in reports: relative to the project root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string()
    }
}
