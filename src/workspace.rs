//! Discovering and loading every catalogue under the catalogues root.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::catalogue::Catalogue;
use crate::config::Config;
use crate::format::load;

/// A catalogue file that loaded successfully.
#[derive(Debug, Clone)]
pub struct LoadedCatalogue {
    pub path: PathBuf,
    /// `language` attribute, or the file name suffix when that is missing.
    pub locale: String,
    pub catalogue: Catalogue,
}

/// A catalogue file that could not be read or parsed.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub line: Option<usize>,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct Workspace {
    /// Sorted by path.
    pub catalogues: Vec<LoadedCatalogue>,
    pub failures: Vec<LoadFailure>,
    /// Directory entries that could not be accessed during the scan.
    pub skipped_count: usize,
}

impl Workspace {
    pub fn find(&self, path: &Path) -> Option<&LoadedCatalogue> {
        self.catalogues.iter().find(|loaded| loaded.path == path)
    }

    pub fn find_locale(&self, locale: &str) -> Option<&LoadedCatalogue> {
        self.catalogues.iter().find(|loaded| loaded.locale == locale)
    }
}

/// Result of scanning for catalogue files.
#[derive(Debug)]
pub struct ScanResult {
    /// Sorted, deduplicated.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Walk `root` and collect files matching `includes` but no `ignores`.
///
/// Patterns are matched against the path relative to `root`.
pub fn scan_catalogue_files(
    root: &Path,
    includes: &[String],
    ignores: &[String],
    verbose: bool,
) -> Result<ScanResult> {
    if !root.exists() {
        bail!(
            "Catalogues directory '{}' does not exist.\n\
             Hint: Check your .tscatrc.json 'cataloguesRoot' setting.",
            root.display()
        );
    }
    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let includes = compile_patterns(includes, "includes")?;
    let ignores = compile_patterns(ignores, "ignores")?;

    let mut files = Vec::new();
    let mut skipped_count = 0;
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);

        if !includes.iter().any(|p| p.matches_path(relative)) {
            continue;
        }
        if ignores.iter().any(|p| p.matches_path(relative)) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    files.dedup();
    Ok(ScanResult {
        files,
        skipped_count,
    })
}

fn compile_patterns(patterns: &[String], field: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p)
                .with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", field, p))
        })
        .collect()
}

/// Scan the configured root and parse every catalogue in parallel.
///
/// Files that fail to load are collected in `failures`; they never abort
/// loading the rest.
pub fn load_workspace(base_dir: &Path, config: &Config, verbose: bool) -> Result<Workspace> {
    let root = base_dir.join(&config.catalogues_root);
    let scan = scan_catalogue_files(&root, &config.includes, &config.ignores, verbose)?;

    let results: Vec<_> = scan.files.par_iter().map(|path| load_file(path)).collect();

    let mut workspace = Workspace {
        skipped_count: scan.skipped_count,
        ..Default::default()
    };
    for result in results {
        match result {
            Ok(loaded) => workspace.catalogues.push(loaded),
            Err(failure) => {
                if verbose {
                    eprintln!(
                        "{} {}: {}",
                        "warning:".bold().yellow(),
                        failure.path.display(),
                        failure.error
                    );
                }
                workspace.failures.push(failure);
            }
        }
    }
    Ok(workspace)
}

/// Load one catalogue file.
pub fn load_file(path: &Path) -> std::result::Result<LoadedCatalogue, LoadFailure> {
    let bytes = fs::read(path).map_err(|e| LoadFailure {
        path: path.to_path_buf(),
        line: None,
        error: format!("Failed to read file: {}", e),
    })?;
    let catalogue = load(&bytes).map_err(|e| LoadFailure {
        path: path.to_path_buf(),
        line: e.line(),
        error: e.to_string(),
    })?;

    let locale = if catalogue.language.is_empty() {
        locale_from_file_name(path).unwrap_or_default()
    } else {
        catalogue.language.clone()
    };
    Ok(LoadedCatalogue {
        path: path.to_path_buf(),
        locale,
        catalogue,
    })
}

/// Locale suffix of a catalogue file name.
///
/// `Part_pt-PT.ts` yields `pt-PT`, `Part_zh_CN.ts` yields `zh_CN`.
pub fn locale_from_file_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let parts: Vec<&str> = stem.split('_').collect();
    match parts.as_slice() {
        [] | [_] => None,
        [.., lang, region] if is_region(region) && parts.len() > 2 => {
            Some(format!("{}_{}", lang, region))
        }
        [.., last] if !last.is_empty() => Some(last.to_string()),
        _ => None,
    }
}

fn is_region(part: &str) -> bool {
    part.len() == 2 && part.chars().all(|c| c.is_ascii_uppercase())
}
