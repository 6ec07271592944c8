use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalogue::CatalogueStats;
use crate::issues::{Issue, Report};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCataloguesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Target locale, e.g. "pt-PT"
    pub locale: String,
    pub context: String,
    pub source_text: String,
    /// Disambiguation comment
    pub comment: Option<String>,
    /// Ignore translations marked unfinished (defaults to the project config)
    pub finished_only: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only report this rule, e.g. "unfinished"
    pub rule: Option<String>,
    /// Page size (default 20, max 100)
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetTranslationParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Catalogue file, relative to the project root
    pub file_path: String,
    pub context: String,
    pub source_text: String,
    /// Disambiguation comment
    pub comment: Option<String>,
    pub translation: String,
    /// Mark the translation finished (default true)
    pub finished: Option<bool>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub catalogues_root: String,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub source_language: String,
    pub include_unfinished: bool,
    pub ignore_contexts: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            catalogues_root: c.catalogues_root,
            includes: c.includes,
            ignores: c.ignores,
            source_language: c.source_language,
            include_unfinished: c.include_unfinished,
            ignore_contexts: c.ignore_contexts,
        }
    }
}

// ============================================================
// Catalogue Types (list_catalogues)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CataloguesResult {
    pub catalogues_root: String,
    pub catalogues: Vec<CatalogueInfo>,
    /// Files that matched but failed to load
    pub failures: Vec<FailureInfo>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueInfo {
    pub locale: String,
    pub file_path: String,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
    /// Finished share of active messages, in percent
    pub completion: f64,
}

impl CatalogueInfo {
    pub fn new(locale: String, file_path: String, stats: CatalogueStats) -> Self {
        Self {
            locale,
            file_path,
            messages: stats.messages,
            finished: stats.translated,
            unfinished: stats.unfinished,
            obsolete: stats.obsolete + stats.vanished,
            completion: (stats.completion() * 10.0).round() / 10.0,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FailureInfo {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

// ============================================================
// Translate Types (translate)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    pub text: String,
    /// False when the source text was returned as fallback
    pub translated: bool,
    pub file_path: String,
}

// ============================================================
// Issue Scan Types (scan_issues)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuesScanResult {
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    pub line: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            file_path: issue.file_path().to_string(),
            line: issue.line(),
            message: issue.message(),
            details: issue.details(),
            hint: issue.hint().map(str::to_string),
        }
    }
}

// ============================================================
// Edit Types (set_translation)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetTranslationResult {
    pub file_path: String,
    /// Translation text before the edit
    pub previous: Option<String>,
    pub translation: String,
    pub status: String,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
