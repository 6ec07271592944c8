use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    catalogue::{MessageKey, Status},
    cli::commands::check::{CheckRule, run_checks},
    config::load_config,
    context::CheckContext,
    format::{load, save},
    issues::{Rule, Severity},
    translate::TranslatePolicy,
};

use super::types::{
    CatalogueInfo, CataloguesResult, ConfigDto, ConfigValues, FailureInfo, GetConfigParams,
    IssueItem, IssuesScanResult, ListCataloguesParams, Pagination, ScanIssuesParams,
    SetTranslationParams, SetTranslationResult, TranslateParams, TranslateResult,
};

#[derive(Clone)]
pub struct TscatMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TscatMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TscatMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tscat configuration
    #[tool(description = "Get the current tscat configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_tool_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List catalogue files with their completion statistics
    #[tool(
        description = "List the .ts catalogues of the project with per-file message counts and completion. Files that fail to load are listed under failures."
    )]
    pub async fn list_catalogues(
        &self,
        params: Parameters<ListCataloguesParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let catalogues = ctx
            .catalogues()
            .iter()
            .map(|loaded| {
                CatalogueInfo::new(
                    loaded.locale.clone(),
                    ctx.display_path(&loaded.path),
                    loaded.catalogue.stats(),
                )
            })
            .collect();
        let failures = ctx
            .parse_errors()
            .into_iter()
            .map(|failure| FailureInfo {
                file_path: failure.file_path,
                line: failure.line,
                error: failure.error,
            })
            .collect();

        to_tool_result(&CataloguesResult {
            catalogues_root: ctx.config.catalogues_root.clone(),
            catalogues,
            failures,
        })
    }

    /// Translate one message through a locale's catalogue
    #[tool(
        description = "Translate a message (context, sourceText, optional comment) with the catalogue of the given locale. Falls back to the source text when no usable translation exists."
    )]
    pub async fn translate(
        &self,
        params: Parameters<TranslateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path)?;

        let Some(loaded) = ctx.workspace().find_locale(&params.locale) else {
            return Err(McpError::invalid_params(
                format!("No catalogue for locale \"{}\"", params.locale),
                None,
            ));
        };

        let policy = match params.finished_only {
            Some(true) => TranslatePolicy::finished_only(),
            Some(false) => TranslatePolicy::default(),
            None => ctx.config.translate_policy(),
        };
        let resolved = loaded.catalogue.resolve(
            &params.context,
            &params.source_text,
            params.comment.as_deref(),
            policy,
        );

        to_tool_result(&TranslateResult {
            text: resolved.unwrap_or(params.source_text.as_str()).to_string(),
            translated: resolved.is_some(),
            file_path: ctx.display_path(&loaded.path),
        })
    }

    /// Run every catalogue check
    #[tool(
        description = "Check all catalogues for empty translations, duplicate keys, ambiguous comments, unfinished entries, place marker and accelerator mismatches, and parse errors. Returns a paginated list, optionally filtered by rule name."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(20).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);
        let rule = match params.0.rule.as_deref() {
            Some(name) => Some(Rule::from_name(name).ok_or_else(|| {
                McpError::invalid_params(format!("Unknown rule \"{}\"", name), None)
            })?),
            None => None,
        };

        let ctx = load_context(&params.0.project_root_path)?;
        let mut issues = run_checks(&ctx, &CheckRule::all());
        issues.retain(|issue| rule.is_none_or(|rule| issue.rule() == rule));
        issues.sort();

        let total_count = issues.len();
        let error_count = issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Error)
            .count();

        let items: Vec<IssueItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(IssueItem::from)
            .collect();
        let has_more = offset + items.len() < total_count;

        to_tool_result(&IssuesScanResult {
            total_count,
            error_count,
            warning_count: total_count - error_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Edit one translation and save the catalogue
    #[tool(
        description = "Set the translation of one message in a catalogue file and save it. The message is matched by context, sourceText and optional comment; it must already exist and must not be a plural message. A live entry is edited in preference to an obsolete copy."
    )]
    pub async fn set_translation(
        &self,
        params: Parameters<SetTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let path = PathBuf::from(&params.project_root_path).join(&params.file_path);

        let bytes = fs::read(&path).map_err(|e| {
            McpError::invalid_params(format!("Failed to read {}: {}", params.file_path, e), None)
        })?;
        let mut catalogue = load(&bytes).map_err(|e| {
            McpError::internal_error(format!("Failed to parse {}: {}", params.file_path, e), None)
        })?;

        let key = MessageKey::new(
            &params.context,
            &params.source_text,
            params.comment.as_deref(),
        );
        let Some(target) = catalogue.edit_target(key) else {
            return Err(McpError::invalid_params(
                format!(
                    "No message \"{}::{}\" in {}",
                    params.context, params.source_text, params.file_path
                ),
                None,
            ));
        };
        if target.numerus {
            return Err(McpError::invalid_params(
                format!(
                    "\"{}::{}\" is a plural message with {} form(s); a single translation \
                     cannot fill it",
                    params.context,
                    params.source_text,
                    target.numerus_forms.len()
                ),
                None,
            ));
        }
        let previous = target.translation.clone();

        let status = if params.finished.unwrap_or(true) {
            Status::Translated
        } else {
            Status::Unfinished
        };
        catalogue.set_translation(key, params.translation.as_str(), status);

        fs::write(&path, save(&catalogue)).map_err(|e| {
            McpError::internal_error(format!("Failed to write {}: {}", params.file_path, e), None)
        })?;

        to_tool_result(&SetTranslationResult {
            file_path: params.file_path,
            previous,
            translation: params.translation,
            status: status.to_string(),
        })
    }
}

#[tool_handler]
impl ServerHandler for TscatMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tscat MCP helps AI agents maintain Qt Linguist .ts translation catalogues.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. list_catalogues - List catalogues with completion statistics\n\
                 3. scan_issues - List catalogue problems (paginated, filter by rule)\n\
                 4. translate - Look up a message in one locale\n\
                 5. set_translation - Write a translation into a catalogue file\n\n\
                 Recommended Workflow:\n\
                 1. Use list_catalogues to see which locales lag behind\n\
                 2. Use scan_issues to find empty, unfinished or inconsistent entries\n\
                 3. Fix them with set_translation, then scan again"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn load_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let root = Path::new(project_root_path);
    let config = load_config(root)
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
        .config;
    config
        .validate()
        .map_err(|e| McpError::invalid_params(format!("Invalid config: {}", e), None))?;
    CheckContext::from_config(root, config, false)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TscatMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
