//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes résumé scoring over stdio so assistants can score text they
//! already hold. The server is a presentation layer: every `#[tool]` method
//! delegates to `resume-score-core` and returns its report as JSON.
//!
//! # Tools
//!
//! - `analyze_resume`: score résumé text, optionally with breakdowns
//! - `list_keywords`: the active reference keyword set
//! - `get_info`: package name and version

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use resume_score_core::analysis::ResumeAnalyzer;
use resume_score_core::keywords::{KeywordCategory, KeywordSet};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_resume` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeResumeParams {
    /// Plain résumé text.
    pub text: String,
    /// Include per-scorer breakdowns in the response.
    #[serde(default)]
    pub details: bool,
}

/// Parameters for the `list_keywords` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListKeywordsParams {
    /// Only list this category (technical, soft-skill, business, action-verb).
    pub category: Option<KeywordCategory>,
}

/// MCP server exposing résumé scoring to AI assistants.
#[derive(Clone)]
pub struct ResumeServer {
    keywords: Arc<KeywordSet>,
    max_input_bytes: u64,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ResumeServer {
    fn default() -> Self {
        Self::new(
            KeywordSet::builtin().clone(),
            resume_score_core::DEFAULT_MAX_INPUT_BYTES,
        )
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ResumeServer {
    /// Create a server that scores against `keywords` and rejects text over `max_input_bytes`.
    pub fn new(keywords: KeywordSet, max_input_bytes: u64) -> Self {
        Self {
            keywords: Arc::new(keywords),
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
                "keyword_count": self.keywords.len(),
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score résumé text.
    #[tool(
        description = "Score resume text (0-100) on formatting, keywords, grammar, and readability. Returns scores, matched keywords, reading level, and up to six suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_resume(
        &self,
        Parameters(params): Parameters<AnalyzeResumeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_resume", details = params.details, "executing MCP tool");

        let size = params.text.len() as u64;
        if size > self.max_input_bytes {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {size} bytes (limit: {} bytes)",
                    self.max_input_bytes
                ),
                None,
            ));
        }

        let report = ResumeAnalyzer::new(&self.keywords).analyze_detailed(&params.text);
        let json = if params.details {
            to_json(&report)?
        } else {
            to_json(&report.analysis)?
        };

        tracing::info!(
            tool = "analyze_resume",
            overall_score = report.analysis.overall_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// List the reference keyword set.
    #[tool(description = "List the reference keywords used for scoring, grouped by category.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn list_keywords(
        &self,
        Parameters(params): Parameters<ListKeywordsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "list_keywords", category = ?params.category, "executing MCP tool");

        let groups: serde_json::Map<String, serde_json::Value> = KeywordCategory::ALL
            .into_iter()
            .filter(|c| params.category.is_none_or(|only| only == *c))
            .map(|c| {
                let terms: Vec<&str> = self.keywords.in_category(c).collect();
                (c.as_str().to_string(), serde_json::json!(terms))
            })
            .collect();
        let json = to_json(&groups)?;

        tracing::info!(tool = "list_keywords", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ResumeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Pass plain resume text to analyze_resume for a 0-100 score and suggestions.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
