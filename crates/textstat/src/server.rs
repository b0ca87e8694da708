//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes text statistics over MCP so editors and assistants can request
//! counts for whatever text they hold, over stdio transport.
//!
//! The server is a presentation layer: each `#[tool]` method delegates to
//! `textstat_core` and only handles parameter decoding, limits and
//! serialization.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use schemars::JsonSchema;
use textstat_core::{markdown, metrics};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `text_statistics` tool.
#[derive(Debug, serde::Deserialize, JsonSchema)]
pub struct TextStatisticsParams {
    /// The text to analyze.
    pub text: String,
    /// Whether to strip markdown formatting before counting.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `reading_time` tool.
#[derive(Debug, serde::Deserialize, JsonSchema)]
pub struct ReadingTimeParams {
    /// Number of words to estimate reading time for.
    pub word_count: usize,
}

/// MCP server exposing text statistics to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance with no input limit.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: None,
        }
    }

    /// Reject tool input larger than `max_bytes`.
    pub const fn with_input_limit(mut self, max_bytes: Option<usize>) -> Self {
        self.max_input_bytes = max_bytes;
        self
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
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Compute character, word, sentence and paragraph counts plus reading time.
    #[tool(
        description = "Count characters (with and without whitespace), words, sentences and paragraphs in text, and estimate reading time at 200 words per minute."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn text_statistics(
        &self,
        Parameters(params): Parameters<TextStatisticsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "text_statistics",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        if let Some(max) = self.max_input_bytes
            && params.text.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    params.text.len()
                ),
                None,
            ));
        }

        let stats = if params.strip_markdown {
            metrics::analyze(&markdown::strip_to_prose(&params.text))
        } else {
            metrics::analyze(&params.text)
        };

        let json = to_json(&stats)?;

        tracing::info!(
            tool = "text_statistics",
            words = stats.word_count,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Estimate reading time for a word count.
    #[tool(description = "Estimate reading time for a word count at 200 words per minute.")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn reading_time(
        &self,
        Parameters(params): Parameters<ReadingTimeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "reading_time", words = params.word_count, "executing MCP tool");

        let reading_time = metrics::estimate_reading_time(params.word_count);
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &reading_time,
        )?)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
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
                "{} MCP server. Use text_statistics to count characters, words, sentences and paragraphs.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
