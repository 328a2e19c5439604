use thiserror::Error;

/// Main error type for the tool surface.
///
/// Tool-internal failures (missing API key, network errors, empty scrape
/// results, malformed equations) never surface here; they degrade to plain
/// strings in the tool output. This type covers the host-facing boundary:
/// malformed parameter JSON, unknown tool names, and scrape-pipeline faults
/// that are caught before the tool boundary.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Scrape error: {0}")]
    Scrape(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ToolError>;

impl ToolError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ToolError::ToolExecution(_) => "TOOL_EXECUTION_ERROR",
            ToolError::ToolNotFound(_) => "TOOL_NOT_FOUND",
            ToolError::Scrape(_) => "SCRAPE_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string()
            }
        })
    }
}
