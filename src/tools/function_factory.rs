use super::{tool::ToolRegistry, Tool};
use crate::{Result, ToolError};
use serde_json::Value;

/// Factory for creating and managing tool execution
#[derive(Debug)]
pub struct FunctionFactory {
    registry: ToolRegistry,
}

impl FunctionFactory {
    /// Create a new function factory
    pub fn new() -> Self {
        Self {
            registry: ToolRegistry::new(),
        }
    }

    /// Create a factory preloaded with all five built-in tools
    pub fn with_default_tools() -> Self {
        let mut factory = Self::new();
        factory.register_tool(super::UserInfoTool::new());
        factory.register_tool(super::ClockTool::new());
        factory.register_tool(super::CalculatorTool::new());
        factory.register_tool(super::WeatherTool::new());
        factory.register_tool(super::NewsTool::new());
        factory
    }

    /// Register a tool with the factory
    pub fn register_tool<T: Tool + 'static>(&mut self, tool: T) {
        self.registry.register(tool);
    }

    /// Execute a function call by name
    pub async fn execute_function(&self, function_name: &str, parameters: Value) -> Result<Value> {
        let tool = self
            .registry
            .get(function_name)
            .ok_or_else(|| ToolError::ToolNotFound(function_name.to_string()))?;

        tool.execute(parameters).await
    }

    /// Execute a function call by name and unwrap its plain-text output
    pub async fn execute_function_text(
        &self,
        function_name: &str,
        parameters: Value,
    ) -> Result<String> {
        let tool = self
            .registry
            .get(function_name)
            .ok_or_else(|| ToolError::ToolNotFound(function_name.to_string()))?;

        tool.execute_text(parameters).await
    }

    /// Get all available tools for OpenAI-style function calling
    pub fn get_openai_tools(&self) -> Vec<Value> {
        self.registry.to_openai_tools()
    }

    /// Check if a function exists
    pub fn has_function(&self, name: &str) -> bool {
        self.registry.get(name).is_some()
    }
}

impl Default for FunctionFactory {
    fn default() -> Self {
        Self::new()
    }
}
