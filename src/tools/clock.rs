use super::Tool;
use chrono::Local;
use std::pin::Pin;

/// Reports the current local date and time in a human-readable format
#[derive(Debug)]
pub struct ClockTool;

impl Default for ClockTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockTool {
    pub fn new() -> Self {
        Self
    }

    /// Full weekday/month date plus a 12-hour clock time, from the invocation instant.
    pub fn current_time() -> String {
        let now = Local::now();
        format!(
            "Current Date and Time = {}, {}",
            now.format("%A, %B %d, %Y"),
            now.format("%I:%M:%S %p")
        )
    }
}

impl Tool for ClockTool {
    fn name(&self) -> &'static str {
        "current_time"
    }

    fn description(&self) -> &'static str {
        "Get the current time in a more human-readable format"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    fn execute(
        &self,
        _parameters: serde_json::Value,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<serde_json::Value, crate::ToolError>>
                + Send
                + '_,
        >,
    > {
        Box::pin(async move { Ok(serde_json::Value::String(Self::current_time())) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_time_shape() {
        let out = ClockTool::current_time();
        assert!(out.starts_with("Current Date and Time = "));
        assert!(out.contains("AM") || out.contains("PM"));
        // "Weekday, Month DD, YYYY, hh:mm:ss XM" carries three commas.
        assert_eq!(out.matches(", ").count(), 3);
    }

    #[tokio::test]
    async fn test_repeated_calls_keep_shape() {
        let tool = ClockTool::new();
        let first = tool.execute(serde_json::json!({})).await.unwrap();
        let second = tool.execute(serde_json::json!({})).await.unwrap();
        assert!(first.as_str().unwrap().starts_with("Current Date and Time = "));
        assert!(second.as_str().unwrap().starts_with("Current Date and Time = "));
    }
}
