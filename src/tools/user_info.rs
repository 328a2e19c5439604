use super::Tool;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Optional identity fields passed by the host for the current session user
#[derive(Debug, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct UserInfoParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Formats whichever identity fields are present into one line
#[derive(Debug)]
pub struct UserInfoTool;

impl Default for UserInfoTool {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInfoTool {
    pub fn new() -> Self {
        Self
    }

    /// Concatenate the present fields in name, id, email order.
    ///
    /// When no field is present the output is exactly `"User: Unknown"`.
    pub fn format(params: &UserInfoParams) -> String {
        let mut result = String::new();

        if let Some(name) = &params.name {
            result.push_str(&format!("User: {}", name));
        }
        if let Some(id) = &params.id {
            result.push_str(&format!(" (ID: {})", id));
        }
        if let Some(email) = &params.email {
            result.push_str(&format!(" (Email: {})", email));
        }

        if result.is_empty() {
            result.push_str("User: Unknown");
        }

        result
    }
}

impl Tool for UserInfoTool {
    fn name(&self) -> &'static str {
        "user_info"
    }

    fn description(&self) -> &'static str {
        "Get the user name, email and ID from the session user object"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "id": {"type": "string"},
                "email": {"type": "string"}
            },
            "required": []
        })
    }

    fn execute(
        &self,
        parameters: serde_json::Value,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<serde_json::Value, crate::ToolError>>
                + Send
                + '_,
        >,
    > {
        Box::pin(async move {
            let params: UserInfoParams = match parameters {
                serde_json::Value::Null => UserInfoParams::default(),
                value => serde_json::from_value(value).map_err(|e| {
                    crate::ToolError::ToolExecution(format!("Invalid parameters: {}", e))
                })?,
            };

            Ok(serde_json::Value::String(Self::format(&params)))
        })
    }
}
