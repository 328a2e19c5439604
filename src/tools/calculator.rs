use super::Tool;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use tracing::debug;

/// Parameters for the calculator
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CalculatorParams {
    /// The mathematical equation to calculate
    pub equation: String,
}

/// Evaluates basic arithmetic expressions with a restricted grammar.
///
/// Input is limited to numeric literals, `+ - * / %`, parentheses, and
/// whitespace before it ever reaches the expression engine, so arbitrary
/// identifiers and function calls are rejected up front.
#[derive(Debug)]
pub struct CalculatorTool;

impl Default for CalculatorTool {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorTool {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate an equation, returning `"{equation} = {result}"`.
    ///
    /// Any failure (malformed expression, disallowed character, division by
    /// zero) collapses to the fixed `"Invalid equation"` message; the detail
    /// is only logged.
    pub fn calculate(equation: &str) -> String {
        match evaluate_expression(equation) {
            Ok(result) => format!("{} = {}", equation, result),
            Err(err) => {
                debug!(equation, error = %err, "Equation evaluation failed");
                "Invalid equation".to_string()
            }
        }
    }
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '+' | '-' | '*' | '/' | '%' | '(' | ')' | '.')
}

fn evaluate_expression(equation: &str) -> Result<f64, String> {
    let trimmed = equation.trim();
    if trimmed.is_empty() {
        return Err("empty expression".to_string());
    }
    if let Some(bad) = trimmed.chars().find(|c| !is_allowed_char(*c)) {
        return Err(format!("disallowed character {:?}", bad));
    }

    let promoted = promote_integer_literals(trimmed);
    let value = evalexpr::eval(&promoted).map_err(|e| e.to_string())?;
    let number = value.as_number().map_err(|e| e.to_string())?;
    if !number.is_finite() {
        return Err("non-finite result".to_string());
    }
    Ok(number)
}

/// Rewrite bare integer literals as floats (`5` -> `5.0`) so division keeps
/// its fractional part instead of truncating on integer operands. Digit runs
/// adjacent to a `.` are already part of a float and stay untouched.
fn promote_integer_literals(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let mut out = String::with_capacity(expr.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let followed_by_dot = i < chars.len() && chars[i] == '.';
            let preceded_by_dot = start > 0 && chars[start - 1] == '.';
            out.extend(&chars[start..i]);
            if !followed_by_dot && !preceded_by_dot {
                out.push_str(".0");
            }
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

impl Tool for CalculatorTool {
    fn name(&self) -> &'static str {
        "calculator"
    }

    fn description(&self) -> &'static str {
        "Calculate the result of an arithmetic equation"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "equation": {
                    "type": "string",
                    "description": "The mathematical equation to calculate"
                }
            },
            "required": ["equation"]
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
            let params: CalculatorParams = serde_json::from_value(parameters).map_err(|e| {
                crate::ToolError::ToolExecution(format!("Invalid parameters: {}", e))
            })?;

            Ok(serde_json::Value::String(Self::calculate(&params.equation)))
        })
    }
}
