//! skku-tools: a small, fixed collection of assistant tools
//!
//! This library provides five independent, stateless request/response helpers
//! meant to be loaded by an external chat-assistant host: user identity
//! formatting, the current time, safe arithmetic evaluation, current weather
//! from OpenWeather, and a best-effort scraper for Sungkyunkwan University
//! (SKKU) news headlines.
//!
//! Every tool follows the same contract: typed, defaulted input in, a single
//! human-readable string out. Failures degrade to plain-text messages embedded
//! in the normal return value, so the host never has to handle errors from
//! these tools.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use skku_tools::{FunctionFactory, tools::CalculatorTool};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut factory = FunctionFactory::new();
//!     factory.register_tool(CalculatorTool::new());
//!
//!     let result = factory
//!         .execute_function("calculator", serde_json::json!({"equation": "2 + 2"}))
//!         .await?;
//!     println!("{}", result.as_str().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod scrapers;
pub mod tools;

pub use error::{Result, ToolError};
pub use tools::{
    CalculatorTool, ClockTool, FunctionFactory, NewsTool, Tool, ToolRegistry, UserInfoTool,
    WeatherTool,
};

#[cfg(feature = "cli")]
pub mod cli;
