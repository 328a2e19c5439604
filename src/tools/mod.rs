//! Tools module containing the tool abstraction and the five built-in tools

pub mod calculator;
pub mod clock;
pub mod function_factory;
pub mod news;
pub mod tool;
pub mod user_info;
pub mod weather;

pub use calculator::CalculatorTool;
pub use clock::ClockTool;
pub use function_factory::FunctionFactory;
pub use news::NewsTool;
pub use tool::{Tool, ToolRegistry};
pub use user_info::UserInfoTool;
pub use weather::WeatherTool;
