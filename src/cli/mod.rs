use crate::tools::news::Language;
use crate::tools::user_info::UserInfoParams;
use crate::tools::{CalculatorTool, ClockTool, NewsTool, UserInfoTool, WeatherTool};
use clap::{Arg, Command};
use dotenvy;

/// CLI entry point for the skku-tools binary
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("skku-tools")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Stateless assistant tools: user info, time, calculator, weather, and SKKU news")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("user")
                .about("Format user identity fields")
                .arg(Arg::new("name").long("name").value_name("NAME"))
                .arg(Arg::new("id").long("id").value_name("ID"))
                .arg(Arg::new("email").long("email").value_name("EMAIL")),
        )
        .subcommand(Command::new("time").about("Print the current date and time"))
        .subcommand(
            Command::new("calc")
                .about("Evaluate a basic arithmetic expression")
                .arg(
                    Arg::new("equation")
                        .help("Expression such as '2 + 2'")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("weather")
                .about("Current weather for a city (requires OPENWEATHER_API_KEY)")
                .arg(
                    Arg::new("city")
                        .help("City name")
                        .index(1)
                        .default_value("New York, NY"),
                ),
        )
        .subcommand(
            Command::new("news")
                .about("Latest SKKU news headlines")
                .arg(
                    Arg::new("language")
                        .help("Language preference: korean, english, or both")
                        .index(1)
                        .default_value("both"),
                ),
        )
        .get_matches();

    let output = match matches.subcommand() {
        Some(("user", sub)) => {
            let params = UserInfoParams {
                name: sub.get_one::<String>("name").cloned(),
                id: sub.get_one::<String>("id").cloned(),
                email: sub.get_one::<String>("email").cloned(),
            };
            UserInfoTool::format(&params)
        }
        Some(("time", _)) => ClockTool::current_time(),
        Some(("calc", sub)) => {
            let equation = sub.get_one::<String>("equation").cloned().unwrap_or_default();
            CalculatorTool::calculate(&equation)
        }
        Some(("weather", sub)) => {
            let city = sub.get_one::<String>("city").cloned().unwrap_or_default();
            WeatherTool::new().lookup(&city).await
        }
        Some(("news", sub)) => {
            let language = sub
                .get_one::<String>("language")
                .cloned()
                .unwrap_or_default();
            NewsTool::new().fetch_news(Language::parse(&language)).await
        }
        _ => unreachable!("subcommand is required"),
    };

    println!("{}", output);
    Ok(())
}
