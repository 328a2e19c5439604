use super::Tool;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";
const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
const DEFAULT_CITY: &str = "New York, NY";

/// Parameters for weather queries
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct WeatherParams {
    /// City to get the current weather for
    #[serde(default = "default_city")]
    pub city: String,
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

impl Default for WeatherParams {
    fn default() -> Self {
        Self {
            city: default_city(),
        }
    }
}

/// Provider response; `cod` is the application-level status and arrives as a
/// number on success but as a string on some error responses.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    cod: serde_json::Value,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    weather: Vec<WeatherCondition>,
    #[serde(default)]
    main: Option<MainMetrics>,
    #[serde(default)]
    wind: Option<WindMetrics>,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainMetrics {
    temp: f64,
    #[serde(default)]
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WindMetrics {
    #[serde(default)]
    speed: f64,
}

impl WeatherResponse {
    fn status_code(&self) -> Option<i64> {
        match &self.cod {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Current-weather lookup backed by the OpenWeather API
#[derive(Debug, Clone)]
pub struct WeatherTool {
    client: Client,
    base_url: String,
}

impl Default for WeatherTool {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherTool {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the tool at a different provider base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Look up the current weather for a city.
    ///
    /// A missing `OPENWEATHER_API_KEY` is detected before any network call.
    /// Transport failures and provider-level errors both degrade to
    /// `"Error fetching weather data: ..."` strings; this never fails.
    pub async fn lookup(&self, city: &str) -> String {
        let api_key = match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => key,
            _ => {
                return format!(
                    "API key is not set in the environment variable '{}'.",
                    API_KEY_ENV
                )
            }
        };

        match self.fetch(city, &api_key).await {
            Ok(report) => report,
            Err(err) => format!("Error fetching weather data: {}", err),
        }
    }

    async fn fetch(&self, city: &str, api_key: &str) -> Result<String, reqwest::Error> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        let data: WeatherResponse = response.json().await?;

        if data.status_code() != Some(200) {
            return Ok(format!(
                "Error fetching weather data: {}",
                data.message.unwrap_or_default()
            ));
        }

        let Some(metrics) = data.main else {
            return Ok("Error fetching weather data: response is missing metrics".to_string());
        };

        debug!(
            city,
            condition = data
                .weather
                .first()
                .map(|w| w.description.as_str())
                .unwrap_or("unknown"),
            humidity = metrics.humidity,
            wind_speed = data.wind.map(|w| w.speed).unwrap_or_default(),
            "OpenWeather response"
        );

        Ok(format!("Weather in {}: {}°C", city, metrics.temp))
    }
}

impl Tool for WeatherTool {
    fn name(&self) -> &'static str {
        "weather"
    }

    fn description(&self) -> &'static str {
        "Get the current weather for a given city"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City to get the current weather for",
                    "default": DEFAULT_CITY
                }
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
            let params: WeatherParams = match parameters {
                serde_json::Value::Null => WeatherParams::default(),
                value => serde_json::from_value(value).map_err(|e| {
                    crate::ToolError::ToolExecution(format!("Invalid parameters: {}", e))
                })?,
            };

            let report = self.lookup(&params.city).await;
            Ok(serde_json::Value::String(report))
        })
    }
}
