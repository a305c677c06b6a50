use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    Config,
    error::{GENERIC_API_ERROR, LookupError},
    model::{Condition, GeoPlace, WeatherReport},
    suggest,
};

/// Maximum geocoding matches requested per autocomplete query.
const SUGGESTION_LIMIT: u32 = 5;

/// HTTP client for the OpenWeather current-weather and geocoding endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    weather_base_url: String,
    geocoding_base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    /// Build a client from config. Fails when no API key is configured.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.api_key()?.to_owned();

        Ok(Self {
            api_key,
            weather_base_url: config.weather_base_url.clone(),
            geocoding_base_url: config.geocoding_base_url.clone(),
            http: Client::new(),
        })
    }

    /// Fetch current weather for a city, metric units.
    ///
    /// A non-2xx response fails with the provider's `message` when the error
    /// body carries one, otherwise a generic message. No timeout and no
    /// retry: the request runs to completion or failure.
    pub async fn current_weather(&self, city: &str) -> Result<WeatherReport, LookupError> {
        debug!(city, url = %self.weather_base_url, "fetching current weather");

        let res = self
            .http
            .get(&self.weather_base_url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(LookupError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(LookupError::Transport)?;

        if !status.is_success() {
            return Err(LookupError::Api(provider_message(&body)));
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).map_err(LookupError::MalformedResponse)?;

        Ok(WeatherReport {
            name: parsed.name,
            country: parsed.sys.country,
            condition: parsed.weather.into_iter().next().map(|w| Condition {
                description: w.description,
                icon: w.icon,
            }),
            temp_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_mps: parsed.wind.speed,
        })
    }

    /// Fetch up to five geocoding matches for a free-text query, composed
    /// into deduplicated display strings.
    pub async fn city_suggestions(&self, query: &str) -> Result<Vec<String>, LookupError> {
        debug!(query, url = %self.geocoding_base_url, "fetching city suggestions");

        let limit = SUGGESTION_LIMIT.to_string();
        let places: Vec<GeoPlace> = self
            .http
            .get(&self.geocoding_base_url)
            .query(&[("q", query), ("limit", limit.as_str()), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(LookupError::Transport)?
            .json()
            .await
            .map_err(LookupError::Transport)?;

        Ok(suggest::compose_all(&places))
    }
}

/// Extract the provider's `message` from a non-2xx body, or the generic
/// fallback when the body has none.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| GENERIC_API_ERROR.to_string())
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    #[serde(default)]
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}
