use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;

use crate::error::SkywatchError;
use crate::model::{
    Astronomy, Coordinate, CurrentConditions, DailyEntry, Forecast, HourlyEntry,
    PLACEHOLDER_CONDITION, Place, UNKNOWN_PLACE, WeatherSnapshot,
};

const FORECAST_BASE_URL: &str = "https://api.open-meteo.com";
const GEOCODE_BASE_URL: &str = "https://api.bigdatacloud.net";

/// Endpoint roots for the upstream services.
///
/// Held in memory only; the dashboard has no config file or environment
/// switches. Tests substitute a mock server here. No request timeout is
/// configured: a slow call simply surfaces late as the terminal error
/// state.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    pub forecast_base_url: String,
    pub geocode_base_url: String,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: FORECAST_BASE_URL.to_string(),
            geocode_base_url: GEOCODE_BASE_URL.to_string(),
        }
    }
}

/// Merges current conditions, forecast series and a reverse-geocoded
/// place name into one [`WeatherSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct WeatherAggregator {
    http: Client,
    config: AggregatorConfig,
}

impl WeatherAggregator {
    pub fn new() -> Self {
        Self::with_config(AggregatorConfig::default())
    }

    pub fn with_config(config: AggregatorConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Fetch the three upstream payloads and merge them into a snapshot.
    ///
    /// Issues exactly three GET requests, concurrently, with
    /// all-or-nothing semantics: any transport error, non-success status
    /// or malformed payload aborts the whole aggregation and nothing
    /// partial is ever returned. No retries.
    pub async fn fetch_snapshot(
        &self,
        coord: Coordinate,
    ) -> Result<WeatherSnapshot, SkywatchError> {
        match self.try_fetch(coord).await {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "weather aggregation failed");
                Err(SkywatchError::FetchFailed)
            }
        }
    }

    async fn try_fetch(&self, coord: Coordinate) -> Result<WeatherSnapshot> {
        tracing::debug!(
            latitude = coord.latitude,
            longitude = coord.longitude,
            "fetching weather"
        );

        let (current, forecast, place) = tokio::try_join!(
            self.fetch_current(coord),
            self.fetch_forecast(coord),
            self.fetch_place(coord),
        )?;

        merge(current, forecast, place)
    }

    async fn fetch_current(&self, coord: Coordinate) -> Result<CurrentWeatherResponse> {
        let url = format!("{}/v1/forecast", self.config.forecast_base_url);
        let lat = coord.latitude.to_string();
        let lon = coord.longitude.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", lat.as_str()),
                ("longitude", lon.as_str()),
                ("current_weather", "true"),
                ("daily", "temperature_2m_max,temperature_2m_min,sunrise,sunset"),
                ("timezone", "auto"),
            ])
            .send()
            .await
            .context("Failed to send current-weather request")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read current-weather response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Current-weather request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse current-weather JSON")
    }

    async fn fetch_forecast(&self, coord: Coordinate) -> Result<ForecastResponse> {
        let url = format!("{}/v1/forecast", self.config.forecast_base_url);
        let lat = coord.latitude.to_string();
        let lon = coord.longitude.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", lat.as_str()),
                ("longitude", lon.as_str()),
                ("hourly", "temperature_2m,weathercode"),
                ("daily", "temperature_2m_max,temperature_2m_min,sunrise,sunset"),
                ("timezone", "auto"),
            ])
            .send()
            .await
            .context("Failed to send forecast request")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse forecast JSON")
    }

    async fn fetch_place(&self, coord: Coordinate) -> Result<GeocodeResponse> {
        let url = format!(
            "{}/data/reverse-geocode-client",
            self.config.geocode_base_url
        );
        let lat = coord.latitude.to_string();
        let lon = coord.longitude.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", lat.as_str()),
                ("longitude", lon.as_str()),
                ("localityLanguage", "en"),
            ])
            .send()
            .await
            .context("Failed to send reverse-geocode request")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read reverse-geocode response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Reverse-geocode request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse reverse-geocode JSON")
    }
}

/// Combine the three upstream payloads into the unified view model.
///
/// The daily and hourly series come from the forecast response with index
/// correspondence preserved exactly; sunrise/sunset come from its first
/// daily entry only. Fields no upstream source provides are set to the
/// fixed placeholders, never omitted.
fn merge(
    current: CurrentWeatherResponse,
    forecast: ForecastResponse,
    place: GeocodeResponse,
) -> Result<WeatherSnapshot> {
    let daily_block = &forecast.daily;
    let days = daily_block.time.len();
    if daily_block.temperature_2m_max.len() != days
        || daily_block.temperature_2m_min.len() != days
    {
        return Err(anyhow!(
            "Forecast daily arrays disagree on length: {} dates, {} max, {} min",
            days,
            daily_block.temperature_2m_max.len(),
            daily_block.temperature_2m_min.len(),
        ));
    }

    let hourly_block = &forecast.hourly;
    if hourly_block.temperature_2m.len() != hourly_block.time.len() {
        return Err(anyhow!(
            "Forecast hourly arrays disagree on length: {} times, {} temperatures",
            hourly_block.time.len(),
            hourly_block.temperature_2m.len(),
        ));
    }

    let daily = daily_block
        .time
        .iter()
        .zip(&daily_block.temperature_2m_max)
        .zip(&daily_block.temperature_2m_min)
        .map(|((date, &max), &min)| DailyEntry {
            date: date.clone(),
            temperature_max_c: max,
            temperature_min_c: min,
            condition: PLACEHOLDER_CONDITION.to_string(),
        })
        .collect();

    let hourly = hourly_block
        .time
        .iter()
        .zip(&hourly_block.temperature_2m)
        .map(|(time, &temperature)| HourlyEntry {
            time: time.clone(),
            temperature_c: temperature,
            condition: PLACEHOLDER_CONDITION.to_string(),
        })
        .collect();

    let sunrise = daily_block
        .sunrise
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("Forecast daily block has no sunrise entry"))?;
    let sunset = daily_block
        .sunset
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("Forecast daily block has no sunset entry"))?;

    Ok(WeatherSnapshot {
        current: CurrentConditions {
            temperature_c: current.current_weather.temperature,
            wind_speed_mps: current.current_weather.windspeed,
            humidity_pct: 0.0,
            uv_index: 0.0,
            pressure_hpa: 0.0,
            condition: PLACEHOLDER_CONDITION.to_string(),
        },
        forecast: Forecast { daily, hourly },
        location: Place {
            name: non_empty(place.city).unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
            country: non_empty(place.country_name).unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
        },
        astronomy: Astronomy {
            sunrise,
            sunset,
            dawn: String::new(),
            dusk: String::new(),
        },
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// Error bodies can be arbitrary text, so cut on characters rather than
// bytes to stay on a UTF-8 boundary.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherFields {
    temperature: f64,
    windspeed: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    current_weather: CurrentWeatherFields,
    /// Required so a response without it fails the fetch, but the merged
    /// daily series comes from the forecast response instead.
    #[allow(dead_code)]
    daily: DailyFields,
}

#[derive(Debug, Deserialize)]
struct DailyFields {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    sunrise: Vec<String>,
    sunset: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct HourlyFields {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyFields,
    hourly: HourlyFields,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    city: Option<String>,
    #[serde(rename = "countryName")]
    country_name: Option<String>,
}
