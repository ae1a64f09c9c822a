use serde::{Deserialize, Serialize};

/// Condition text reported for every entry. The upstream forecast service
/// returns numeric weather codes only, and the dashboard does not map them
/// yet, so this constant stands in everywhere a condition is shown.
pub const PLACEHOLDER_CONDITION: &str = "Clear";

/// Fallback place name/country when reverse geocoding yields nothing.
pub const UNKNOWN_PLACE: &str = "Unknown";

/// Geographic position, produced once per session and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions at the resolved position.
///
/// `humidity_pct`, `uv_index` and `pressure_hpa` are always 0.0: the
/// upstream current-weather payload does not carry them. They stay in the
/// model as explicit placeholders rather than being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub wind_speed_mps: f64,
    pub humidity_pct: f64,
    pub uv_index: f64,
    pub pressure_hpa: f64,
    pub condition: String,
}

/// One day of the forecast, in upstream order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// ISO date, e.g. "2024-06-01", passed through from upstream verbatim.
    pub date: String,
    pub temperature_max_c: f64,
    pub temperature_min_c: f64,
    pub condition: String,
}

/// One hour of the forecast, in upstream order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    /// ISO datetime, e.g. "2024-06-01T14:00", passed through verbatim.
    pub time: String,
    pub temperature_c: f64,
    pub condition: String,
}

/// Daily and hourly series, length and order identical to the upstream
/// arrays. No reordering, filtering or deduplication happens anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub daily: Vec<DailyEntry>,
    pub hourly: Vec<HourlyEntry>,
}

/// Reverse-geocoded locality. Either field independently falls back to
/// [`UNKNOWN_PLACE`] when the geocoder returns nothing usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub country: String,
}

/// Sun times for the first forecast day. `dawn` and `dusk` are always
/// empty strings: no upstream source provides them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astronomy {
    pub sunrise: String,
    pub sunset: String,
    pub dawn: String,
    pub dusk: String,
}

/// The unified view model: one immutable value per successful fetch cycle.
///
/// A snapshot is never updated in place. The next fetch replaces it
/// wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub forecast: Forecast,
    pub location: Place,
    pub astronomy: Astronomy,
}
