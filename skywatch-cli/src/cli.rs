use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;
use skywatch_core::{
    Coordinate, PositionSource, SessionState, StaticPositionSource, SystemPositionSource,
    WeatherAggregator, WeatherSnapshot, run_session,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skywatch", version, about = "Weather dashboard CLI")]
pub struct Cli {
    /// Latitude in decimal degrees; must be paired with --longitude.
    /// Without the pair, the host positioning capability is used.
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees; must be paired with --latitude.
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Print the snapshot as JSON instead of the text dashboard.
    #[arg(long)]
    pub json: bool,

    /// Number of hourly forecast rows to print.
    #[arg(long, default_value_t = 12)]
    pub hours: usize,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let source: Box<dyn PositionSource> = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Box::new(StaticPositionSource(Coordinate {
                latitude,
                longitude,
            })),
            _ => Box::new(SystemPositionSource),
        };

        let aggregator = WeatherAggregator::new();

        eprintln!("Fetching weather...");
        match run_session(source.as_ref(), &aggregator).await {
            SessionState::Ready(snapshot) => {
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&snapshot)?);
                } else {
                    render_dashboard(&snapshot, self.hours);
                }
                Ok(())
            }
            SessionState::Error(message) => Err(anyhow!(message)),
            // run_session only returns terminal states.
            SessionState::Loading => unreachable!("session ended while still loading"),
        }
    }
}

fn render_dashboard(snapshot: &WeatherSnapshot, hours: usize) {
    println!("{}, {}", snapshot.location.name, snapshot.location.country);
    println!(
        "Now: {:.1} °C, wind {:.1} m/s, {}",
        snapshot.current.temperature_c, snapshot.current.wind_speed_mps, snapshot.current.condition
    );
    println!(
        "Sunrise {}   Sunset {}",
        clock_time(&snapshot.astronomy.sunrise),
        clock_time(&snapshot.astronomy.sunset)
    );

    println!();
    println!("Daily forecast:");
    for day in &snapshot.forecast.daily {
        println!(
            "  {:<11} {:>5.1} / {:>5.1} °C  {}",
            day_label(&day.date),
            day.temperature_max_c,
            day.temperature_min_c,
            day.condition
        );
    }

    println!();
    println!("Hourly forecast:");
    for hour in snapshot.forecast.hourly.iter().take(hours) {
        println!(
            "  {:<11} {:>5.1} °C  {}",
            hour_label(&hour.time),
            hour.temperature_c,
            hour.condition
        );
    }
}

/// Upstream dates are ISO `YYYY-MM-DD`; anything else is printed verbatim.
fn day_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a %d %b").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Upstream times are ISO `YYYY-MM-DDTHH:MM`; anything else verbatim.
fn hour_label(time: &str) -> String {
    NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
        .map(|t| t.format("%a %H:%M").to_string())
        .unwrap_or_else(|_| time.to_string())
}

fn clock_time(time: &str) -> &str {
    time.split('T').nth(1).unwrap_or(time)
}
