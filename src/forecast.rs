use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::config::Units;
use crate::error::{Error, Result};

/// One period of a weather.gov gridpoint forecast ("Tonight", "Friday", ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastPeriod {
    pub number: i32,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub is_daytime: bool,
    pub temperature: f64,
    pub temperature_unit: String,
    pub wind_speed: String,
    pub wind_direction: String,
    #[serde(rename = "shortForecast")]
    pub summary: String,
    #[serde(rename = "detailedForecast")]
    pub details: String,
}

impl ForecastPeriod {
    /// Temperature and unit letter in the requested unit system.
    pub fn temperature_in(&self, units: Units) -> (f64, &'static str) {
        let is_celsius = self.temperature_unit.eq_ignore_ascii_case("C");
        match (units, is_celsius) {
            (Units::Us, false) => (self.temperature, "F"),
            (Units::Si, true) => (self.temperature, "C"),
            (Units::Us, true) => (self.temperature * 9.0 / 5.0 + 32.0, "F"),
            (Units::Si, false) => ((self.temperature - 32.0) * 5.0 / 9.0, "C"),
        }
    }

    pub fn wind(&self) -> String {
        format!("{} {}", self.wind_direction, self.wind_speed).trim().to_string()
    }
}

pub trait ForecastProvider {
    fn office(&self) -> Result<String>;
    fn periods(&self) -> Result<Vec<ForecastPeriod>>;
}

#[derive(Deserialize)]
struct ForecastDocument {
    properties: ForecastProperties,
}

#[derive(Deserialize)]
struct ForecastProperties {
    periods: Vec<ForecastPeriod>,
}

/// Reads a saved weather.gov forecast response from disk.
pub struct FileForecastProvider {
    path: PathBuf,
    office: String,
}

impl FileForecastProvider {
    pub fn new(path: impl Into<PathBuf>, office: impl Into<String>) -> Self {
        Self { path: path.into(), office: office.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ForecastProvider for FileForecastProvider {
    fn office(&self) -> Result<String> {
        Ok(self.office.clone())
    }

    fn periods(&self) -> Result<Vec<ForecastPeriod>> {
        let text = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let periods = parse_periods(&text)?;
        if periods.is_empty() {
            return Err(Error::EmptyForecast(self.path.clone()));
        }
        info!(path = ?self.path, count = periods.len(), "Loaded forecast");
        Ok(periods)
    }
}

pub fn parse_periods(json: &str) -> Result<Vec<ForecastPeriod>> {
    let document: ForecastDocument = serde_json::from_str(json)?;
    Ok(document.properties.periods)
}
