use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::constants::*;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Us,
    Si,
}

#[derive(Parser, Debug)]
#[command(name = "forecast-cards")]
#[command(version, about = "Scrolling weather forecast cards")]
pub struct Cli {
    /// Path to a YAML config file (its coordinates replace --lat/--lon)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Latitude of the forecast location
    #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the forecast location
    #[arg(long, default_value_t = DEFAULT_LONGITUDE, allow_negative_numbers = true)]
    pub lon: f64,

    /// Unit of measure
    #[arg(long, value_enum)]
    pub uom: Option<Units>,

    /// Saved weather.gov forecast response (JSON)
    #[arg(long)]
    pub forecast: Option<PathBuf>,

    /// Directory with one icon image per forecast period
    #[arg(long)]
    pub icons: Option<PathBuf>,

    /// Seconds a card advance takes
    #[arg(long)]
    pub duration: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NoaaConfig {
    #[serde(deserialize_with = "coordinate")]
    pub latitude: f64,
    #[serde(deserialize_with = "coordinate")]
    pub longitude: f64,
    pub units: Units,
    pub office: String,
}

impl Default for NoaaConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            units: Units::Us,
            office: DEFAULT_OFFICE.to_string(),
        }
    }
}

/// Coordinates may be written as numbers or as quoted strings ("41.837").
fn coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Number(f64),
        Text(String),
    }

    match Coordinate::deserialize(deserializer)? {
        Coordinate::Number(value) => Ok(value),
        Coordinate::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub forecast: PathBuf,
    pub icons: Option<PathBuf>,
    pub duration: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            forecast: PathBuf::from(DEFAULT_FORECAST_FILE),
            icons: None,
            duration: TRANSITION_DURATION,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub noaa: NoaaConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Resolve the configuration from the command line, reading the YAML file
    /// it points to if any. Explicit display flags win over the file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => {
                let mut config = Config::default();
                config.noaa.latitude = cli.lat;
                config.noaa.longitude = cli.lon;
                config
            }
        };

        if cli.uom == Some(Units::Si) {
            config.noaa.units = Units::Si;
        }
        if let Some(forecast) = &cli.forecast {
            config.display.forecast = forecast.clone();
        }
        if let Some(icons) = &cli.icons {
            config.display.icons = Some(icons.clone());
        }
        if let Some(duration) = cli.duration {
            config.display.duration = duration;
        }

        info!(
            latitude = config.noaa.latitude,
            longitude = config.noaa.longitude,
            units = ?config.noaa.units,
            "Configuration loaded"
        );
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        validate_config_path(path)?;
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}

fn validate_config_path(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if metadata.is_dir() {
        return Err(Error::ConfigIsDirectory(path.to_path_buf()));
    }
    Ok(())
}
