//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the prayer-config.toml
//! file. It provides the location, calculation conventions, per-prayer internet block
//! durations and output paths used by the binary.

use crate::calculator::Coordinates;
use crate::convention::{AsrConvention, FajrIshaConvention};
use crate::error::Result;
use crate::Prayer;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file, relative to the working directory.
pub const CONFIG_FILE: &str = "prayer-config.toml";

/// Application configuration loaded from prayer-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Where the prayers are observed
    pub location: LocationConfig,
    /// Fajr/Isha and Asr calculation conventions
    pub conventions: ConventionConfig,
    /// Minutes of internet blocking per prayer
    pub block: BlockConfig,
    /// Output file locations
    pub paths: PathConfig,
}

/// Observer location
#[derive(Debug, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Degrees east of Greenwich
    pub longitude: f64,
    /// Degrees north of the equator
    pub latitude: f64,
    /// Local offset from UTC in hours
    pub timezone: f64,
}

/// Convention keys, validated by [`Config::fajr_isha`] and [`Config::asr`]
#[derive(Debug, Deserialize, Serialize)]
pub struct ConventionConfig {
    /// One of muslim_league, isna, egypt, umm_alqura
    pub fajr_isha: String,
    /// One of standard, hanafi
    pub asr: String,
}

/// Block duration in minutes for each prayer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlockConfig {
    pub fajr: u32,
    pub thuhr: u32,
    pub asr: u32,
    pub maghrib: u32,
    pub isha: u32,
}

impl BlockConfig {
    pub fn minutes_for(&self, prayer: Prayer) -> u32 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Thuhr => self.thuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

/// Output locations
#[derive(Debug, Deserialize, Serialize)]
pub struct PathConfig {
    /// JSON timetable written after each computation
    pub prayer: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            location: LocationConfig {
                longitude: 50.0,
                latitude: 26.6,
                timezone: 3.0, // Arabia Standard Time
            },
            conventions: ConventionConfig {
                fajr_isha: FajrIshaConvention::UmmAlQura.key().to_string(),
                asr: AsrConvention::Standard.key().to_string(),
            },
            block: BlockConfig {
                fajr: 20,
                thuhr: 15,
                asr: 15,
                maghrib: 15,
                isha: 15,
            },
            paths: PathConfig {
                prayer: PathBuf::from("output/prayers.json"),
            },
        }
    }
}

impl Config {
    /// Load configuration from prayer-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!(
                        "Loaded configuration for {}, {} ({})",
                        config.location.longitude,
                        config.location.latitude,
                        path.display()
                    );
                    config
                }
                Err(e) => {
                    warn!("Invalid config file format in {}: {}", path.display(), e);
                    warn!("Using default configuration (Khobar)");
                    Self::default()
                }
            },
            Err(_) => {
                info!(
                    "No config file at {}, using default configuration (Khobar)",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Save current configuration as pretty TOML
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Save current configuration to prayer-config.toml
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(CONFIG_FILE)
    }

    pub fn coordinates(&self) -> Result<Coordinates> {
        Coordinates::new(self.location.longitude, self.location.latitude)
    }

    pub fn fajr_isha(&self) -> Result<FajrIshaConvention> {
        self.conventions.fajr_isha.parse()
    }

    pub fn asr(&self) -> Result<AsrConvention> {
        self.conventions.asr.parse()
    }
}
