//! Simulation configuration loaded from TOML.
//!
//! ```toml
//! total_cylinders = 200
//! start_head = 50
//! requests = [82, 170, 43, 140, 24, 16, 190]
//! direction = "toward-high"          # optional
//! algorithms = ["fcfs", "c-scan"]    # optional, defaults to all four
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::models::{Cylinder, Direction};
use crate::scheduler::{Algorithm, SchedulingProblem};

/// One simulation run as described in a config file.
///
/// Direction and algorithms are kept as raw tokens so that an unknown
/// token surfaces as a [`ConfigurationError`] naming it.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    pub total_cylinders: i64,
    pub start_head: Cylinder,
    #[serde(default)]
    pub requests: Vec<Cylinder>,
    #[serde(default = "default_direction")]
    pub direction: String,
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<String>,
}

fn default_direction() -> String {
    Direction::TowardHigh.as_str().to_string()
}

fn default_algorithms() -> Vec<String> {
    Algorithm::ALL
        .iter()
        .map(|a| a.name().to_ascii_lowercase())
        .collect()
}

impl SimulationConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: SimulationConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Validated problem described by this config.
    pub fn problem(&self) -> Result<SchedulingProblem, ConfigurationError> {
        SchedulingProblem::with_cylinders(
            self.total_cylinders,
            self.start_head,
            self.requests.clone(),
        )
    }

    /// Parsed initial sweep direction.
    pub fn direction(&self) -> Result<Direction, ConfigurationError> {
        self.direction.parse::<Direction>()
    }

    /// Parsed algorithm list, in file order.
    pub fn algorithms(&self) -> Result<Vec<Algorithm>, ConfigurationError> {
        self.algorithms.iter().map(|a| a.parse::<Algorithm>()).collect()
    }
}
