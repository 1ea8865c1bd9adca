use std::fs;
use std::path::{Path, PathBuf};

use boid_core::BehaviorConfig;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(PathBuf),

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Flock size, run length and space bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSection {
    #[serde(deserialize_with = "whole_number")]
    pub boid_count: usize,
    #[serde(deserialize_with = "whole_number")]
    pub frames: usize,
    #[serde(deserialize_with = "whole_number")]
    pub space_width: u32,
    #[serde(deserialize_with = "whole_number")]
    pub space_height: u32,
    /// Fixed RNG seed; a fresh entropy seed is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Steering parameters, editable at runtime by interactive front ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorSettings {
    pub perception_radius: f64,
    pub separation_distance: f64,
    pub max_speed: f64,
    pub max_force: f64,
    pub alignment_weight: f64,
    pub cohesion_weight: f64,
    pub separation_weight: f64,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        let core = BehaviorConfig::default();
        Self {
            perception_radius: core.perception_radius,
            separation_distance: core.separation_distance,
            max_speed: core.max_speed,
            max_force: core.max_force,
            alignment_weight: core.alignment_weight,
            cohesion_weight: core.cohesion_weight,
            separation_weight: core.separation_weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    pub output_dir: PathBuf,
}

/// The JSON configuration file:
///
/// ```json
/// {
///   "simulation": { "boid_count": 50, "frames": 500, "space_width": 800, "space_height": 600 },
///   "behavior": { "perception_radius": 50, "separation_distance": 20, "max_speed": 4,
///                 "max_force": 0.1, "alignment_weight": 1, "cohesion_weight": 1,
///                 "separation_weight": 1.5 },
///   "output": { "output_dir": "output" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub simulation: SimulationSection,
    pub behavior: BehaviorSettings,
    pub output: OutputSection,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let core = BehaviorConfig::default();
        Self {
            simulation: SimulationSection {
                boid_count: 50,
                frames: 500,
                space_width: core.width,
                space_height: core.height,
                seed: None,
            },
            behavior: BehaviorSettings::default(),
            output: OutputSection {
                output_dir: PathBuf::from("output"),
            },
        }
    }
}

impl SimulationConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parses and validates a JSON document. Missing keys surface as
    /// [`ConfigError::Parse`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if sim.boid_count == 0 {
            return Err(invalid("simulation.boid_count", "must be at least 1"));
        }
        if sim.space_width == 0 {
            return Err(invalid("simulation.space_width", "must be positive"));
        }
        if sim.space_height == 0 {
            return Err(invalid("simulation.space_height", "must be positive"));
        }

        let beh = &self.behavior;
        positive("behavior.perception_radius", beh.perception_radius)?;
        positive("behavior.separation_distance", beh.separation_distance)?;
        positive("behavior.max_speed", beh.max_speed)?;
        positive("behavior.max_force", beh.max_force)?;
        non_negative("behavior.alignment_weight", beh.alignment_weight)?;
        non_negative("behavior.cohesion_weight", beh.cohesion_weight)?;
        non_negative("behavior.separation_weight", beh.separation_weight)?;

        Ok(())
    }

    /// The per-tick value handed to the simulation core
    pub fn behavior(&self) -> BehaviorConfig {
        self.behavior.to_core(self.simulation.space_width, self.simulation.space_height)
    }
}

impl BehaviorSettings {
    pub fn to_core(&self, width: u32, height: u32) -> BehaviorConfig {
        BehaviorConfig {
            width,
            height,
            max_speed: self.max_speed,
            max_force: self.max_force,
            perception_radius: self.perception_radius,
            separation_distance: self.separation_distance,
            cohesion_weight: self.cohesion_weight,
            alignment_weight: self.alignment_weight,
            separation_weight: self.separation_weight,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WholeNumber {
    Int(u64),
    Float(f64),
}

/// Counts and sizes accept `800` as well as `800.0`, but not `800.5`.
fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let value = match WholeNumber::deserialize(deserializer)? {
        WholeNumber::Int(n) => n,
        WholeNumber::Float(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => f as u64,
        WholeNumber::Float(f) => {
            return Err(de::Error::custom(format!(
                "expected a non-negative whole number, got {f}"
            )))
        }
    };
    T::try_from(value).map_err(|_| de::Error::custom(format!("{value} is out of range")))
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be zero or positive, got {value}")))
    }
}
