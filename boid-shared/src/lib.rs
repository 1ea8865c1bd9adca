//! Data that crosses the simulation core boundary: the JSON config file,
//! per-frame position records and the speed color gradient.

mod color;
mod config;
mod frame;

pub use color::{velocity_to_color, Rgb};
pub use config::{
    BehaviorSettings, ConfigError, OutputSection, SimulationConfig, SimulationSection,
};
pub use frame::{FrameRecord, Position};
