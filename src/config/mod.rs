//! Trainer configuration persisted as JSON.

mod trainer_config;

pub use trainer_config::{CueConfig, JoystickConfig, TimingConfig, TrainerConfig};
