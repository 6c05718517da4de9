use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::util::ConfigError;

const CONFIG_FILE: &str = "config.json";
const FALLBACK_CONFIG_FILE: &str = ".pitch-trainer.json";

/// Joystick converter range and dead band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JoystickConfig {
    /// Rest value on both axes.
    pub center: u16,
    /// Half-width of the rest window.
    pub dead_band: u16,
    /// Largest value the converter produces.
    pub full_scale: u16,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            center: 2048,
            dead_band: 400,
            full_scale: 4095,
        }
    }
}

/// Durations in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    /// Length of each question note.
    pub note_ms: u32,
    /// Silence after every tone.
    pub note_gap_ms: u32,
    /// Pause after the stick returns to rest before an answer is accepted.
    pub settle_ms: u32,
    /// How long the result screen stays up.
    pub feedback_dwell_ms: u32,
    /// Length of each startup-tune note.
    pub tune_note_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            note_ms: 300,
            note_gap_ms: 40,
            settle_ms: 80,
            feedback_dwell_ms: 1200,
            tune_note_ms: 400,
        }
    }
}

/// Right/wrong confirmation tones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CueConfig {
    pub success_hz: u16,
    pub failure_hz: u16,
    pub cue_ms: u32,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            success_hz: 523,
            failure_hz: 196,
            cue_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrainerConfig {
    pub joystick: JoystickConfig,
    pub timing: TimingConfig,
    pub cues: CueConfig,
    /// Play the jingle on the title screen.
    pub startup_tune: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            joystick: JoystickConfig::default(),
            timing: TimingConfig::default(),
            cues: CueConfig::default(),
            startup_tune: true,
        }
    }
}

impl TrainerConfig {
    /// Loads config from a specified path.
    /// Returns default config if file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a specified path, creating parent directories.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "pitch-trainer", "pitch-trainer") {
            proj_dirs.config_dir().join(CONFIG_FILE)
        } else {
            PathBuf::from(FALLBACK_CONFIG_FILE)
        }
    }

    /// Rejects values that would make a direction unreachable or a tone
    /// inaudible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let JoystickConfig {
            center,
            dead_band,
            full_scale,
        } = self.joystick;

        if center > full_scale {
            return Err(ConfigError::CenterOutOfRange { center, full_scale });
        }
        let fits_low = dead_band < center;
        let fits_high = u32::from(center) + u32::from(dead_band) < u32::from(full_scale);
        if !fits_low || !fits_high {
            return Err(ConfigError::DeadBandTooWide {
                center,
                dead_band,
                full_scale,
            });
        }

        for (field, value) in [
            ("timing.note_ms", self.timing.note_ms),
            ("timing.tune_note_ms", self.timing.tune_note_ms),
            ("cues.cue_ms", self.cues.cue_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDuration { field });
            }
        }

        for (field, value) in [
            ("cues.success_hz", self.cues.success_hz),
            ("cues.failure_hz", self.cues.failure_hz),
        ] {
            if value == 0 {
                return Err(ConfigError::SilentCue { field });
            }
        }

        Ok(())
    }
}
