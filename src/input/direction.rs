use crate::config::JoystickConfig;
use crate::traits::RawAxes;

/// Discrete joystick position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Center,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_center(self) -> bool {
        self == Direction::Center
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Center => "center",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Maps raw samples to a [`Direction`] with a dead band around the rest
/// value. The vertical axis is checked first, so a diagonal push reads as
/// up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionClassifier {
    center: u16,
    dead_band: u16,
}

impl DirectionClassifier {
    pub const fn new(center: u16, dead_band: u16) -> Self {
        Self { center, dead_band }
    }

    pub fn center(&self) -> u16 {
        self.center
    }

    pub fn dead_band(&self) -> u16 {
        self.dead_band
    }

    fn high(&self) -> u16 {
        self.center.saturating_add(self.dead_band)
    }

    fn low(&self) -> u16 {
        self.center.saturating_sub(self.dead_band)
    }

    /// First match wins: up, down, right, left, otherwise center.
    pub fn classify(&self, axes: RawAxes) -> Direction {
        let (high, low) = (self.high(), self.low());
        if axes.y > high {
            Direction::Up
        } else if axes.y < low {
            Direction::Down
        } else if axes.x > high {
            Direction::Right
        } else if axes.x < low {
            Direction::Left
        } else {
            Direction::Center
        }
    }
}

impl Default for DirectionClassifier {
    fn default() -> Self {
        Self::from(&JoystickConfig::default())
    }
}

impl From<&JoystickConfig> for DirectionClassifier {
    fn from(config: &JoystickConfig) -> Self {
        Self::new(config.center, config.dead_band)
    }
}
