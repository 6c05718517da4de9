use std::collections::VecDeque;

use crate::input::Direction;

/// Full-scale value of the reference 12-bit converter.
pub const DEFAULT_FULL_SCALE: u16 = 4095;
/// Resting value of the reference joystick on both axes.
pub const DEFAULT_CENTER: u16 = 2048;

/// One raw two-axis joystick sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RawAxes {
    pub x: u16,
    pub y: u16,
}

impl RawAxes {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// A sample with the stick pushed all the way towards `direction`.
    pub fn deflected(direction: Direction, center: u16, full_scale: u16) -> Self {
        match direction {
            Direction::Center => Self::new(center, center),
            Direction::Up => Self::new(center, full_scale),
            Direction::Down => Self::new(center, 0),
            Direction::Right => Self::new(full_scale, center),
            Direction::Left => Self::new(0, center),
        }
    }
}

/// Abstraction over the analog joystick.
/// Implementations: KeyboardJoystick (host), ScriptedSensor (testing).
pub trait AxisSensor {
    /// Take a fresh sample. Blocks until the conversion is done.
    fn read_raw_axes(&mut self) -> RawAxes;
}

impl<T: AxisSensor + ?Sized> AxisSensor for &mut T {
    fn read_raw_axes(&mut self) -> RawAxes {
        (**self).read_raw_axes()
    }
}

/// Sensor replaying a fixed list of samples.
///
/// Reading past the end panics, which turns a reader that polls forever into
/// a failing test instead of a hang.
#[derive(Debug, Clone)]
pub struct ScriptedSensor {
    samples: VecDeque<RawAxes>,
    center: u16,
    full_scale: u16,
    reads: usize,
}

impl ScriptedSensor {
    pub fn new() -> Self {
        Self::with_range(DEFAULT_CENTER, DEFAULT_FULL_SCALE)
    }

    pub fn with_range(center: u16, full_scale: u16) -> Self {
        Self {
            samples: VecDeque::new(),
            center,
            full_scale,
            reads: 0,
        }
    }

    /// Append one raw sample.
    pub fn raw(mut self, axes: RawAxes) -> Self {
        self.samples.push_back(axes);
        self
    }

    /// Append `polls` samples with the stick held towards `direction`.
    pub fn hold(mut self, direction: Direction, polls: usize) -> Self {
        let axes = RawAxes::deflected(direction, self.center, self.full_scale);
        self.samples.extend(std::iter::repeat_n(axes, polls));
        self
    }

    /// Append `polls` resting samples.
    pub fn center(self, polls: usize) -> Self {
        self.hold(Direction::Center, polls)
    }

    /// A short flick: one deflected sample, then back to rest.
    pub fn tap(self, direction: Direction) -> Self {
        self.hold(direction, 1).center(1)
    }

    /// Number of samples handed out so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Number of samples not yet read.
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl Default for ScriptedSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisSensor for ScriptedSensor {
    fn read_raw_axes(&mut self) -> RawAxes {
        match self.samples.pop_front() {
            Some(axes) => {
                self.reads += 1;
                axes
            }
            None => panic!("scripted sensor exhausted after {} reads", self.reads),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deflected_samples() {
        let up = RawAxes::deflected(Direction::Up, 2048, 4095);
        assert_eq!(up, RawAxes::new(2048, 4095));
        let left = RawAxes::deflected(Direction::Left, 2048, 4095);
        assert_eq!(left, RawAxes::new(0, 2048));
    }

    #[test]
    fn test_scripted_sensor_replays_in_order() {
        let mut sensor = ScriptedSensor::new().tap(Direction::Right).center(2);
        assert_eq!(sensor.remaining(), 4);

        assert_eq!(sensor.read_raw_axes(), RawAxes::new(4095, 2048));
        assert_eq!(sensor.read_raw_axes(), RawAxes::new(2048, 2048));
        assert_eq!(sensor.reads(), 2);
        assert_eq!(sensor.remaining(), 2);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_scripted_sensor_panics_when_empty() {
        let mut sensor = ScriptedSensor::new();
        sensor.read_raw_axes();
    }
}
