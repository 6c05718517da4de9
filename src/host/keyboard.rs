use std::collections::VecDeque;
use std::io::BufRead;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::config::JoystickConfig;
use crate::input::Direction;
use crate::traits::{AxisSensor, RawAxes};

/// Largest offset added to every sample when jitter is enabled. Well inside
/// any sensible dead band.
pub const JITTER: i32 = 15;

/// Joystick stand-in fed by lines of text.
///
/// Each recognized key becomes one full deflection followed by one resting
/// sample. `w`/`k` push up, `s`/`j` down, `a`/`h` left and `d`/`l` right;
/// anything else is skipped. When the queue is empty the stick reports rest
/// once, then blocks for the next line. End of input powers the device off.
pub struct KeyboardJoystick<R> {
    reader: R,
    center: u16,
    full_scale: u16,
    pending: VecDeque<Direction>,
    rested: bool,
    jitter: Option<ChaCha8Rng>,
    power_off: fn() -> !,
}

impl<R: BufRead> KeyboardJoystick<R> {
    pub fn new(reader: R, config: &JoystickConfig) -> Self {
        Self {
            reader,
            center: config.center,
            full_scale: config.full_scale,
            pending: VecDeque::new(),
            rested: false,
            jitter: None,
            power_off: exit_process,
        }
    }

    /// Add a little seeded noise to every sample, like a real analog stick.
    pub fn with_jitter(mut self, seed: u64) -> Self {
        self.jitter = Some(ChaCha8Rng::seed_from_u64(seed));
        self
    }

    /// Replace what happens when input runs out.
    pub fn on_power_off(mut self, power_off: fn() -> !) -> Self {
        self.power_off = power_off;
        self
    }

    /// Deflections still waiting to be read.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Map one key to the direction it stands for.
    pub fn key_direction(key: char) -> Option<Direction> {
        match key.to_ascii_lowercase() {
            'w' | 'k' => Some(Direction::Up),
            's' | 'j' => Some(Direction::Down),
            'a' | 'h' => Some(Direction::Left),
            'd' | 'l' => Some(Direction::Right),
            _ => None,
        }
    }

    fn fill(&mut self) {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    info!("input closed, powering off");
                    (self.power_off)()
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("failed to read input: {e}");
                    (self.power_off)()
                }
            }

            for key in line.trim().chars() {
                match Self::key_direction(key) {
                    Some(direction) => {
                        self.pending.push_back(direction);
                        self.pending.push_back(Direction::Center);
                    }
                    None if key.is_whitespace() => {}
                    None => debug!(%key, "ignoring unmapped key"),
                }
            }
        }
    }

    fn axes(&mut self, direction: Direction) -> RawAxes {
        let axes = RawAxes::deflected(direction, self.center, self.full_scale);
        match self.jitter.as_mut() {
            Some(rng) => {
                let x = jittered(axes.x, rng.gen_range(-JITTER..=JITTER), self.full_scale);
                let y = jittered(axes.y, rng.gen_range(-JITTER..=JITTER), self.full_scale);
                RawAxes::new(x, y)
            }
            None => axes,
        }
    }
}

impl<R: BufRead> AxisSensor for KeyboardJoystick<R> {
    fn read_raw_axes(&mut self) -> RawAxes {
        if self.pending.is_empty() {
            if !self.rested {
                self.rested = true;
                return self.axes(Direction::Center);
            }
            self.fill();
        }

        let direction = self.pending.pop_front().unwrap_or_default();
        self.rested = false;
        self.axes(direction)
    }
}

fn jittered(value: u16, offset: i32, full_scale: u16) -> u16 {
    let shifted = (i32::from(value) + offset).clamp(0, i32::from(full_scale));
    u16::try_from(shifted).unwrap_or(full_scale)
}

fn exit_process() -> ! {
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::input::DirectionClassifier;

    fn powered_off() -> ! {
        panic!("powered off")
    }

    fn joystick(input: &str) -> KeyboardJoystick<Cursor<Vec<u8>>> {
        KeyboardJoystick::new(Cursor::new(input.as_bytes().to_vec()), &JoystickConfig::default())
            .on_power_off(powered_off)
    }

    fn classify(stick: &mut KeyboardJoystick<Cursor<Vec<u8>>>, polls: usize) -> Vec<Direction> {
        let classifier = DirectionClassifier::default();
        (0..polls)
            .map(|_| classifier.classify(stick.read_raw_axes()))
            .collect()
    }

    #[test]
    fn test_key_mapping() {
        type Stick = KeyboardJoystick<Cursor<Vec<u8>>>;
        assert_eq!(Stick::key_direction('w'), Some(Direction::Up));
        assert_eq!(Stick::key_direction('K'), Some(Direction::Up));
        assert_eq!(Stick::key_direction('s'), Some(Direction::Down));
        assert_eq!(Stick::key_direction('j'), Some(Direction::Down));
        assert_eq!(Stick::key_direction('a'), Some(Direction::Left));
        assert_eq!(Stick::key_direction('h'), Some(Direction::Left));
        assert_eq!(Stick::key_direction('d'), Some(Direction::Right));
        assert_eq!(Stick::key_direction('l'), Some(Direction::Right));
        assert_eq!(Stick::key_direction('x'), None);
    }

    #[test]
    fn test_first_read_rests_without_blocking() {
        let mut stick = joystick("");
        assert_eq!(stick.read_raw_axes(), RawAxes::new(2048, 2048));
    }

    #[test]
    fn test_each_key_is_a_flick() {
        let mut stick = joystick("wd\n");
        assert_eq!(
            classify(&mut stick, 5),
            vec![
                Direction::Center,
                Direction::Up,
                Direction::Center,
                Direction::Right,
                Direction::Center,
            ]
        );
    }

    #[test]
    fn test_unmapped_keys_skipped() {
        let mut stick = joystick("x?\n\ns\n");
        assert_eq!(
            classify(&mut stick, 3),
            vec![Direction::Center, Direction::Down, Direction::Center]
        );
    }

    #[test]
    fn test_rests_once_before_next_line() {
        let mut stick = joystick("a\nl\n");
        let seen = classify(&mut stick, 6);
        assert_eq!(
            seen,
            vec![
                Direction::Center,
                Direction::Left,
                Direction::Center,
                Direction::Center,
                Direction::Right,
                Direction::Center,
            ]
        );
        assert_eq!(stick.pending(), 0);
    }

    #[test]
    #[should_panic(expected = "powered off")]
    fn test_end_of_input_powers_off() {
        let mut stick = joystick("w\n");
        classify(&mut stick, 10);
    }

    #[test]
    fn test_jitter_keeps_classification() {
        let mut stick = joystick("wasd\n").with_jitter(99);
        let seen = classify(&mut stick, 9);
        assert_eq!(
            seen,
            vec![
                Direction::Center,
                Direction::Up,
                Direction::Center,
                Direction::Left,
                Direction::Center,
                Direction::Down,
                Direction::Center,
                Direction::Right,
                Direction::Center,
            ]
        );
    }

    #[test]
    fn test_jitter_moves_resting_sample() {
        let samples: Vec<_> = (0..20u64)
            .map(|seed| joystick("").with_jitter(seed).read_raw_axes())
            .collect();
        assert!(samples.iter().any(|s| *s != RawAxes::new(2048, 2048)));
        for s in &samples {
            assert!(s.x.abs_diff(2048) <= JITTER as u16);
            assert!(s.y.abs_diff(2048) <= JITTER as u16);
        }
    }

    #[test]
    fn test_jitter_clamped_to_range() {
        assert_eq!(jittered(4090, 15, 4095), 4095);
        assert_eq!(jittered(3, -15, 4095), 0);
        assert_eq!(jittered(2048, -15, 4095), 2033);
    }
}
