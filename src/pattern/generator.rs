use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::QuestionSource;
use crate::model::{NOTE_COUNT, Question};
use crate::traits::RawAxes;

/// Seed used when the derived seed comes out as zero.
pub const FALLBACK_SEED: u32 = 1;

/// Mix one joystick sample into a seed: `(x << 5) ^ (y << 1) ^ x`.
///
/// The low bits of a resting analog stick are noise, which is the only
/// entropy the device has at power-on.
pub fn derive_seed(axes: RawAxes) -> u32 {
    let x = u32::from(axes.x);
    let y = u32::from(axes.y);
    normalize_seed((x << 5) ^ (y << 1) ^ x)
}

/// Never hand a zero seed to the generator.
pub fn normalize_seed(seed: u32) -> u32 {
    if seed == 0 { FALLBACK_SEED } else { seed }
}

/// Draws three-note questions where adjacent notes differ.
///
/// Each note is drawn uniformly from the table; the second and third are
/// redrawn while equal to their predecessor. With 7 notes a redraw succeeds
/// with probability 6/7, so there is no iteration cap.
pub struct QuestionGenerator<R = ChaCha8Rng> {
    rng: R,
    seed: Option<u32>,
}

impl QuestionGenerator<ChaCha8Rng> {
    /// Seed once from `seed`, replacing zero with [`FALLBACK_SEED`].
    pub fn from_seed(seed: u32) -> Self {
        let seed = normalize_seed(seed);
        debug!(seed, "question generator seeded");
        Self {
            rng: ChaCha8Rng::seed_from_u64(u64::from(seed)),
            seed: Some(seed),
        }
    }

    /// Seed from one raw joystick sample taken at startup.
    pub fn from_sensor(axes: RawAxes) -> Self {
        Self::from_seed(derive_seed(axes))
    }
}

impl<R: Rng> QuestionGenerator<R> {
    /// Wrap an already-seeded generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, seed: None }
    }

    /// The seed this generator started from, when it was seeded here.
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    pub fn generate(&mut self) -> Question {
        let first = self.draw();
        let second = self.draw_except(first);
        let third = self.draw_except(second);
        Question::from_distinct([first, second, third])
    }

    fn draw(&mut self) -> usize {
        self.rng.gen_range(0..NOTE_COUNT)
    }

    fn draw_except(&mut self, previous: usize) -> usize {
        loop {
            let note = self.draw();
            if note != previous {
                return note;
            }
        }
    }
}

impl<R: Rng> QuestionSource for QuestionGenerator<R> {
    fn next_question(&mut self) -> Question {
        self.generate()
    }
}
