use tracing::{debug, trace};

use super::{Direction, DirectionClassifier, EdgeDetector};
use crate::traits::{AxisSensor, ChoicePrompt, Delay, QuizRenderer};

/// Default pause between the stick settling at rest and accepting an answer.
pub const DEFAULT_SETTLE_MS: u32 = 80;

/// Blocking, debounced joystick reads.
///
/// Every wait here busy-polls the sensor with no timeout. A single-user
/// device has no way to report "no input", so the only way out of a wait is
/// the gesture it is waiting for.
pub struct InputEventReader<S> {
    sensor: S,
    classifier: DirectionClassifier,
    settle_ms: u32,
}

impl<S: AxisSensor> InputEventReader<S> {
    pub fn new(sensor: S, classifier: DirectionClassifier, settle_ms: u32) -> Self {
        Self {
            sensor,
            classifier,
            settle_ms,
        }
    }

    /// Reader with the reference thresholds and settle time.
    pub fn with_defaults(sensor: S) -> Self {
        Self::new(sensor, DirectionClassifier::default(), DEFAULT_SETTLE_MS)
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Take one fresh sample and classify it.
    pub fn sample(&mut self) -> Direction {
        self.classifier.classify(self.sensor.read_raw_axes())
    }

    /// Wait for a rising edge into one of `allowed`, then for its release.
    ///
    /// The stick is assumed to start at rest. Edges into directions outside
    /// `allowed` are ignored, and so is sliding from one deflection into an
    /// allowed one without returning to Center first. However long the
    /// gesture is held, it is reported exactly once.
    pub fn wait_for_edge(&mut self, allowed: &[Direction]) -> Direction {
        let mut edges = EdgeDetector::new();
        loop {
            let direction = self.sample();
            let Some(trigger) = edges.update(direction) else {
                continue;
            };
            if allowed.contains(&trigger) {
                trace!(direction = trigger.name(), "edge");
                self.wait_for_release(trigger);
                return trigger;
            }
        }
    }

    /// Poll until the stick reads anything other than `held`.
    pub fn wait_for_release(&mut self, held: Direction) {
        while self.sample() == held {}
    }

    /// Poll until the stick reads Center.
    pub fn wait_for_center(&mut self) {
        while !self.sample().is_center() {}
    }

    /// Ask an up/down question. Returns `true` for Up.
    ///
    /// A gesture still held from the previous screen is drained first, then
    /// the prompt is drawn after a short settle time. Left and Right never
    /// answer.
    pub fn wait_for_binary_choice<D, R>(
        &mut self,
        delay: &mut D,
        renderer: &mut R,
        prompt: &ChoicePrompt,
    ) -> bool
    where
        D: Delay + ?Sized,
        R: QuizRenderer + ?Sized,
    {
        self.wait_for_center();
        delay.delay_ms(self.settle_ms);
        renderer.render_choice_prompt(prompt);

        let answer = self.wait_for_edge(&[Direction::Up, Direction::Down]);
        debug!(answer = answer.name(), "binary choice");
        answer == Direction::Up
    }
}
