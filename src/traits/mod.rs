//! Hardware seams consumed by the quiz core.
//!
//! Each trait comes with a deterministic test double next to it.

pub mod audio;
pub mod input;
pub mod render;
pub mod time;

pub use audio::{RecordingTone, ToneEvent, ToneOutput};
pub use input::{AxisSensor, RawAxes, ScriptedSensor};
pub use render::{ChoicePrompt, Feedback, NotePair, QuizRenderer, RecordingRenderer, Screen};
pub use time::{Delay, MockDelay, SystemDelay};
