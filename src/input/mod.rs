//! Joystick interpretation.
//!
//! This module provides:
//! - [`DirectionClassifier`]: raw two-axis samples to one of five directions
//! - [`EdgeDetector`]: rising edges out of the rest position
//! - [`InputEventReader`]: blocking, debounced reads built on the two above

mod direction;
mod edge;
mod event_reader;

pub use direction::{Direction, DirectionClassifier};
pub use edge::EdgeDetector;
pub use event_reader::InputEventReader;
