//! Three-note pitch-direction ear trainer.
//!
//! The quiz core (question generation, joystick interpretation, scoring and
//! the session state machine) talks to hardware only through the traits in
//! [`traits`]. The [`host`] module backs those traits with a terminal so the
//! same core runs on a desktop.

pub mod audio;
pub mod config;
pub mod game;
pub mod host;
pub mod input;
pub mod model;
pub mod pattern;
pub mod traits;
pub mod util;

#[cfg(test)]
mod test_utils;
