//! Tone sequencing on top of [`ToneOutput`](crate::traits::ToneOutput).
//!
//! This module provides:
//! - [`play_note`]: one tone followed by a short silence
//! - [`play_sequence`]: a run of notes from the note table
//! - [`STARTUP_TUNE`] and [`play_startup_tune`]: the title-screen jingle

mod melody;

pub use melody::{STARTUP_TUNE, play_note, play_sequence, play_startup_tune};
