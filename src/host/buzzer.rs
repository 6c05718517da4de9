use tracing::{debug, trace};

use crate::model::note::note_for_frequency;
use crate::traits::{Delay, SystemDelay, ToneOutput};

/// Buzzer stand-in that logs each tone and blocks for its duration.
///
/// Nothing is synthesized; the timing of a session stays the same as on the
/// device.
#[derive(Debug, Default)]
pub struct ConsoleBuzzer<D = SystemDelay> {
    delay: D,
    sounding: Option<u16>,
    tones_played: u32,
}

impl ConsoleBuzzer<SystemDelay> {
    pub fn new() -> Self {
        Self::with_delay(SystemDelay)
    }
}

impl<D: Delay> ConsoleBuzzer<D> {
    pub fn with_delay(delay: D) -> Self {
        Self {
            delay,
            sounding: None,
            tones_played: 0,
        }
    }

    /// Frequency of the tone still nominally on, if any.
    pub fn sounding(&self) -> Option<u16> {
        self.sounding
    }

    /// Audible tones played so far. Rests are not counted.
    pub fn tones_played(&self) -> u32 {
        self.tones_played
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}

impl<D: Delay> ToneOutput for ConsoleBuzzer<D> {
    fn play_tone(&mut self, frequency_hz: u16, duration_ms: u32) {
        if frequency_hz == 0 {
            trace!(duration_ms, "rest");
            self.sounding = None;
        } else {
            let label = note_for_frequency(frequency_hz).map_or("-", |n| n.label);
            debug!(frequency_hz, note = label, duration_ms, "tone");
            self.sounding = Some(frequency_hz);
            self.tones_played += 1;
        }
        self.delay.delay_ms(duration_ms);
    }

    fn stop_tone(&mut self) {
        self.sounding = None;
    }
}
