/// Abstraction over the square-wave tone generator.
/// Implementations: ConsoleBuzzer (host), RecordingTone (testing).
pub trait ToneOutput {
    /// Sound `frequency_hz` and return once `duration_ms` has elapsed.
    /// A frequency of 0 keeps the output silent for the duration.
    fn play_tone(&mut self, frequency_hz: u16, duration_ms: u32);

    /// Silence the output immediately.
    fn stop_tone(&mut self);
}

impl<T: ToneOutput + ?Sized> ToneOutput for &mut T {
    fn play_tone(&mut self, frequency_hz: u16, duration_ms: u32) {
        (**self).play_tone(frequency_hz, duration_ms)
    }

    fn stop_tone(&mut self) {
        (**self).stop_tone()
    }
}

/// One call made against a [`ToneOutput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneEvent {
    Play { frequency_hz: u16, duration_ms: u32 },
    Stop,
}

/// Tone output that only records what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingTone {
    pub events: Vec<ToneEvent>,
}

impl RecordingTone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frequencies of every audible tone, in order.
    pub fn played_frequencies(&self) -> Vec<u16> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ToneEvent::Play { frequency_hz, .. } if *frequency_hz > 0 => Some(*frequency_hz),
                _ => None,
            })
            .collect()
    }

    /// Total time spent inside `play_tone`.
    pub fn total_duration_ms(&self) -> u64 {
        self.events
            .iter()
            .map(|e| match e {
                ToneEvent::Play { duration_ms, .. } => u64::from(*duration_ms),
                ToneEvent::Stop => 0,
            })
            .sum()
    }
}

impl ToneOutput for RecordingTone {
    fn play_tone(&mut self, frequency_hz: u16, duration_ms: u32) {
        self.events.push(ToneEvent::Play {
            frequency_hz,
            duration_ms,
        });
    }

    fn stop_tone(&mut self) {
        self.events.push(ToneEvent::Stop);
    }
}
