use crate::model::note;
use crate::traits::{Delay, ToneOutput};

/// Note-table indices of the title-screen jingle.
pub const STARTUP_TUNE: [usize; 13] = [0, 2, 4, 5, 4, 2, 0, 4, 2, 0, 4, 5, 4];

/// Sound one tone, silence the output, then hold the silence for `gap_ms`
/// so consecutive notes stay distinct.
pub fn play_note<T, D>(tone: &mut T, delay: &mut D, frequency_hz: u16, duration_ms: u32, gap_ms: u32)
where
    T: ToneOutput + ?Sized,
    D: Delay + ?Sized,
{
    tone.play_tone(frequency_hz, duration_ms);
    tone.stop_tone();
    delay.delay_ms(gap_ms);
}

/// Play note-table indices in order. An index outside the table rests for
/// the same duration instead.
pub fn play_sequence<T, D>(
    tone: &mut T,
    delay: &mut D,
    indices: &[usize],
    duration_ms: u32,
    gap_ms: u32,
) where
    T: ToneOutput + ?Sized,
    D: Delay + ?Sized,
{
    for &index in indices {
        match note::note(index) {
            Some(n) => play_note(tone, delay, n.frequency_hz, duration_ms, gap_ms),
            None => delay.delay_ms(duration_ms),
        }
    }
    tone.stop_tone();
}

pub fn play_startup_tune<T, D>(tone: &mut T, delay: &mut D, duration_ms: u32, gap_ms: u32)
where
    T: ToneOutput + ?Sized,
    D: Delay + ?Sized,
{
    play_sequence(tone, delay, &STARTUP_TUNE, duration_ms, gap_ms);
}
