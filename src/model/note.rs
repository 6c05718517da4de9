/// Number of notes in the fixed table.
pub const NOTE_COUNT: usize = 7;

/// A playable pitch with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    /// Square-wave frequency in Hz.
    pub frequency_hz: u16,
    /// Short note name shown to the listener.
    pub label: &'static str,
}

impl Note {
    pub const fn new(frequency_hz: u16, label: &'static str) -> Self {
        Self {
            frequency_hz,
            label,
        }
    }
}

/// C major scale from middle C, ascending. Indices 0..=6.
pub const NOTE_TABLE: [Note; NOTE_COUNT] = [
    Note::new(262, "C"),
    Note::new(294, "D"),
    Note::new(330, "E"),
    Note::new(349, "F"),
    Note::new(392, "G"),
    Note::new(440, "A"),
    Note::new(494, "B"),
];

/// Looks up a note by table index.
pub fn note(index: usize) -> Option<&'static Note> {
    NOTE_TABLE.get(index)
}

/// Finds the table entry for a frequency, if it is one of ours.
pub fn note_for_frequency(frequency_hz: u16) -> Option<&'static Note> {
    NOTE_TABLE.iter().find(|n| n.frequency_hz == frequency_hz)
}
