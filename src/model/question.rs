use super::note::{NOTE_COUNT, NOTE_TABLE};

/// Three note indices played in order.
///
/// Adjacent notes always differ, so each pair has a well-defined pitch
/// direction. The first and last note may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Question {
    notes: [usize; 3],
}

impl Question {
    /// Returns `None` when an index is out of the table or two adjacent
    /// notes are equal.
    pub fn new(notes: [usize; 3]) -> Option<Self> {
        let in_range = notes.iter().all(|&n| n < NOTE_COUNT);
        if in_range && notes[0] != notes[1] && notes[1] != notes[2] {
            Some(Self { notes })
        } else {
            None
        }
    }

    /// For callers that built the indices to satisfy the invariants.
    pub(crate) fn from_distinct(notes: [usize; 3]) -> Self {
        debug_assert!(Self::new(notes).is_some(), "invalid question {notes:?}");
        Self { notes }
    }

    /// Note indices in play order.
    pub fn indices(&self) -> [usize; 3] {
        self.notes
    }

    pub fn frequencies(&self) -> [u16; 3] {
        self.notes.map(|i| NOTE_TABLE[i].frequency_hz)
    }

    /// The correct answer, derived from the note frequencies.
    pub fn ground_truth(&self) -> GroundTruth {
        let [a, b, c] = self.frequencies();
        GroundTruth {
            first_up: b > a,
            second_up: c > b,
        }
    }
}

/// Whether the later note of each adjacent pair is higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroundTruth {
    pub first_up: bool,
    pub second_up: bool,
}

impl GroundTruth {
    /// Fixed-width answer line, e.g. `1:Up 2:Down`.
    pub fn answer_text(&self) -> String {
        format!(
            "1:{} 2:{}",
            direction_word(self.first_up),
            direction_word(self.second_up)
        )
    }
}

/// The listener's claim for each adjacent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Judgment {
    pub first_up: bool,
    pub second_up: bool,
}

impl Judgment {
    pub fn new(first_up: bool, second_up: bool) -> Self {
        Self {
            first_up,
            second_up,
        }
    }

    /// A round counts only when both pairs are answered correctly.
    pub fn matches(&self, truth: &GroundTruth) -> bool {
        self.first_up == truth.first_up && self.second_up == truth.second_up
    }
}

fn direction_word(up: bool) -> &'static str {
    if up { "Up" } else { "Down" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_adjacent_repeats() {
        assert!(Question::new([1, 1, 2]).is_none());
        assert!(Question::new([1, 2, 2]).is_none());
    }

    #[test]
    fn test_allows_outer_repeat() {
        let q = Question::new([3, 5, 3]).unwrap();
        assert_eq!(q.indices(), [3, 5, 3]);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(Question::new([0, 7, 1]).is_none());
    }

    #[test]
    fn test_ground_truth_ascending() {
        let q = Question::new([0, 2, 4]).unwrap();
        assert_eq!(q.frequencies(), [262, 330, 392]);

        let truth = q.ground_truth();
        assert!(truth.first_up);
        assert!(truth.second_up);
    }

    #[test]
    fn test_ground_truth_mixed() {
        let truth = Question::new([6, 1, 3]).unwrap().ground_truth();
        assert!(!truth.first_up);
        assert!(truth.second_up);
    }

    #[test]
    fn test_answer_text() {
        let truth = GroundTruth {
            first_up: true,
            second_up: false,
        };
        assert_eq!(truth.answer_text(), "1:Up 2:Down");

        let both_down = GroundTruth {
            first_up: false,
            second_up: false,
        };
        assert_eq!(both_down.answer_text(), "1:Down 2:Down");
    }

    #[test]
    fn test_judgment_needs_both_pairs() {
        let truth = Question::new([0, 2, 4]).unwrap().ground_truth();
        assert!(Judgment::new(true, true).matches(&truth));
        assert!(!Judgment::new(false, true).matches(&truth));
        assert!(!Judgment::new(true, false).matches(&truth));
    }
}
