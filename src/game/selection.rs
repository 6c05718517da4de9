use std::fmt;

use crate::input::Direction;

/// Number of questions in a session, always within
/// [`QuestionCount::MIN`]..=[`QuestionCount::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionCount(u8);

impl QuestionCount {
    pub const MIN: u8 = 5;
    pub const MAX: u8 = 20;
    pub const DEFAULT: u8 = 10;

    pub fn new(count: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&count).then_some(Self(count))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One fewer, unless already at the minimum.
    pub fn decremented(self) -> Option<Self> {
        Self::new(self.0.checked_sub(1)?)
    }

    /// One more, unless already at the maximum.
    pub fn incremented(self) -> Option<Self> {
        Self::new(self.0.checked_add(1)?)
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of feeding one joystick edge to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Nothing changed; the screen stays as it is.
    Unchanged,
    /// The count moved and the screen needs one redraw.
    Changed(QuestionCount),
    /// The listener started the quiz with this count.
    Confirmed(QuestionCount),
}

/// Transition rules of the count-selection screen: Left decrements, Right
/// increments, Up confirms. Out-of-range moves are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountSelector {
    count: QuestionCount,
}

impl CountSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(count: QuestionCount) -> Self {
        Self { count }
    }

    pub fn count(&self) -> QuestionCount {
        self.count
    }

    pub fn apply(&mut self, edge: Direction) -> SelectionOutcome {
        let next = match edge {
            Direction::Up => return SelectionOutcome::Confirmed(self.count),
            Direction::Left => self.count.decremented(),
            Direction::Right => self.count.incremented(),
            Direction::Down | Direction::Center => None,
        };
        match next {
            Some(count) => {
                self.count = count;
                SelectionOutcome::Changed(count)
            }
            None => SelectionOutcome::Unchanged,
        }
    }
}
