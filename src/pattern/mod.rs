//! Question generation.
//!
//! [`QuestionGenerator`] draws random adjacent-distinct note sequences;
//! [`FixedQuestions`] replays a known list so sessions can be scripted.

mod generator;

pub use generator::{FALLBACK_SEED, QuestionGenerator, derive_seed, normalize_seed};

use std::collections::VecDeque;

use crate::model::Question;

/// Something that hands out one question per quiz round.
pub trait QuestionSource {
    fn next_question(&mut self) -> Question;
}

impl<T: QuestionSource + ?Sized> QuestionSource for &mut T {
    fn next_question(&mut self) -> Question {
        (**self).next_question()
    }
}

/// Replays a fixed list of questions in order. Panics when drained.
#[derive(Debug, Clone, Default)]
pub struct FixedQuestions {
    questions: VecDeque<Question>,
}

impl FixedQuestions {
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Self {
        Self {
            questions: questions.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.questions.len()
    }
}

impl QuestionSource for FixedQuestions {
    fn next_question(&mut self) -> Question {
        match self.questions.pop_front() {
            Some(q) => q,
            None => panic!("fixed question list exhausted"),
        }
    }
}
