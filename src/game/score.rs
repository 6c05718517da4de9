/// Running score for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    answered: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished round.
    pub fn record(&mut self, correct: bool) {
        self.answered += 1;
        if correct {
            self.score += 1;
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Percentage of rounds answered correctly.
    pub fn accuracy(&self) -> f64 {
        if self.answered == 0 {
            return 100.0;
        }
        f64::from(self.score) / f64::from(self.answered) * 100.0
    }
}
