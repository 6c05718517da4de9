//! Quiz rules and the session state machine.

mod score;
mod selection;
mod session;

pub use score::Scoreboard;
pub use selection::{CountSelector, QuestionCount, SelectionOutcome};
pub use session::{Phase, QuizSession, RoundOutcome, SessionSettings, SessionSummary};
