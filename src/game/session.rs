use tracing::{debug, info};

use super::{CountSelector, QuestionCount, Scoreboard, SelectionOutcome};
use crate::audio;
use crate::config::TrainerConfig;
use crate::input::{EdgeDetector, InputEventReader};
use crate::model::{GroundTruth, Judgment, Question};
use crate::pattern::QuestionSource;
use crate::traits::{
    AxisSensor, ChoicePrompt, Delay, Feedback, NotePair, QuizRenderer, ToneOutput,
};

/// Timing and cue values the session needs from [`TrainerConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub note_ms: u32,
    pub note_gap_ms: u32,
    pub feedback_dwell_ms: u32,
    pub tune_note_ms: u32,
    pub success_hz: u16,
    pub failure_hz: u16,
    pub cue_ms: u32,
    pub startup_tune: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&TrainerConfig::default())
    }
}

impl From<&TrainerConfig> for SessionSettings {
    fn from(config: &TrainerConfig) -> Self {
        Self {
            note_ms: config.timing.note_ms,
            note_gap_ms: config.timing.note_gap_ms,
            feedback_dwell_ms: config.timing.feedback_dwell_ms,
            tune_note_ms: config.timing.tune_note_ms,
            success_hz: config.cues.success_hz,
            failure_hz: config.cues.failure_hz,
            cue_ms: config.cues.cue_ms,
            startup_tune: config.startup_tune,
        }
    }
}

/// Where the session is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen, before any input is read.
    Startup,
    SelectingCount,
    Questioning { index: u8, total: u8 },
    /// Terminal. Nothing is polled after this; only a restart begins a new
    /// session.
    Finished { score: u32, total: u8 },
}

/// Everything that happened in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub index: u8,
    pub question: Question,
    pub truth: GroundTruth,
    pub judgment: Judgment,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub score: u32,
    pub total: u8,
    /// Percentage of rounds answered correctly.
    pub accuracy: f64,
    pub rounds: Vec<RoundOutcome>,
}

/// Drives a whole quiz: title, question-count selection, the rounds, and the
/// final score.
///
/// Everything runs synchronously on the caller's thread. Tone playback and
/// input polling never overlap.
pub struct QuizSession<S, D, T, R, Q> {
    input: InputEventReader<S>,
    delay: D,
    tone: T,
    renderer: R,
    questions: Q,
    settings: SessionSettings,
    scoreboard: Scoreboard,
    phase: Phase,
}

impl<S, D, T, R, Q> QuizSession<S, D, T, R, Q>
where
    S: AxisSensor,
    D: Delay,
    T: ToneOutput,
    R: QuizRenderer,
    Q: QuestionSource,
{
    pub fn new(
        input: InputEventReader<S>,
        delay: D,
        tone: T,
        renderer: R,
        questions: Q,
        settings: SessionSettings,
    ) -> Self {
        Self {
            input,
            delay,
            tone,
            renderer,
            questions,
            settings,
            scoreboard: Scoreboard::new(),
            phase: Phase::Startup,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn input(&self) -> &InputEventReader<S> {
        &self.input
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn tone(&self) -> &T {
        &self.tone
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn questions(&self) -> &Q {
        &self.questions
    }

    /// Title, count selection, every round, then the final screen.
    pub fn run(&mut self) -> SessionSummary {
        self.show_title();
        let count = self.select_question_count();
        self.run_quiz(count)
    }

    pub fn show_title(&mut self) {
        self.phase = Phase::Startup;
        self.renderer.render_title();
        if self.settings.startup_tune {
            audio::play_startup_tune(
                &mut self.tone,
                &mut self.delay,
                self.settings.tune_note_ms,
                self.settings.note_gap_ms,
            );
        }
    }

    /// Let the listener pick how many questions to play.
    ///
    /// The screen is drawn once up front and then only when the count
    /// actually changes.
    pub fn select_question_count(&mut self) -> QuestionCount {
        self.phase = Phase::SelectingCount;
        let mut selector = CountSelector::new();
        let mut edges = EdgeDetector::new();
        self.renderer.render_count_selection(selector.count().get());

        loop {
            let Some(edge) = edges.update(self.input.sample()) else {
                continue;
            };
            match selector.apply(edge) {
                SelectionOutcome::Unchanged => {}
                SelectionOutcome::Changed(count) => {
                    debug!(count = count.get(), "question count changed");
                    self.renderer.render_count_selection(count.get());
                }
                SelectionOutcome::Confirmed(count) => {
                    self.input.wait_for_release(edge);
                    info!(count = count.get(), "question count selected");
                    return count;
                }
            }
        }
    }

    /// Play `count` rounds drawn from the question source, then finish.
    pub fn run_quiz(&mut self, count: QuestionCount) -> SessionSummary {
        let total = count.get();
        let mut rounds = Vec::with_capacity(usize::from(total));
        for index in 1..=total {
            let question = self.questions.next_question();
            rounds.push(self.play_round(index, total, question));
        }
        self.finish(total);

        SessionSummary {
            score: self.scoreboard.score(),
            total,
            accuracy: self.scoreboard.accuracy(),
            rounds,
        }
    }

    /// Play one question and collect both judgments.
    pub fn play_round(&mut self, index: u8, total: u8, question: Question) -> RoundOutcome {
        self.phase = Phase::Questioning { index, total };
        let truth = question.ground_truth();
        debug!(index, notes = ?question.indices(), "round started");

        self.draw_progress(index, total);
        audio::play_sequence(
            &mut self.tone,
            &mut self.delay,
            &question.indices(),
            self.settings.note_ms,
            self.settings.note_gap_ms,
        );

        self.renderer.render_pair_prompt(NotePair::First);
        let first_up = self.ask_direction();

        self.draw_progress(index, total);
        self.renderer.render_pair_prompt(NotePair::Second);
        let second_up = self.ask_direction();

        let judgment = Judgment::new(first_up, second_up);
        let correct = judgment.matches(&truth);
        self.scoreboard.record(correct);

        let cue_hz = if correct {
            self.settings.success_hz
        } else {
            self.settings.failure_hz
        };
        audio::play_note(
            &mut self.tone,
            &mut self.delay,
            cue_hz,
            self.settings.cue_ms,
            self.settings.note_gap_ms,
        );

        self.renderer.render_feedback(&Feedback {
            index,
            total,
            score: self.scoreboard.score(),
            correct,
            answer_text: truth.answer_text(),
        });
        self.delay.delay_ms(self.settings.feedback_dwell_ms);

        info!(index, total, correct, score = self.scoreboard.score(), "round finished");
        RoundOutcome {
            index,
            question,
            truth,
            judgment,
            correct,
        }
    }

    /// Enter the terminal phase and show the final score.
    pub fn finish(&mut self, total: u8) {
        let score = self.scoreboard.score();
        self.phase = Phase::Finished { score, total };
        self.renderer.render_final(score, total);
        info!(score, total, "session finished");
    }

    fn draw_progress(&mut self, index: u8, total: u8) {
        self.renderer
            .render_question_header(index, total, self.scoreboard.score());
        self.renderer.render_sequence_placeholder();
    }

    fn ask_direction(&mut self) -> bool {
        self.input.wait_for_binary_choice(
            &mut self.delay,
            &mut self.renderer,
            &ChoicePrompt::PITCH_DIRECTION,
        )
    }
}
