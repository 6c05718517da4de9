//! Test utilities for scripting joystick answers and building sessions.
//!
//! Scripts are built in the same fluent style as [`ScriptedSensor`] so a
//! whole session reads top to bottom.

#[cfg(test)]
pub mod builders {
    use crate::game::{QuizSession, SessionSettings};
    use crate::input::InputEventReader;
    use crate::model::Question;
    use crate::pattern::FixedQuestions;
    use crate::traits::{MockDelay, RecordingRenderer, RecordingTone, ScriptedSensor};

    /// A session with every collaborator recorded.
    pub type TestSession = QuizSession<
        ScriptedSensor,
        MockDelay,
        RecordingTone,
        RecordingRenderer,
        FixedQuestions,
    >;

    /// Default timings, without the title jingle.
    pub fn quiet_settings() -> SessionSettings {
        SessionSettings {
            startup_tune: false,
            ..SessionSettings::default()
        }
    }

    pub fn session(sensor: ScriptedSensor, questions: Vec<Question>) -> TestSession {
        QuizSession::new(
            InputEventReader::with_defaults(sensor),
            MockDelay::new(),
            RecordingTone::new(),
            RecordingRenderer::new(),
            FixedQuestions::new(questions),
            quiet_settings(),
        )
    }

    /// Shorthand for a known-valid question.
    pub fn question(notes: [usize; 3]) -> Question {
        match Question::new(notes) {
            Some(q) => q,
            None => panic!("invalid test question {notes:?}"),
        }
    }
}

#[cfg(test)]
pub mod scripts {
    use crate::game::QuestionCount;
    use crate::input::Direction;
    use crate::traits::ScriptedSensor;

    /// One up/down answer: the stick rests, then flicks.
    pub fn answer(sensor: ScriptedSensor, up: bool) -> ScriptedSensor {
        let direction = if up { Direction::Up } else { Direction::Down };
        sensor.center(1).tap(direction)
    }

    /// Both judgments of one round.
    pub fn answer_round(sensor: ScriptedSensor, first_up: bool, second_up: bool) -> ScriptedSensor {
        answer(answer(sensor, first_up), second_up)
    }

    /// Step from the starting count to `count` and confirm.
    pub fn select_count(mut sensor: ScriptedSensor, count: u8) -> ScriptedSensor {
        let start = QuestionCount::DEFAULT;
        let (direction, steps) = if count < start {
            (Direction::Left, start - count)
        } else {
            (Direction::Right, count - start)
        };
        for _ in 0..steps {
            sensor = sensor.tap(direction);
        }
        sensor.tap(Direction::Up)
    }
}
