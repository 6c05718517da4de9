/// Which adjacent pair of the sequence a judgment is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotePair {
    /// 2nd note against the 1st.
    First,
    /// 3rd note against the 2nd.
    Second,
}

impl NotePair {
    pub fn prompt(self) -> &'static str {
        match self {
            NotePair::First => "1) 2nd vs 1st note",
            NotePair::Second => "2) 3rd vs 2nd note",
        }
    }
}

/// Labels shown while waiting for an up/down answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChoicePrompt {
    pub up_label: &'static str,
    pub down_label: &'static str,
}

impl ChoicePrompt {
    /// The prompt used for every pitch-direction question.
    pub const PITCH_DIRECTION: Self = Self {
        up_label: "UP = later higher",
        down_label: "DOWN = later lower",
    };
}

/// Contents of the per-round result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub index: u8,
    pub total: u8,
    pub score: u32,
    pub correct: bool,
    /// Ground truth in `1:<Up|Down> 2:<Up|Down>` form.
    pub answer_text: String,
}

/// Abstraction over the display.
/// Implementations: TerminalRenderer (host), RecordingRenderer (testing).
///
/// Every call carries only literal values; no quiz logic lives behind it.
pub trait QuizRenderer {
    fn render_title(&mut self);
    fn render_count_selection(&mut self, count: u8);
    fn render_question_header(&mut self, index: u8, total: u8, score: u32);
    fn render_sequence_placeholder(&mut self);
    fn render_pair_prompt(&mut self, pair: NotePair);
    fn render_choice_prompt(&mut self, prompt: &ChoicePrompt);
    fn render_feedback(&mut self, feedback: &Feedback);
    fn render_final(&mut self, score: u32, total: u8);
}

impl<T: QuizRenderer + ?Sized> QuizRenderer for &mut T {
    fn render_title(&mut self) {
        (**self).render_title()
    }

    fn render_count_selection(&mut self, count: u8) {
        (**self).render_count_selection(count)
    }

    fn render_question_header(&mut self, index: u8, total: u8, score: u32) {
        (**self).render_question_header(index, total, score)
    }

    fn render_sequence_placeholder(&mut self) {
        (**self).render_sequence_placeholder()
    }

    fn render_pair_prompt(&mut self, pair: NotePair) {
        (**self).render_pair_prompt(pair)
    }

    fn render_choice_prompt(&mut self, prompt: &ChoicePrompt) {
        (**self).render_choice_prompt(prompt)
    }

    fn render_feedback(&mut self, feedback: &Feedback) {
        (**self).render_feedback(feedback)
    }

    fn render_final(&mut self, score: u32, total: u8) {
        (**self).render_final(score, total)
    }
}

/// One recorded render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Title,
    CountSelection(u8),
    QuestionHeader { index: u8, total: u8, score: u32 },
    SequencePlaceholder,
    PairPrompt(NotePair),
    ChoicePrompt(ChoicePrompt),
    Feedback(Feedback),
    Final { score: u32, total: u8 },
}

/// Renderer that records each request instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub screens: Vec<Screen>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts recorded requests matching `pred`.
    pub fn count(&self, pred: impl Fn(&Screen) -> bool) -> usize {
        self.screens.iter().filter(|s| pred(s)).count()
    }

    /// Values shown on the count-selection screen, in order.
    pub fn selection_counts(&self) -> Vec<u8> {
        self.screens
            .iter()
            .filter_map(|s| match s {
                Screen::CountSelection(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    pub fn feedbacks(&self) -> Vec<&Feedback> {
        self.screens
            .iter()
            .filter_map(|s| match s {
                Screen::Feedback(f) => Some(f),
                _ => None,
            })
            .collect()
    }

    pub fn last(&self) -> Option<&Screen> {
        self.screens.last()
    }
}

impl QuizRenderer for RecordingRenderer {
    fn render_title(&mut self) {
        self.screens.push(Screen::Title);
    }

    fn render_count_selection(&mut self, count: u8) {
        self.screens.push(Screen::CountSelection(count));
    }

    fn render_question_header(&mut self, index: u8, total: u8, score: u32) {
        self.screens.push(Screen::QuestionHeader {
            index,
            total,
            score,
        });
    }

    fn render_sequence_placeholder(&mut self) {
        self.screens.push(Screen::SequencePlaceholder);
    }

    fn render_pair_prompt(&mut self, pair: NotePair) {
        self.screens.push(Screen::PairPrompt(pair));
    }

    fn render_choice_prompt(&mut self, prompt: &ChoicePrompt) {
        self.screens.push(Screen::ChoicePrompt(*prompt));
    }

    fn render_feedback(&mut self, feedback: &Feedback) {
        self.screens.push(Screen::Feedback(feedback.clone()));
    }

    fn render_final(&mut self, score: u32, total: u8) {
        self.screens.push(Screen::Final { score, total });
    }
}
