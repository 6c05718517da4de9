use std::io::{self, Write};

use tracing::warn;

use crate::traits::{ChoicePrompt, Feedback, NotePair, QuizRenderer};

/// Text printed between screens, standing in for clearing the display.
pub const SCREEN_RULE: &str = "--------------------";

/// Draws the device's screens as plain text.
///
/// Calls that clear the display on the device start with [`SCREEN_RULE`];
/// the others add lines below what is already shown.
pub struct TerminalRenderer<W> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn screen(&mut self, lines: &[&str]) {
        self.draw(true, lines);
    }

    fn append(&mut self, lines: &[&str]) {
        self.draw(false, lines);
    }

    fn draw(&mut self, clear: bool, lines: &[&str]) {
        if let Err(e) = self.write_lines(clear, lines) {
            warn!("failed to draw screen: {e}");
        }
    }

    fn write_lines(&mut self, clear: bool, lines: &[&str]) -> io::Result<()> {
        if clear {
            writeln!(self.out, "{SCREEN_RULE}")?;
        }
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> QuizRenderer for TerminalRenderer<W> {
    fn render_title(&mut self) {
        self.screen(&["Music Trainer", "", "Use the joystick", "to play!"]);
    }

    fn render_count_selection(&mut self, count: u8) {
        let count = count.to_string();
        self.screen(&[
            "Select # Questions",
            count.as_str(),
            "LEFT: -1   RIGHT: +1",
            "UP: start",
        ]);
    }

    fn render_question_header(&mut self, index: u8, total: u8, score: u32) {
        let progress = format!("Q {index} / {total}");
        let score = format!("Score: {score}");
        self.screen(&["Music Trainer", progress.as_str(), score.as_str()]);
    }

    fn render_sequence_placeholder(&mut self) {
        self.append(&["3 notes played: 1,2,3"]);
    }

    fn render_pair_prompt(&mut self, pair: NotePair) {
        self.append(&[pair.prompt()]);
    }

    fn render_choice_prompt(&mut self, prompt: &ChoicePrompt) {
        self.append(&[prompt.up_label, prompt.down_label]);
    }

    fn render_feedback(&mut self, feedback: &Feedback) {
        let progress = format!("Q {} / {}", feedback.index, feedback.total);
        let score = format!("Score: {}", feedback.score);
        let verdict = if feedback.correct { "Correct!" } else { "Wrong" };
        self.screen(&[
            progress.as_str(),
            score.as_str(),
            verdict,
            "Answer:",
            feedback.answer_text.as_str(),
        ]);
    }

    fn render_final(&mut self, score: u32, total: u8) {
        let score = format!("Score: {score} / {total}");
        self.screen(&["Game Over", score.as_str(), "Press RESET", "to play again"]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(draw: impl FnOnce(&mut TerminalRenderer<Vec<u8>>)) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new());
        draw(&mut renderer);
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_count_selection_screen() {
        let text = output(|r| r.render_count_selection(12));
        assert_eq!(
            text,
            format!("{SCREEN_RULE}\nSelect # Questions\n12\nLEFT: -1   RIGHT: +1\nUP: start\n")
        );
    }

    #[test]
    fn test_question_screen_builds_up() {
        let text = output(|r| {
            r.render_question_header(3, 10, 2);
            r.render_sequence_placeholder();
            r.render_pair_prompt(NotePair::Second);
            r.render_choice_prompt(&ChoicePrompt::PITCH_DIRECTION);
        });
        assert_eq!(text.matches(SCREEN_RULE).count(), 1);
        assert!(text.contains("Q 3 / 10\nScore: 2\n3 notes played: 1,2,3\n"));
        assert!(text.ends_with("2) 3rd vs 2nd note\nUP = later higher\nDOWN = later lower\n"));
    }

    #[test]
    fn test_feedback_screen() {
        let feedback = Feedback {
            index: 1,
            total: 5,
            score: 0,
            correct: false,
            answer_text: "1:Up 2:Down".to_string(),
        };
        let text = output(|r| r.render_feedback(&feedback));
        assert!(text.contains("Wrong\nAnswer:\n1:Up 2:Down\n"));
        assert!(text.contains("Q 1 / 5\nScore: 0\n"));
    }

    #[test]
    fn test_final_and_title_screens() {
        let text = output(|r| {
            r.render_title();
            r.render_final(7, 10);
        });
        assert_eq!(text.matches(SCREEN_RULE).count(), 2);
        assert!(text.contains("Use the joystick\nto play!\n"));
        assert!(text.ends_with("Game Over\nScore: 7 / 10\nPress RESET\nto play again\n"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut renderer = TerminalRenderer::new(BrokenPipe);
        renderer.render_title();
        renderer.render_final(0, 5);
    }
}
