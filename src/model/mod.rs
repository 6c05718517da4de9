// Data models for notes, questions and answers.

pub mod note;
pub mod question;

pub use note::{NOTE_COUNT, NOTE_TABLE, Note};
pub use question::{GroundTruth, Judgment, Question};
