mod question;
mod saved;

pub use question::{Feedback, Letter, Question, QuizOption, QuizSet, Score};
pub use saved::{QuizDraft, SavedQuiz};

/// Screens of the terminal review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
