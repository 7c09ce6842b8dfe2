//! # quizpad
//!
//! Paste-in quiz authoring and review. Free-form text with numbered
//! questions, lettered options (`a)`–`d)` or `أ)`–`د)`) and answer markers
//! (`✓` or `Answer: X`) is parsed into a [`QuizSet`], reviewed in the
//! terminal, exported back to canonical text and saved to a local or
//! remote store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizpad::{parse, export, Review, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = parse("1. 2 + 2?\na) 3\nb) 4\nAnswer: b");
//!     assert_eq!(quiz.len(), 1);
//!     print!("{}", export::to_text(&quiz, &Default::default()));
//!
//!     // Review it in the terminal
//!     Review::from_text("1. 2 + 2?\na) 3\nb) 4 ✓", "Arithmetic").run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
pub mod error;
pub mod export;
mod models;
pub mod parser;
pub mod protocol;
pub mod server;
pub mod store;
pub mod terminal;
mod ui;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Session};
pub use config::Config;
pub use error::{ConfigError, QuizError, StoreError};
pub use models::{
    AppState, Feedback, Letter, Question, QuizDraft, QuizOption, QuizSet, SavedQuiz, Score,
};
pub use parser::{ParserConfig, parse, parse_with};

const TICK_RATE: Duration = Duration::from_millis(250);

/// A quiz review that can be run in the terminal.
pub struct Review {
    app: App,
}

impl Review {
    pub fn new(session: Session, title: impl Into<String>) -> Self {
        Self {
            app: App::new(session, title),
        }
    }

    /// Parse `text` with default settings and review the result.
    pub fn from_text(text: &str, title: impl Into<String>) -> Self {
        Self::new(Session::with_input(Config::default(), text), title)
    }

    /// End the review automatically once `limit` has passed after starting.
    pub fn with_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.app = self.app.with_time_limit(limit);
        self
    }

    /// Run the review in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<Score, QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app)?;
        Ok(self.app.calculate_score())
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(TICK_RATE)? {
            app.tick();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            false
        }
        KeyCode::Right | KeyCode::Char('n') => {
            app.next_question();
            false
        }
        KeyCode::Left | KeyCode::Char('p') => {
            app.previous_question();
            false
        }
        KeyCode::Char('f') => {
            app.finish();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_flow() {
        let mut review = Review::from_text("1. Q\na) x\nb) y ✓\n2. R\na) z\nAnswer: a", "Keys");
        let app = review.app_mut();

        assert!(!handle_input(app, KeyCode::Enter));
        assert_eq!(app.state, AppState::Quiz);

        handle_input(app, KeyCode::Char('j'));
        handle_input(app, KeyCode::Enter);
        handle_input(app, KeyCode::Char('n'));
        handle_input(app, KeyCode::Char(' '));
        handle_input(app, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.calculate_score().correct, 2);

        handle_input(app, KeyCode::Char('r'));
        assert_eq!(app.state, AppState::Welcome);
        assert!(handle_input(app, KeyCode::Char('q')));
    }
}
