use std::time::{Duration, Instant};

use crate::config::Config;
use crate::export;
use crate::models::{AppState, Feedback, Letter, Question, QuizDraft, QuizSet, Score};
use crate::parser::{self, Numbering};

/// Everything one editing session needs: the raw text, its parse and the
/// configuration both were produced with.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: Config,
    input: String,
    quiz: QuizSet,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            input: String::new(),
            quiz: QuizSet::default(),
        }
    }

    pub fn with_input(config: Config, text: impl Into<String>) -> Self {
        let mut session = Self::new(config);
        session.set_input(text);
        session
    }

    /// Replaces the input and reparses it from scratch. Selections are lost.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.quiz = parser::parse_with(&self.input, &self.config.parser);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn quiz(&self) -> &QuizSet {
        &self.quiz
    }

    pub fn select(&mut self, index: usize, letter: Letter) -> bool {
        self.quiz.select(index, letter)
    }

    pub fn clear_selections(&mut self) {
        self.quiz.clear_selections();
    }

    pub fn feedback(&self, index: usize) -> Option<Feedback> {
        self.quiz.get(index).map(Question::feedback)
    }

    pub fn score(&self) -> Score {
        self.quiz.score()
    }

    /// Canonical text of the current quiz. Numbers kept in question text
    /// are removed so the export is not numbered twice.
    pub fn export(&self) -> String {
        if self.config.parser.numbering == Numbering::Keep {
            let questions = self
                .quiz
                .iter()
                .map(|question| Question {
                    text: parser::strip_numbering(&question.text).to_string(),
                    ..question.clone()
                })
                .collect::<Vec<_>>();
            export::to_text(&QuizSet::new(questions), &self.config.export)
        } else {
            export::to_text(&self.quiz, &self.config.export)
        }
    }

    /// A draft for saving; selections are not part of a saved quiz.
    pub fn draft(&self, title: impl Into<String>, time_limit: Option<u32>) -> QuizDraft {
        let mut questions = self.quiz.clone();
        questions.clear_selections();
        QuizDraft::new(title, questions).with_time_limit(time_limit)
    }
}

/// State of the terminal review.
pub struct App {
    pub state: AppState,
    session: Session,
    title: String,
    current_question_index: usize,
    selected_option: usize,
    result_scroll: usize,
    time_limit: Option<Duration>,
    started_at: Option<Instant>,
}

impl App {
    pub fn new(session: Session, title: impl Into<String>) -> Self {
        Self {
            state: AppState::Welcome,
            session,
            title: title.into(),
            current_question_index: 0,
            selected_option: 0,
            result_scroll: 0,
            time_limit: None,
            started_at: None,
        }
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn questions(&self) -> &[Question] {
        self.session.quiz().questions()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.quiz().get(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.session.quiz().len()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn start_quiz(&mut self) {
        self.started_at = Some(Instant::now());
        self.state = if self.total_questions() == 0 {
            AppState::Result
        } else {
            AppState::Quiz
        };
    }

    /// Records the highlighted option as the answer to the current question.
    pub fn submit_answer(&mut self) {
        let letter = self
            .current_question()
            .and_then(|q| q.options.get(self.selected_option))
            .map(|option| option.letter);
        if let Some(letter) = letter {
            self.session.select(self.current_question_index, letter);
        }
    }

    pub fn next_question(&mut self) {
        if self.current_question_index + 1 < self.total_questions() {
            self.current_question_index += 1;
            self.selected_option = self.cursor_for_current();
        } else {
            self.finish();
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_question_index > 0 {
            self.current_question_index -= 1;
            self.selected_option = self.cursor_for_current();
        }
    }

    /// Puts the cursor on the already chosen option when revisiting a question.
    fn cursor_for_current(&self) -> usize {
        self.current_question()
            .and_then(|q| {
                let selected = q.selected_answer?;
                q.options.iter().position(|o| o.letter == selected)
            })
            .unwrap_or(0)
    }

    pub fn finish(&mut self) {
        self.state = AppState::Result;
        self.result_scroll = 0;
    }

    pub fn remaining_time(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        let started_at = self.started_at?;
        Some(limit.saturating_sub(started_at.elapsed()))
    }

    /// Ends the review once the time limit has run out.
    pub fn tick(&mut self) {
        if self.state == AppState::Quiz && self.remaining_time() == Some(Duration::ZERO) {
            self.finish();
        }
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.total_questions() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn calculate_score(&self) -> Score {
        self.session.score()
    }

    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.current_question_index = 0;
        self.selected_option = 0;
        self.result_scroll = 0;
        self.started_at = None;
        self.session.clear_selections();
    }
}
