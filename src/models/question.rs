use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized option identifier.
///
/// Input may label options with Latin (`a)`, `B)`) or Arabic (`أ)`, `ب)`)
/// letters; both end up here as the Latin capital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    /// Maps an option marker character to its letter.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'a' | 'A' | 'أ' => Some(Letter::A),
            'b' | 'B' | 'ب' => Some(Letter::B),
            'c' | 'C' | 'ج' => Some(Letter::C),
            'd' | 'D' | 'د' => Some(Letter::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One selectable answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub letter: Letter,
    pub text: String,
}

impl QuizOption {
    pub fn new(letter: Letter, text: impl Into<String>) -> Self {
        Self {
            letter,
            text: text.into(),
        }
    }
}

/// Outcome of comparing a question's selection with its answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Nothing selected yet.
    Unanswered,
    /// A selection exists but the question carries no answer key.
    Ungraded,
    Correct,
    Incorrect { correct: Letter },
}

/// A parsed question.
///
/// `correct_answer` and `selected_answer` are written as `""` when unset so
/// stored documents keep the same shape the browser app produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    pub options: Vec<QuizOption>,
    #[serde(with = "letter_or_empty", default)]
    pub correct_answer: Option<Letter>,
    #[serde(with = "letter_or_empty", default)]
    pub selected_answer: Option<Letter>,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
            correct_answer: None,
            selected_answer: None,
        }
    }

    pub fn option(&self, letter: Letter) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.letter == letter)
    }

    pub fn is_gradable(&self) -> bool {
        self.correct_answer.is_some()
    }

    pub fn feedback(&self) -> Feedback {
        match (self.selected_answer, self.correct_answer) {
            (None, _) => Feedback::Unanswered,
            (Some(_), None) => Feedback::Ungraded,
            (Some(selected), Some(correct)) if selected == correct => Feedback::Correct,
            (Some(_), Some(correct)) => Feedback::Incorrect { correct },
        }
    }
}

/// Tally of a quiz set's selections against its answer keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub correct: usize,
    /// Questions that have an answer key.
    pub gradable: usize,
    pub total: usize,
}

impl Score {
    pub fn percentage(&self) -> f64 {
        if self.gradable > 0 {
            (self.correct as f64 / self.gradable as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Ordered questions produced by one parse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizSet {
    questions: Vec<Question>,
}

impl QuizSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Records a selection on one question. Returns `false` if `index` is out of range.
    pub fn select(&mut self, index: usize, letter: Letter) -> bool {
        match self.questions.get_mut(index) {
            Some(question) => {
                question.selected_answer = Some(letter);
                true
            }
            None => false,
        }
    }

    pub fn clear_selections(&mut self) {
        for question in &mut self.questions {
            question.selected_answer = None;
        }
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self
                .questions
                .iter()
                .filter(|question| question.feedback() == Feedback::Correct)
                .count(),
            gradable: self.questions.iter().filter(|q| q.is_gradable()).count(),
            total: self.questions.len(),
        }
    }
}

impl From<Vec<Question>> for QuizSet {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl<'a> IntoIterator for &'a QuizSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

mod letter_or_empty {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Letter;

    pub fn serialize<S: Serializer>(
        value: &Option<Letter>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(letter) => serializer.collect_str(letter),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Letter>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let mut chars = raw.trim().chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(None),
            (Some(marker), None) => Letter::from_marker(marker)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid answer letter: {}", raw))),
            _ => Err(D::Error::custom(format!("invalid answer letter: {}", raw))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuizSet {
        let mut first = Question::new("2 + 2?");
        first.options = vec![QuizOption::new(Letter::A, "3"), QuizOption::new(Letter::B, "4")];
        first.correct_answer = Some(Letter::B);

        let mut second = Question::new("Capital of France?");
        second.options = vec![QuizOption::new(Letter::A, "Paris")];

        QuizSet::new(vec![first, second])
    }

    #[test]
    fn test_letter_from_marker() {
        assert_eq!(Letter::from_marker('a'), Some(Letter::A));
        assert_eq!(Letter::from_marker('D'), Some(Letter::D));
        assert_eq!(Letter::from_marker('ب'), Some(Letter::B));
        assert_eq!(Letter::from_marker('ج'), Some(Letter::C));
        assert_eq!(Letter::from_marker('e'), None);
        assert_eq!(Letter::from_marker('1'), None);
    }

    #[test]
    fn test_select_touches_one_question() {
        let mut set = sample();
        let before = set.get(1).cloned();

        assert!(set.select(0, Letter::A));
        assert_eq!(set.get(0).unwrap().selected_answer, Some(Letter::A));
        assert_eq!(set.get(1).cloned(), before);
        assert!(!set.select(5, Letter::A));
    }

    #[test]
    fn test_feedback() {
        let mut set = sample();
        assert_eq!(set.get(0).unwrap().feedback(), Feedback::Unanswered);

        set.select(0, Letter::A);
        assert_eq!(
            set.get(0).unwrap().feedback(),
            Feedback::Incorrect { correct: Letter::B }
        );

        set.select(0, Letter::B);
        assert_eq!(set.get(0).unwrap().feedback(), Feedback::Correct);

        set.select(1, Letter::A);
        assert_eq!(set.get(1).unwrap().feedback(), Feedback::Ungraded);
    }

    #[test]
    fn test_score_counts_only_gradable() {
        let mut set = sample();
        set.select(0, Letter::B);
        set.select(1, Letter::A);

        let score = set.score();
        assert_eq!(score, Score { correct: 1, gradable: 1, total: 2 });
        assert_eq!(score.percentage(), 100.0);

        set.clear_selections();
        assert_eq!(set.score().correct, 0);
    }

    #[test]
    fn test_json_keeps_empty_string_sentinel() {
        let set = sample();
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"correctAnswer\":\"B\""));
        assert!(json.contains("\"correctAnswer\":\"\""));
        assert!(json.contains("\"selectedAnswer\":\"\""));

        let back: QuizSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_json_rejects_unknown_letter() {
        let json = r#"[{"text":"Q","options":[],"correctAnswer":"E","selectedAnswer":""}]"#;
        assert!(serde_json::from_str::<QuizSet>(json).is_err());
    }
}
