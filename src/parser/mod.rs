//! Quiz text parser.
//!
//! Turns pasted text such as
//!
//! ```text
//! 1. Which keyword declares a constant?
//! a) let
//! b) const ✓
//! c) static
//! Answer: b
//! ```
//!
//! into a [`QuizSet`]. Parsing is total: malformed lines are dropped and the
//! worst case is an empty set.

mod answer;
mod assembler;
mod lines;
mod options;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::QuizSet;

pub use answer::AnswerResolver;
pub use lines::{Line, classify, strip_numbering};
pub use options::{CHECK_MARKS, DecodedOption, decode};

use assembler::Assembler;

/// What happens to the `1. ` prefix of a question header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Numbering {
    #[default]
    Strip,
    Keep,
}

/// What happens to questions with empty text or no options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncompletePolicy {
    #[default]
    Drop,
    Keep,
}

/// What happens to unrecognized lines inside a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrayLinePolicy {
    #[default]
    Ignore,
    /// Continue the question text until its first option.
    AppendToQuestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub numbering: Numbering,
    pub incomplete: IncompletePolicy,
    pub stray_lines: StrayLinePolicy,
}

/// Parses with the default policies.
pub fn parse(text: &str) -> QuizSet {
    parse_with(text, &ParserConfig::default())
}

pub fn parse_with(text: &str, config: &ParserConfig) -> QuizSet {
    let mut assembler = Assembler::new(config);
    for line in lines::split_lines(text) {
        assembler.push(line);
    }
    let set = assembler.finish();
    debug!(questions = set.len(), "parsed quiz text");
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Letter, QuizOption};

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\n  ").is_empty());
    }

    #[test]
    fn test_arabic_letters_with_inline_mark() {
        let set = parse("1. Q\nأ) x\nب) y ✓\n");
        let question = set.get(0).unwrap();
        assert_eq!(
            question.options,
            vec![QuizOption::new(Letter::A, "x"), QuizOption::new(Letter::B, "y")]
        );
        assert_eq!(question.correct_answer, Some(Letter::B));
        assert_eq!(question.selected_answer, None);
    }

    #[test]
    fn test_trailing_answer_line() {
        let set = parse("1. Q\na) x\nb) y\nAnswer: b\n");
        assert_eq!(set.get(0).unwrap().correct_answer, Some(Letter::B));
    }

    #[test]
    fn test_answer_line_overrides_inline_mark() {
        let set = parse("1. Q\na) x ✓\nb) y\nAnswer: b\n");
        assert_eq!(set.get(0).unwrap().correct_answer, Some(Letter::B));
    }

    #[test]
    fn test_inline_mark_after_answer_line_wins() {
        let set = parse("1. Q\na) x\nAnswer: a\nb) y ✓\n");
        assert_eq!(set.get(0).unwrap().correct_answer, Some(Letter::B));
    }

    #[test]
    fn test_missing_answer_is_not_an_error() {
        let set = parse("1. Q\na) x\nb) y");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().correct_answer, None);
    }

    #[test]
    fn test_answer_without_matching_option_is_kept() {
        let set = parse("1. Q\na) x\nAnswer: d");
        assert_eq!(set.get(0).unwrap().correct_answer, Some(Letter::D));
    }

    #[test]
    fn test_questions_keep_input_order() {
        let text = "1. First\na) 1\n2- Second\na) 2\n3. Third\na) 3\nAnswer: a";
        let texts: Vec<_> = parse(text).iter().map(|q| q.text.clone()).collect();
        assert_eq!(texts, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_reparse_is_identical() {
        let text = "1. Q\na) x ✓\nb) y\n\n2. R\nأ) z\nAnswer: أ";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{"numbering":"keep","stray_lines":"append-to-question"}"#;
        let config: ParserConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.numbering, Numbering::Keep);
        assert_eq!(config.incomplete, IncompletePolicy::Drop);
        assert_eq!(config.stray_lines, StrayLinePolicy::AppendToQuestion);
    }
}
