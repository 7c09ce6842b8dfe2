//! Canonical export text.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::models::{Question, QuizSet};

/// How the correct answer is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerMarking {
    /// A trailing `Answer: X` line after the options.
    #[default]
    AnswerLine,
    /// `✓` after the correct option's text. An answer naming a letter with
    /// no option still gets an `Answer:` line.
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub answer_marking: AnswerMarking,
}

/// Renders a quiz set in the same format the parser reads.
///
/// Questions are numbered from 1. Question text is written as stored.
pub fn to_text(set: &QuizSet, config: &ExportConfig) -> String {
    let mut out = String::new();
    for (index, question) in set.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        write_question(&mut out, index + 1, question, config.answer_marking);
    }
    out
}

fn write_question(out: &mut String, number: usize, question: &Question, marking: AnswerMarking) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}. {}", number, question.text);

    let inline = marking == AnswerMarking::Inline
        && question
            .correct_answer
            .is_some_and(|letter| question.option(letter).is_some());

    for option in &question.options {
        let _ = write!(out, "{}) {}", option.letter, option.text);
        if inline && question.correct_answer == Some(option.letter) {
            out.push_str(" ✓");
        }
        out.push('\n');
    }

    if let (false, Some(letter)) = (inline, question.correct_answer) {
        let _ = writeln!(out, "Answer: {}", letter);
    }
}

pub fn to_json(set: &QuizSet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Letter;
    use crate::parser::parse;

    const INPUT: &str = "\
1. Largest planet?
أ) Mars
ب) Jupiter ✓

2- Pick a vowel
a) b
b) e
c) k
Answer: B

3. Unkeyed
a) yes
b) no
";

    #[test]
    fn test_answer_line_format() {
        let text = to_text(&parse(INPUT), &ExportConfig::default());
        assert_eq!(
            text,
            "1. Largest planet?\nA) Mars\nB) Jupiter\nAnswer: B\n\n\
             2. Pick a vowel\nA) b\nB) e\nC) k\nAnswer: B\n\n\
             3. Unkeyed\nA) yes\nB) no\n"
        );
    }

    #[test]
    fn test_inline_format() {
        let config = ExportConfig {
            answer_marking: AnswerMarking::Inline,
        };
        let text = to_text(&parse(INPUT), &config);
        assert!(text.starts_with("1. Largest planet?\nA) Mars\nB) Jupiter ✓\n"));
        assert!(!text.contains("Answer:"));
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let original = parse(INPUT);
        for answer_marking in [AnswerMarking::AnswerLine, AnswerMarking::Inline] {
            let text = to_text(&original, &ExportConfig { answer_marking });
            assert_eq!(parse(&text), original);
        }
    }

    #[test]
    fn test_inline_falls_back_for_missing_option() {
        let config = ExportConfig {
            answer_marking: AnswerMarking::Inline,
        };
        let set = parse("1. Q\na) x\nAnswer: d");
        assert_eq!(to_text(&set, &config), "1. Q\nA) x\nAnswer: D\n");
        assert_eq!(parse(&to_text(&set, &config)), set);
    }

    #[test]
    fn test_numbered_looking_text_survives() {
        let set = parse("1. 2-x\na) y");
        assert_eq!(set.get(0).unwrap().text, "2-x");
        assert_eq!(parse(&to_text(&set, &ExportConfig::default())), set);
    }

    #[test]
    fn test_selection_is_not_exported() {
        let mut set = parse(INPUT);
        set.select(0, Letter::A);
        assert_eq!(
            to_text(&set, &ExportConfig::default()),
            to_text(&parse(INPUT), &ExportConfig::default())
        );
    }

    #[test]
    fn test_json_export() {
        let json = to_json(&parse("1. Q\na) x\nAnswer: a")).unwrap();
        assert!(json.contains("\"correctAnswer\": \"A\""));
    }
}
