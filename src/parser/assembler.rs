//! Groups classified lines into questions.
//!
//! A two-state machine: until the first header every line is dropped, after
//! it option and answer lines attach to the open question.

use tracing::trace;

use crate::models::{Question, QuizSet};

use super::answer::AnswerResolver;
use super::lines::Line;
use super::options::decode;
use super::{IncompletePolicy, Numbering, ParserConfig, StrayLinePolicy};

struct OpenQuestion {
    question: Question,
    answer: AnswerResolver,
}

impl OpenQuestion {
    fn new(text: &str) -> Self {
        Self {
            question: Question::new(text),
            answer: AnswerResolver::default(),
        }
    }

    fn finish(mut self) -> Question {
        self.question.correct_answer = self.answer.resolve();
        self.question
    }
}

enum State {
    AwaitingQuestion,
    InQuestion(OpenQuestion),
}

pub struct Assembler<'c> {
    config: &'c ParserConfig,
    state: State,
    finished: Vec<Question>,
}

impl<'c> Assembler<'c> {
    pub fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            state: State::AwaitingQuestion,
            finished: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'_>) {
        match line {
            Line::QuestionHeader { line, body } => {
                let text = match self.config.numbering {
                    Numbering::Strip => body,
                    Numbering::Keep => line,
                };
                self.close();
                self.state = State::InQuestion(OpenQuestion::new(text));
            }
            Line::OptionLine(line) => {
                let State::InQuestion(open) = &mut self.state else {
                    trace!(line, "option before any question, dropped");
                    return;
                };
                let Some(decoded) = decode(line) else {
                    return;
                };
                let letter = decoded.option.letter;
                if open.question.option(letter).is_some() {
                    trace!(%letter, "duplicate option letter, dropped");
                    return;
                }
                if decoded.marked {
                    open.answer.mark_inline(letter);
                }
                open.question.options.push(decoded.option);
            }
            Line::AnswerLine { letter } => match &mut self.state {
                State::InQuestion(open) => open.answer.directive(letter),
                State::AwaitingQuestion => trace!("answer before any question, dropped"),
            },
            Line::Ignorable(text) => {
                if self.config.stray_lines != StrayLinePolicy::AppendToQuestion || text.is_empty() {
                    return;
                }
                let State::InQuestion(open) = &mut self.state else {
                    return;
                };
                let question = &mut open.question;
                if question.options.is_empty() {
                    if !question.text.is_empty() {
                        question.text.push(' ');
                    }
                    question.text.push_str(text);
                }
            }
        }
    }

    fn close(&mut self) {
        let state = std::mem::replace(&mut self.state, State::AwaitingQuestion);
        if let State::InQuestion(open) = state {
            self.finished.push(open.finish());
        }
    }

    pub fn finish(mut self) -> QuizSet {
        self.close();
        let mut questions = self.finished;

        if self.config.incomplete == IncompletePolicy::Drop {
            let before = questions.len();
            questions.retain(|q| !q.text.is_empty() && !q.options.is_empty());
            if questions.len() != before {
                trace!(dropped = before - questions.len(), "incomplete questions dropped");
            }
        }

        QuizSet::new(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Letter;
    use crate::parser::lines::split_lines;

    fn assemble(text: &str, config: &ParserConfig) -> QuizSet {
        let mut assembler = Assembler::new(config);
        for line in split_lines(text) {
            assembler.push(line);
        }
        assembler.finish()
    }

    #[test]
    fn test_orphan_lines_are_dropped() {
        let set = assemble("a) lost\nAnswer: a\n1. Q\nb) kept", &ParserConfig::default());
        assert_eq!(set.len(), 1);
        let question = set.get(0).unwrap();
        assert_eq!(question.options.len(), 1);
        assert_eq!(question.options[0].letter, Letter::B);
        assert_eq!(question.correct_answer, None);
    }

    #[test]
    fn test_duplicate_letter_keeps_first() {
        let set = assemble("1. Q\na) first\nA) second ✓", &ParserConfig::default());
        let question = set.get(0).unwrap();
        assert_eq!(question.options.len(), 1);
        assert_eq!(question.options[0].text, "first");
        assert_eq!(question.correct_answer, None);
    }

    #[test]
    fn test_incomplete_policy() {
        let text = "1. No options\n2.\na) textless\n3. Fine\na) x";

        let dropped = assemble(text, &ParserConfig::default());
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped.get(0).unwrap().text, "Fine");

        let config = ParserConfig {
            incomplete: IncompletePolicy::Keep,
            ..ParserConfig::default()
        };
        let kept = assemble(text, &config);
        assert_eq!(kept.len(), 3);
        assert!(kept.get(0).unwrap().options.is_empty());
        assert_eq!(kept.get(1).unwrap().text, "");
    }

    #[test]
    fn test_numbering_policy() {
        let config = ParserConfig {
            numbering: Numbering::Keep,
            ..ParserConfig::default()
        };
        let set = assemble("1. Q\na) x", &config);
        assert_eq!(set.get(0).unwrap().text, "1. Q");

        let set = assemble("1. Q\na) x", &ParserConfig::default());
        assert_eq!(set.get(0).unwrap().text, "Q");
    }

    #[test]
    fn test_stray_lines() {
        let text = "1. Which of these\nis a fruit?\n\na) apple\nnoise after options\nb) stone";

        let ignored = assemble(text, &ParserConfig::default());
        assert_eq!(ignored.get(0).unwrap().text, "Which of these");
        assert_eq!(ignored.get(0).unwrap().options.len(), 2);

        let config = ParserConfig {
            stray_lines: StrayLinePolicy::AppendToQuestion,
            ..ParserConfig::default()
        };
        let appended = assemble(text, &config);
        assert_eq!(appended.get(0).unwrap().text, "Which of these is a fruit?");
        assert_eq!(appended.get(0).unwrap().options.len(), 2);
    }
}
