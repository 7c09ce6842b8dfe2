//! Line classification.
//!
//! Each trimmed line is matched against the header, option and answer
//! patterns in that order; the first match decides its kind.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Letter;

/// `1.`, `12-`, `٣.` followed by optional whitespace.
static HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9٠-٩]+[.\-]\s*").expect("header pattern compiles"));

/// A single option letter immediately followed by `)`.
static OPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Da-dأبجد]\)").expect("option pattern compiles"));

static ANSWER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:answer:|الإجابة:)\s*").expect("answer pattern compiles"));

/// The kind of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    QuestionHeader {
        /// The whole trimmed line, numbering included.
        line: &'a str,
        /// The line with its numeric prefix removed.
        body: &'a str,
    },
    OptionLine(&'a str),
    AnswerLine {
        /// `None` when the directive names no recognizable letter.
        letter: Option<Letter>,
    },
    Ignorable(&'a str),
}

/// Byte-order mark and bidi marks that editors put at line starts.
const INVISIBLE_MARKS: [char; 4] = ['\u{feff}', '\u{200e}', '\u{200f}', '\u{061c}'];

/// Trims whitespace and invisible marks from both ends.
pub fn trim_line(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || INVISIBLE_MARKS.contains(&c))
}

pub fn classify(raw: &str) -> Line<'_> {
    let line = trim_line(raw);

    if let Some(prefix) = HEADER_PATTERN.find(line) {
        return Line::QuestionHeader {
            line,
            body: trim_line(&line[prefix.end()..]),
        };
    }

    if OPTION_PATTERN.is_match(line) {
        return Line::OptionLine(line);
    }

    if let Some(prefix) = ANSWER_PATTERN.find(line) {
        return Line::AnswerLine {
            letter: trim_line(&line[prefix.end()..])
                .chars()
                .next()
                .and_then(Letter::from_marker),
        };
    }

    Line::Ignorable(line)
}

/// Removes a leading question number, if any.
pub fn strip_numbering(text: &str) -> &str {
    match HEADER_PATTERN.find(text) {
        Some(prefix) => &text[prefix.end()..],
        None => text,
    }
}

/// Splits input into lines after folding `\r\n` and lone `\r` into `\n`.
pub fn split_lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split(['\n', '\r']).map(classify)
}
