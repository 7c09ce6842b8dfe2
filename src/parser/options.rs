use crate::models::{Letter, QuizOption};

use super::lines::trim_line;

/// Glyphs that mark an option as the correct one.
pub const CHECK_MARKS: [char; 2] = ['✓', '✔'];

/// An option line after decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedOption {
    pub option: QuizOption,
    /// The line carried a check mark.
    pub marked: bool,
}

/// Decodes an option line such as `b) Paris ✓`.
///
/// Returns `None` if the line does not start with a known letter followed by `)`.
pub fn decode(line: &str) -> Option<DecodedOption> {
    let line = trim_line(line);
    let mut chars = line.chars();
    let letter = Letter::from_marker(chars.next()?)?;
    let rest = chars.as_str().strip_prefix(')')?;

    let marked = rest.contains(CHECK_MARKS);
    let text = if marked {
        rest.split(CHECK_MARKS)
            .map(trim_line)
            .filter(|piece| !piece.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        trim_line(rest).to_string()
    };

    Some(DecodedOption {
        option: QuizOption::new(letter, text),
        marked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_latin() {
        let decoded = decode("c)   Ownership  ").unwrap();
        assert_eq!(decoded.option, QuizOption::new(Letter::C, "Ownership"));
        assert!(!decoded.marked);
    }

    #[test]
    fn test_decode_arabic_letter() {
        let decoded = decode("ب) نعم").unwrap();
        assert_eq!(decoded.option.letter, Letter::B);
        assert_eq!(decoded.option.text, "نعم");
    }

    #[test]
    fn test_check_mark_is_stripped() {
        let decoded = decode("b) y ✓").unwrap();
        assert_eq!(decoded.option, QuizOption::new(Letter::B, "y"));
        assert!(decoded.marked);

        let decoded = decode("a) ✔ left").unwrap();
        assert_eq!(decoded.option.text, "left");
        assert!(decoded.marked);

        let decoded = decode("d) in ✓ between").unwrap();
        assert_eq!(decoded.option.text, "in between");
    }

    #[test]
    fn test_bidi_marks_around_text() {
        let decoded = decode("\u{200f}ج) \u{200f}نعم ✓\u{200f}").unwrap();
        assert_eq!(decoded.option, QuizOption::new(Letter::C, "نعم"));
        assert!(decoded.marked);
    }

    #[test]
    fn test_empty_option_text() {
        let decoded = decode("a)").unwrap();
        assert_eq!(decoded.option.text, "");
    }

    #[test]
    fn test_rejects_non_options() {
        assert!(decode("e) nope").is_none());
        assert!(decode("a. nope").is_none());
        assert!(decode("").is_none());
    }
}
