use crate::models::Letter;

/// Tracks the correct answer of the question being assembled.
///
/// Inline check marks and `Answer:` directives both write the same slot;
/// whichever comes later in the input wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerResolver {
    resolved: Option<Letter>,
}

impl AnswerResolver {
    pub fn mark_inline(&mut self, letter: Letter) {
        self.resolved = Some(letter);
    }

    /// A directive naming no recognizable letter leaves the answer as it was.
    pub fn directive(&mut self, letter: Option<Letter>) {
        if let Some(letter) = letter {
            self.resolved = Some(letter);
        }
    }

    pub fn resolve(self) -> Option<Letter> {
        self.resolved
    }
}
