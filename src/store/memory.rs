use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::{QuizDraft, SavedQuiz};

use super::{QuizStore, new_id, newest_first};

/// A store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    quizzes: Mutex<Vec<SavedQuiz>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuizStore for MemoryStore {
    async fn save(&self, draft: QuizDraft) -> Result<String, StoreError> {
        let id = new_id();
        let saved = draft.into_saved(id.clone(), Utc::now());
        self.quizzes.lock().await.push(saved);
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<SavedQuiz>, StoreError> {
        let mut quizzes = self.quizzes.lock().await.clone();
        // Later saves first when timestamps tie.
        quizzes.reverse();
        newest_first(&mut quizzes);
        Ok(quizzes)
    }
}
