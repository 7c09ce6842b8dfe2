use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::models::{QuizDraft, SavedQuiz};

use super::{QuizStore, new_id, newest_first};

/// A directory of `<id>.json` documents.
#[derive(Debug, Clone)]
pub struct LocalStore {
    directory: PathBuf,
}

impl LocalStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    async fn read_quiz(path: &Path) -> Result<SavedQuiz, StoreError> {
        let content = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl QuizStore for LocalStore {
    async fn save(&self, draft: QuizDraft) -> Result<String, StoreError> {
        let id = new_id();
        let saved = draft.into_saved(id.clone(), Utc::now());
        let json = serde_json::to_string_pretty(&saved)?;

        fs::create_dir_all(&self.directory).await?;
        let path = self.directory.join(format!("{}.json", id));
        fs::write(&path, json).await?;
        debug!(path = %path.display(), "saved quiz");

        Ok(id)
    }

    async fn list(&self) -> Result<Vec<SavedQuiz>, StoreError> {
        let mut entries = match fs::read_dir(&self.directory).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut quizzes = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match Self::read_quiz(&path).await {
                Ok(quiz) => quizzes.push(quiz),
                Err(err) => warn!(path = %path.display(), error = %err, "skipping unreadable quiz"),
            }
        }

        newest_first(&mut quizzes);
        Ok(quizzes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[tokio::test]
    async fn test_save_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("cache"));

        let questions = parse("1. Q\na) x\nAnswer: a");
        let id = store
            .save(QuizDraft::new("Basics", questions.clone()))
            .await
            .unwrap();

        assert!(store.directory().join(format!("{}.json", id)).exists());

        let quizzes = store.list().await.unwrap();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].id, id);
        assert_eq!(quizzes[0].title, "Basics");
        assert_eq!(quizzes[0].questions, questions);
    }

    #[tokio::test]
    async fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("never-created"));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_documents_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        store
            .save(QuizDraft::new("Good", parse("1. Q\na) x")))
            .await
            .unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let quizzes = store.list().await.unwrap();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].title, "Good");
    }
}
