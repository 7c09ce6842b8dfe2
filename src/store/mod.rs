//! Quiz persistence.
//!
//! Parsing never depends on a store; a failed save leaves the caller's
//! quiz set untouched.

mod local;
mod memory;
mod remote;

use std::future::Future;

use tracing::debug;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::{QuizDraft, SavedQuiz};

pub use local::LocalStore;
pub use memory::MemoryStore;
pub use remote::RemoteStore;

/// Somewhere quizzes can be saved to and listed from.
pub trait QuizStore: Send + Sync {
    /// Stores a draft and returns the id it was given.
    fn save(&self, draft: QuizDraft) -> impl Future<Output = Result<String, StoreError>> + Send;

    /// Every stored quiz, newest first.
    fn list(&self) -> impl Future<Output = Result<Vec<SavedQuiz>, StoreError>> + Send;
}

/// The store selected by configuration.
#[derive(Debug)]
pub enum StoreBackend {
    Local(LocalStore),
    Remote(RemoteStore),
}

impl StoreBackend {
    pub fn from_config(config: &StoreConfig) -> Self {
        match &config.remote {
            Some(url) => {
                let store = RemoteStore::new(url.clone());
                debug!(url = store.url(), "using remote store");
                Self::Remote(store)
            }
            None => {
                let store = LocalStore::new(config.directory.clone());
                debug!(directory = %store.directory().display(), "using local store");
                Self::Local(store)
            }
        }
    }
}

impl QuizStore for StoreBackend {
    async fn save(&self, draft: QuizDraft) -> Result<String, StoreError> {
        match self {
            Self::Local(store) => store.save(draft).await,
            Self::Remote(store) => store.save(draft).await,
        }
    }

    async fn list(&self) -> Result<Vec<SavedQuiz>, StoreError> {
        match self {
            Self::Local(store) => store.list().await,
            Self::Remote(store) => store.list().await,
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn newest_first(quizzes: &mut [SavedQuiz]) {
    quizzes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
