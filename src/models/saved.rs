use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::QuizSet;

/// A quiz that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    pub title: String,
    /// Seconds allowed for a review session, if limited.
    #[serde(default)]
    pub time_limit: Option<u32>,
    pub questions: QuizSet,
}

impl QuizDraft {
    pub fn new(title: impl Into<String>, questions: QuizSet) -> Self {
        Self {
            title: title.into(),
            time_limit: None,
            questions,
        }
    }

    pub fn with_time_limit(mut self, seconds: Option<u32>) -> Self {
        self.time_limit = seconds;
        self
    }

    /// Stamps the draft with an id and creation time.
    pub fn into_saved(self, id: String, created_at: DateTime<Utc>) -> SavedQuiz {
        SavedQuiz {
            id,
            title: self.title,
            time_limit: self.time_limit,
            created_at,
            questions: self.questions,
        }
    }
}

/// A quiz as held by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub time_limit: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub questions: QuizSet,
}
