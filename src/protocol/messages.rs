//! Protocol messages for the remote quiz store.
//!
//! All messages are serialized as JSON text frames over WebSocket, one
//! response per request.

use serde::{Deserialize, Serialize};

use crate::models::{QuizDraft, SavedQuiz};

/// Default store server port.
pub const DEFAULT_PORT: u16 = 8712;

/// Messages sent from a client to the store server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreRequest {
    /// Persist a new quiz.
    Save { draft: QuizDraft },

    /// Fetch every stored quiz, newest first.
    List,
}

/// Messages sent from the store server to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreResponse {
    /// The quiz was stored under `id`.
    Saved { id: String },

    /// Result of a `List` request.
    Quizzes { quizzes: Vec<SavedQuiz> },

    /// The request could not be served.
    Failed { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_message_serialization() {
        let msg = StoreRequest::List;
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"type":"List"}"#);

        let msg = StoreRequest::Save {
            draft: QuizDraft::new("Planets", parse("1. Q\na) x\nAnswer: a")),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"Save\""));
        assert!(json.contains("\"title\":\"Planets\""));
        assert_eq!(serde_json::from_str::<StoreRequest>(&json).unwrap(), msg);

        let msg = StoreResponse::Saved { id: "abc".to_string() };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"Saved\""));
    }
}
