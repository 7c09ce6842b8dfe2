use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::Message;
use tracing::debug;

use crate::error::StoreError;
use crate::models::{QuizDraft, SavedQuiz};
use crate::protocol::{StoreRequest, StoreResponse};

use super::QuizStore;

/// Client for a store server reached over WebSocket.
///
/// Each request opens its own connection.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    url: String,
}

impl RemoteStore {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self, request: &StoreRequest) -> Result<StoreResponse, StoreError> {
        let (ws_stream, _) = tokio_tungstenite::connect_async(self.url.as_str()).await?;
        let (mut ws_sender, mut ws_receiver) = ws_stream.split();

        let json = serde_json::to_string(request)?;
        ws_sender.send(Message::Text(json.into())).await?;

        let response = loop {
            match ws_receiver.next().await {
                Some(Ok(Message::Text(text))) => break serde_json::from_str(&text)?,
                Some(Ok(Message::Close(_))) | None => {
                    return Err(StoreError::UnexpectedResponse(
                        "connection closed before a response".to_string(),
                    ));
                }
                Some(Ok(_)) => continue,
                Some(Err(err)) => return Err(err.into()),
            }
        };

        // The response is already in hand; a failed close changes nothing.
        let _ = ws_sender.close().await;
        debug!(url = %self.url, "store request answered");
        Ok(response)
    }
}

impl QuizStore for RemoteStore {
    async fn save(&self, draft: QuizDraft) -> Result<String, StoreError> {
        match self.request(&StoreRequest::Save { draft }).await? {
            StoreResponse::Saved { id } => Ok(id),
            StoreResponse::Failed { reason } => Err(StoreError::Remote(reason)),
            other => Err(StoreError::UnexpectedResponse(format!("{:?}", other))),
        }
    }

    async fn list(&self) -> Result<Vec<SavedQuiz>, StoreError> {
        match self.request(&StoreRequest::List).await? {
            StoreResponse::Quizzes { quizzes } => Ok(quizzes),
            StoreResponse::Failed { reason } => Err(StoreError::Remote(reason)),
            other => Err(StoreError::UnexpectedResponse(format!("{:?}", other))),
        }
    }
}
