//! WebSocket server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use crate::protocol::{StoreRequest, StoreResponse};
use crate::store::QuizStore;

/// Bind `0.0.0.0:port` and serve `store` until the process ends.
pub async fn run<S>(port: u16, store: S) -> std::io::Result<()>
where
    S: QuizStore + 'static,
{
    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "store server listening");
    serve(listener, Arc::new(store)).await
}

/// Accept connections on an already bound listener.
pub async fn serve<S>(listener: TcpListener, store: Arc<S>) -> std::io::Result<()>
where
    S: QuizStore + 'static,
{
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let store = Arc::clone(&store);
                tokio::spawn(handle_connection(stream, addr, store));
            }
            Err(e) => {
                warn!(error = %e, "failed to accept connection");
            }
        }
    }
}

/// Handle a single WebSocket connection.
async fn handle_connection<S: QuizStore>(stream: TcpStream, addr: SocketAddr, store: Arc<S>) {
    let ws_stream = match tokio_tungstenite::accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            warn!(%addr, error = %e, "WebSocket handshake failed");
            return;
        }
    };
    debug!(%addr, "client connected");

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    while let Some(msg) = ws_receiver.next().await {
        let text = match msg {
            Ok(Message::Text(text)) => text.to_string(),
            Ok(Message::Close(_)) => break,
            Err(_) => break,
            _ => continue,
        };

        let response = match serde_json::from_str::<StoreRequest>(&text) {
            Ok(request) => handle_request(request, store.as_ref()).await,
            Err(e) => StoreResponse::Failed {
                reason: format!("Malformed request: {}", e),
            },
        };

        let json = match serde_json::to_string(&response) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to encode response");
                break;
            }
        };
        if ws_sender.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }

    debug!(%addr, "client disconnected");
}

async fn handle_request<S: QuizStore>(request: StoreRequest, store: &S) -> StoreResponse {
    let result = match request {
        StoreRequest::Save { draft } => store.save(draft).await.map(|id| {
            info!(%id, "quiz saved");
            StoreResponse::Saved { id }
        }),
        StoreRequest::List => store
            .list()
            .await
            .map(|quizzes| StoreResponse::Quizzes { quizzes }),
    };

    result.unwrap_or_else(|e| {
        warn!(error = %e, "store request failed");
        StoreResponse::Failed {
            reason: e.to_string(),
        }
    })
}
