//! Quiz store server module.
//!
//! Serves any [`QuizStore`](crate::store::QuizStore) to remote clients over
//! WebSocket.

mod server;

pub use server::{run, serve};
