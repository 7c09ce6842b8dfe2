mod messages;

pub use messages::{DEFAULT_PORT, StoreRequest, StoreResponse};
