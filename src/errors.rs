use astra::Response;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad parameters) or the data store underneath.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    /// The store could not be opened or a query could not be run.
    DataUnavailable(String),
    /// The store was reachable but is missing an expected table or column.
    SchemaMismatch(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DataUnavailable(msg) => write!(f, "Data Unavailable: {msg}"),
            ServerError::SchemaMismatch(msg) => write!(f, "Schema Mismatch: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

/// Sort a rusqlite failure into the store taxonomy. SQLite reports a
/// missing relation or column only through its message text.
pub fn classify_sqlite(e: rusqlite::Error) -> ServerError {
    let msg = e.to_string();
    if msg.contains("no such table") || msg.contains("no such column") {
        ServerError::SchemaMismatch(msg)
    } else {
        ServerError::DataUnavailable(msg)
    }
}
