/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::fmt;
use std::io;

/// Main error type for the library
///
/// Only [`AppError::InvalidOrderParameters`] is returned by the client facade;
/// every other failure of a request is folded into a failed
/// [`ApiResponse`](crate::model::response::ApiResponse).
#[derive(Debug)]
pub enum AppError {
    /// An order direction or order type outside its allowed set
    InvalidOrderParameters(String),
    /// A timestamp that does not follow the offset date-time grammar
    MalformedTimestamp(String),
    /// Error raised by the HTTP client
    Network(reqwest::Error),
    /// JSON encoding or decoding error
    Json(serde_json::Error),
    /// I/O error
    Io(io::Error),
    /// Invalid configuration value
    InvalidConfig(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidOrderParameters(msg) => write!(f, "invalid order parameters: {msg}"),
            AppError::MalformedTimestamp(value) => write!(f, "malformed timestamp: {value}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

/// Convenience result alias used across the crate
pub type StockfighterResult<T> = Result<T, AppError>;
