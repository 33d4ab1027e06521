/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Success/failure discrimination for exchange answers
//!
//! Every endpoint answers either with its own payload or with
//! `{"ok": false, "error": "..."}`. [`decode_response`] folds the HTTP status
//! and body into an [`ApiResponse`], so callers always check
//! [`ApiResponse::ok`] and then read either the payload or
//! [`ApiResponse::error`].

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, warn};

/// HTTP status the exchange uses for every answer it considers well formed
pub const STATUS_OK: u16 = 200;

/// Where a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// HTTP 200 with `ok: false`; the server's message is kept verbatim
    ServerReported,
    /// Non-200 status, undecodable body, or no response at all; the message is
    /// the HTTP status reason text (or the transport error) and the body is dropped
    Transport,
}

/// A failed answer; carries no endpoint-specific fields
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Origin of the failure
    pub kind: FailureKind,
    /// Human readable message
    pub error: String,
}

impl Failure {
    /// Business failure reported by the exchange
    pub fn server_reported(error: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::ServerReported,
            error: error.into(),
        }
    }

    /// Failure synthesized from the transport
    pub fn transport(error: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            error: error.into(),
        }
    }

    /// Always false; mirrors the `ok` flag of the wire format
    pub fn ok(&self) -> bool {
        false
    }
}

impl std::error::Error for Failure {}

/// Result of one exchange call: the endpoint payload or a [`Failure`]
#[derive(Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// Decoded payload of a successful call
    Success(T),
    /// Any failure other than invalid caller input
    Failure(Failure),
}

impl<T> ApiResponse<T> {
    /// Same as the `ok` flag of the wire format
    pub fn ok(&self) -> bool {
        self.is_success()
    }

    /// True for [`ApiResponse::Success`]
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// Failure message; `None` on success
    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(failure) => Some(&failure.error),
        }
    }

    /// Payload, if the call succeeded
    pub fn success(&self) -> Option<&T> {
        match self {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Failure(_) => None,
        }
    }

    /// Failure, if the call failed
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(failure) => Some(failure),
        }
    }

    /// Converts into a standard `Result`
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            ApiResponse::Success(value) => Ok(value),
            ApiResponse::Failure(failure) => Err(failure),
        }
    }

    /// Maps the payload, leaving a failure untouched
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            ApiResponse::Success(value) => ApiResponse::Success(f(value)),
            ApiResponse::Failure(failure) => ApiResponse::Failure(failure),
        }
    }
}

impl<T> From<ApiResponse<T>> for Result<T, Failure> {
    fn from(response: ApiResponse<T>) -> Self {
        response.into_result()
    }
}

impl<T: fmt::Debug> fmt::Debug for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiResponse::Success(value) => f.debug_tuple("Success").field(value).finish(),
            ApiResponse::Failure(failure) => f
                .debug_struct("Failure")
                .field("kind", &failure.kind)
                .field("error", &failure.error)
                .finish(),
        }
    }
}

/// The part every answer shares
#[derive(Debug, Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Decodes one HTTP answer against the schema `T` expected for the endpoint
///
/// * non-200 status: [`FailureKind::Transport`] with `reason`, body ignored
/// * 200 with a body that is not `{ok, ...}` JSON: [`FailureKind::Transport`] with `reason`
/// * 200 with `ok: false`: [`FailureKind::ServerReported`] with the server's `error`
/// * 200 with `ok: true` that does not fit `T`: [`FailureKind::Transport`] with `reason`
/// * otherwise the decoded `T`
pub fn decode_response<T: DeserializeOwned>(status: u16, reason: &str, body: &[u8]) -> ApiResponse<T> {
    if status != STATUS_OK {
        error!("Request failed with status {} {}", status, reason);
        return ApiResponse::Failure(Failure::transport(reason));
    }

    let envelope: Envelope = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!("Undecodable response body: {}", e);
            return ApiResponse::Failure(Failure::transport(reason));
        }
    };

    if !envelope.ok {
        let message = envelope.error.unwrap_or_default();
        warn!("Exchange reported failure: {}", message);
        return ApiResponse::Failure(Failure::server_reported(message));
    }

    match serde_json::from_slice::<T>(body) {
        Ok(value) => ApiResponse::Success(value),
        Err(e) => {
            error!(
                "Response does not match {}: {}",
                std::any::type_name::<T>(),
                e
            );
            ApiResponse::Failure(Failure::transport(reason))
        }
    }
}
