/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Stockfighter Client
//!
//! A client for the Stockfighter exchange simulation REST API.
//!
//! * heartbeat checks for the API and for a venue
//! * stock listings and order book snapshots
//! * order placement, status, cancellation and per-account listing
//!
//! Every call answers with an [`ApiResponse`](model::response::ApiResponse):
//! either the endpoint payload or a [`Failure`](model::response::Failure)
//! carrying the exchange's own message (`{"ok": false, "error": ...}`) or the
//! HTTP status text. Invalid order parameters are the only error returned as
//! `Err`, before any request is made.
//!
//! ```ignore
//! use stockfighter_client::prelude::*;
//!
//! setup_logger();
//! let client = Client::new(Config::new())?;
//! if client.heartbeat().await.ok() {
//!     let stocks = client.stocks_in_venue("TESTEX").await;
//! }
//! ```

/// API client facade
pub mod client;
/// Client configuration
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models, transport seam and response decoding
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Order enumerations
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
pub fn version() -> &'static str {
    VERSION
}
