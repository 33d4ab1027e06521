/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Stockfighter Client Prelude
//!
//! Brings the client, its configuration, request and response models and
//! the error types into scope with a single import.
//!
//! ## Usage
//!
//! ```rust
//! use stockfighter_client::prelude::*;
//!
//! let config = Config::with_api_key("my-api-key");
//! let client = Client::new(config).expect("http client");
//! assert!(client.config().api_url().ends_with("/ob/api"));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Stockfighter API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, StockfighterResult};

/// Uniform failure shape of every API answer
pub use crate::model::response::{ApiResponse, Failure, FailureKind, decode_response};

// ============================================================================
// CLIENT AND TRANSPORT
// ============================================================================

/// API client facade
pub use crate::client::Client;

/// Transport seam and its reqwest implementation
pub use crate::model::http::{HttpTransport, Transport, TransportRequest, TransportResponse};

// ============================================================================
// MODELS
// ============================================================================

/// Order submission payload
pub use crate::model::requests::Order;

/// Response payloads
pub use crate::model::responses::{
    AccountOrders, Bid, Fill, Heartbeat, OrderBook, OrderStatus, Quote, Stock, StockListing,
    VenueHeartbeat,
};

/// Order enumerations
pub use crate::presentation::order::{Direction, OrderType};

/// Timestamp codec
pub use crate::model::timestamp::{Timestamp, format_timestamp, parse_timestamp};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for custom transports
pub use reqwest::Method;
