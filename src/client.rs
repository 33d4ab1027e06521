/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client for the Stockfighter order book API
//!
//! Every operation performs exactly one HTTP round trip and returns an
//! [`ApiResponse`]: callers check `ok()` and then read the payload or the
//! error message. The only `Err` any operation returns is
//! [`AppError::InvalidOrderParameters`], raised by [`Client::place_order`]
//! before anything is sent.
//!
//! # Example
//! ```ignore
//! use stockfighter_client::prelude::*;
//!
//! let client = Client::new(Config::with_api_key("my-key"))?;
//!
//! let book = client.order_book("TESTEX", "FOOBAR").await;
//! match book {
//!     ApiResponse::Success(book) => println!("{} bids", book.bids.len()),
//!     ApiResponse::Failure(failure) => println!("failed: {}", failure.error),
//! }
//!
//! let status = client
//!     .place_order("EXB123456", "TESTEX", "FOOBAR", 100, "buy", "limit", Some(5100))
//!     .await?;
//! ```

use crate::config::Config;
use crate::constants::AUTHORIZATION_HEADER;
use crate::error::AppError;
use crate::model::http::{HttpTransport, Transport, TransportRequest};
use crate::model::requests::Order;
use crate::model::response::{ApiResponse, Failure, decode_response};
use crate::model::responses::{
    AccountOrders, Heartbeat, OrderBook, OrderStatus, Quote, StockListing, VenueHeartbeat,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Stockfighter API client
///
/// Holds an immutable [`Config`] and a [`Transport`]; cloning is cheap and
/// clones share both.
#[derive(Clone)]
pub struct Client {
    config: Arc<Config>,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client talking HTTP through `reqwest`
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use; no request is made here
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client over a custom transport
    pub fn with_transport(config: Config, transport: impl Transport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Checks that the API is up
    ///
    /// `GET /heartbeat`
    pub async fn heartbeat(&self) -> ApiResponse<Heartbeat> {
        self.get("heartbeat", false).await
    }

    /// Checks that a venue is up
    ///
    /// `GET /venues/{venue}/heartbeat`
    pub async fn venue_heartbeat(&self, venue: &str) -> ApiResponse<VenueHeartbeat> {
        self.get(&format!("venues/{venue}/heartbeat"), false).await
    }

    /// Lists the stocks traded on a venue
    ///
    /// `GET /venues/{venue}/stocks`
    pub async fn stocks_in_venue(&self, venue: &str) -> ApiResponse<StockListing> {
        self.get(&format!("venues/{venue}/stocks"), false).await
    }

    /// Gets the order book of a stock
    ///
    /// `GET /venues/{venue}/stocks/{symbol}`
    pub async fn order_book(&self, venue: &str, symbol: &str) -> ApiResponse<OrderBook> {
        self.get(&format!("venues/{venue}/stocks/{symbol}"), false)
            .await
    }

    /// Gets the latest quote of a stock
    ///
    /// `GET /venues/{venue}/stocks/{symbol}/quote`
    pub async fn quote(&self, venue: &str, symbol: &str) -> ApiResponse<Quote> {
        self.get(&format!("venues/{venue}/stocks/{symbol}/quote"), false)
            .await
    }

    /// Places an order given as wire tokens
    ///
    /// # Arguments
    /// * `direction` - `"buy"` or `"sell"`
    /// * `order_type` - `"limit"`, `"market"`, `"fill-or-kill"` or `"immediate-or-cancel"`
    /// * `price` - Limit price in cents; `None` sends 0
    ///
    /// # Returns
    /// * `Ok(ApiResponse<OrderStatus>)` - Whatever the exchange answered
    /// * `Err(AppError::InvalidOrderParameters)` - Unknown direction or order type;
    ///   nothing was sent
    #[allow(clippy::too_many_arguments)]
    pub async fn place_order(
        &self,
        account: &str,
        venue: &str,
        symbol: &str,
        quantity: u64,
        direction: &str,
        order_type: &str,
        price: Option<u64>,
    ) -> Result<ApiResponse<OrderStatus>, AppError> {
        let order = Order::parse(
            account, venue, symbol, quantity, direction, order_type, price,
        )?;
        Ok(self.submit_order(&order).await)
    }

    /// Places an already built order
    ///
    /// `POST /venues/{venue}/stocks/{stock}/orders`
    pub async fn submit_order(&self, order: &Order) -> ApiResponse<OrderStatus> {
        info!(
            "Placing {} {} order for {} {} on {}",
            order.order_type, order.direction, order.quantity, order.stock, order.venue
        );

        let body = match serde_json::to_vec(order) {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to encode order: {}", e);
                return ApiResponse::Failure(Failure::transport(e.to_string()));
            }
        };

        let path = format!("venues/{}/stocks/{}/orders", order.venue, order.stock);
        let request = self
            .authorized(TransportRequest::new(Method::POST, self.url(&path)))
            .with_body(body);
        self.execute(request).await
    }

    /// Gets the state of one order
    ///
    /// `GET /venues/{venue}/stocks/{symbol}/orders/{id}`
    pub async fn order_status(&self, venue: &str, symbol: &str, id: u64) -> ApiResponse<OrderStatus> {
        self.get(&format!("venues/{venue}/stocks/{symbol}/orders/{id}"), true)
            .await
    }

    /// Cancels an order; the answer is the order's final state
    ///
    /// `DELETE /venues/{venue}/stocks/{symbol}/orders/{id}`
    pub async fn cancel_order(&self, venue: &str, symbol: &str, id: u64) -> ApiResponse<OrderStatus> {
        let path = format!("venues/{venue}/stocks/{symbol}/orders/{id}");
        let request = self.authorized(TransportRequest::new(Method::DELETE, self.url(&path)));
        self.execute(request).await
    }

    /// Lists every order of an account on a venue
    ///
    /// `GET /venues/{venue}/accounts/{account}/orders`
    pub async fn account_orders(&self, venue: &str, account: &str) -> ApiResponse<AccountOrders> {
        self.get(&format!("venues/{venue}/accounts/{account}/orders"), true)
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url(), path.trim_start_matches('/'))
    }

    fn authorized(&self, request: TransportRequest) -> TransportRequest {
        request.with_header(AUTHORIZATION_HEADER, self.config.credentials.api_key.as_str())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, authorized: bool) -> ApiResponse<T> {
        let mut request = TransportRequest::new(Method::GET, self.url(path));
        if authorized {
            request = self.authorized(request);
        }
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: TransportRequest) -> ApiResponse<T> {
        debug!("{} {}", request.method, request.url);
        match self.transport.send(request).await {
            Ok(response) => decode_response(response.status, &response.reason, &response.body),
            Err(e) => {
                error!("Request failed before a response was received: {}", e);
                ApiResponse::Failure(Failure::transport(e.to_string()))
            }
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        let config = Config::default();
        let transport = HttpTransport::new(&config).unwrap_or_else(|e| {
            error!("Failed to build configured HTTP client, using defaults: {}", e);
            HttpTransport::from_client(reqwest::Client::new())
        });
        Self::with_transport(config, transport)
    }
}
