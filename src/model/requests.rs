/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::DEFAULT_ORDER_PRICE;
use crate::error::AppError;
use crate::presentation::order::{Direction, OrderType};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Order submission payload
///
/// Serializes to the body of `POST /venues/{venue}/stocks/{stock}/orders`:
/// `{account, venue, stock, qty, direction, orderType, price}`.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Trading account placing the order
    pub account: String,
    /// Venue the order is sent to
    pub venue: String,
    /// Stock symbol
    pub stock: String,
    /// Number of shares
    #[serde(rename = "qty")]
    pub quantity: u64,
    /// Buy or sell
    pub direction: Direction,
    /// Execution style
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
    /// Limit price in cents; 0 when not applicable
    pub price: u64,
}

impl Order {
    /// Creates an order from already validated enumerations
    ///
    /// A missing `price` is sent as `0`, which the exchange ignores for market orders.
    pub fn new(
        account: impl Into<String>,
        venue: impl Into<String>,
        stock: impl Into<String>,
        quantity: u64,
        direction: Direction,
        order_type: OrderType,
        price: Option<u64>,
    ) -> Self {
        Self {
            account: account.into(),
            venue: venue.into(),
            stock: stock.into(),
            quantity,
            direction,
            order_type,
            price: price.unwrap_or(DEFAULT_ORDER_PRICE),
        }
    }

    /// Creates an order from wire tokens such as `"buy"` and `"fill-or-kill"`
    ///
    /// # Errors
    /// [`AppError::InvalidOrderParameters`] if `direction` or `order_type` is
    /// not one of the exchange's tokens. Quantity and price are not range checked.
    pub fn parse(
        account: impl Into<String>,
        venue: impl Into<String>,
        stock: impl Into<String>,
        quantity: u64,
        direction: &str,
        order_type: &str,
        price: Option<u64>,
    ) -> Result<Self, AppError> {
        let direction: Direction = direction.parse()?;
        let order_type: OrderType = order_type.parse()?;
        Ok(Self::new(
            account, venue, stock, quantity, direction, order_type, price,
        ))
    }
}
