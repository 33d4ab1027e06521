/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::timestamp::{self, Timestamp};
use crate::presentation::order::{Direction, OrderType};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Deserializer, Serialize};

/// Answer of `GET /heartbeat`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heartbeat {
    /// Always true on a successful decode
    pub ok: bool,
    /// Usually empty; kept as sent by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Answer of `GET /venues/{venue}/heartbeat`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueHeartbeat {
    /// Always true on a successful decode
    pub ok: bool,
    /// Venue that answered
    pub venue: String,
}

/// A stock traded on a venue
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stock {
    /// Human readable company name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
}

/// Answer of `GET /venues/{venue}/stocks`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockListing {
    /// Always true on a successful decode
    pub ok: bool,
    /// Stocks in the order the venue lists them
    pub symbols: Vec<Stock>,
}

impl StockListing {
    /// Number of listed stocks
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when the venue lists no stocks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// One price level of an order book; used for both sides
#[derive(DebugPretty, DisplaySimple, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bid {
    /// Price in cents
    pub price: u64,
    /// Shares resting at this price
    #[serde(rename = "qty")]
    pub quantity: u64,
    /// True on the bid side, false on the ask side
    #[serde(rename = "isBuy")]
    pub is_buy: bool,
}

/// Answer of `GET /venues/{venue}/stocks/{symbol}`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Always true on a successful decode
    pub ok: bool,
    /// Venue of the book
    pub venue: String,
    /// Stock symbol of the book
    pub symbol: String,
    /// Buy side, best price first; an empty side is sent as `null`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bids: Vec<Bid>,
    /// Sell side, best price first; an empty side is sent as `null`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub asks: Vec<Bid>,
    /// Time of the snapshot
    #[serde(rename = "ts", alias = "timestamp", with = "timestamp")]
    pub timestamp: Timestamp,
}

impl OrderBook {
    /// Highest bid, if any
    pub fn best_bid(&self) -> Option<&Bid> {
        self.bids.iter().max_by_key(|bid| bid.price)
    }

    /// Lowest ask, if any
    pub fn best_ask(&self) -> Option<&Bid> {
        self.asks.iter().min_by_key(|ask| ask.price)
    }
}

/// An execution against an order
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    /// Execution price in cents
    pub price: u64,
    /// Shares executed
    #[serde(rename = "qty")]
    pub quantity: u64,
    /// Time of the execution
    #[serde(rename = "ts", alias = "timestamp", with = "timestamp")]
    pub timestamp: Timestamp,
}

/// State of an order, returned when placing, querying or cancelling it
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatus {
    /// Always true on a successful decode
    pub ok: bool,
    /// Stock symbol
    pub symbol: String,
    /// Venue
    pub venue: String,
    /// Buy or sell
    pub direction: Direction,
    /// Quantity originally requested
    #[serde(rename = "originalQty")]
    pub original_qty: u64,
    /// Quantity still outstanding
    pub qty: u64,
    /// Limit price in cents
    pub price: u64,
    /// Execution style
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
    /// Exchange-assigned order id
    pub id: u64,
    /// Owning account
    pub account: String,
    /// Time the order was received
    #[serde(rename = "ts", alias = "timestamp", with = "timestamp")]
    pub timestamp: Timestamp,
    /// Executions so far, oldest first
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fills: Vec<Fill>,
    /// Sum of all fill quantities
    #[serde(rename = "totalFilled")]
    pub total_filled: u64,
    /// Whether the order still rests on the book
    pub open: bool,
}

/// Answer of `GET /venues/{venue}/stocks/{symbol}/quote`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Always true on a successful decode
    pub ok: bool,
    /// Stock symbol
    pub symbol: String,
    /// Venue
    pub venue: String,
    /// Best bid price, absent when the bid side is empty
    #[serde(default)]
    pub bid: Option<u64>,
    /// Best ask price, absent when the ask side is empty
    #[serde(default)]
    pub ask: Option<u64>,
    /// Shares at the best bid
    #[serde(rename = "bidSize", default)]
    pub bid_size: u64,
    /// Shares at the best ask
    #[serde(rename = "askSize", default)]
    pub ask_size: u64,
    /// Shares on the whole bid side
    #[serde(rename = "bidDepth", default)]
    pub bid_depth: u64,
    /// Shares on the whole ask side
    #[serde(rename = "askDepth", default)]
    pub ask_depth: u64,
    /// Last trade price
    #[serde(default)]
    pub last: Option<u64>,
    /// Last trade size
    #[serde(rename = "lastSize", default)]
    pub last_size: Option<u64>,
    /// Last trade time
    #[serde(rename = "lastTrade", default, with = "timestamp::option")]
    pub last_trade: Option<Timestamp>,
    /// Time the quote was computed
    #[serde(rename = "quoteTime", with = "timestamp")]
    pub quote_time: Timestamp,
}

/// Answer of `GET /venues/{venue}/accounts/{account}/orders`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountOrders {
    /// Always true on a successful decode
    pub ok: bool,
    /// Venue
    pub venue: String,
    /// Every order of the account on this venue, open or closed
    #[serde(default, deserialize_with = "null_as_empty")]
    pub orders: Vec<OrderStatus>,
}

impl AccountOrders {
    /// Orders still resting on the book
    pub fn open_orders(&self) -> impl Iterator<Item = &OrderStatus> {
        self.orders.iter().filter(|order| order.open)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
