/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Order direction (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Buy side, rests on the bid
    #[default]
    Buy,
    /// Sell side, rests on the ask
    Sell,
}

/// Wire token for every direction
const DIRECTION_TOKENS: [(Direction, &str); 2] = [(Direction::Buy, "buy"), (Direction::Sell, "sell")];

impl Direction {
    /// Exact string the exchange expects
    pub fn as_str(&self) -> &'static str {
        DIRECTION_TOKENS
            .iter()
            .find(|(direction, _)| direction == self)
            .map(|(_, token)| *token)
            .unwrap_or("buy")
    }

    /// All directions in wire order
    pub fn all() -> [Direction; 2] {
        DIRECTION_TOKENS.map(|(direction, _)| direction)
    }
}

impl FromStr for Direction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DIRECTION_TOKENS
            .iter()
            .find(|(_, token)| *token == s)
            .map(|(direction, _)| *direction)
            .ok_or_else(|| {
                AppError::InvalidOrderParameters(format!(
                    "{s:?} is not a valid direction, expected one of: buy, sell"
                ))
            })
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderType {
    /// Limit order - rests on the book at the given price
    #[default]
    Limit,
    /// Market order - executes against whatever is on the book, price ignored
    Market,
    /// Fill-or-kill - executes completely and immediately or not at all
    FillOrKill,
    /// Immediate-or-cancel - executes what it can immediately, the rest is cancelled
    ImmediateOrCancel,
}

/// Wire token for every order type; these are hyphenated, not identifiers
const ORDER_TYPE_TOKENS: [(OrderType, &str); 4] = [
    (OrderType::Limit, "limit"),
    (OrderType::Market, "market"),
    (OrderType::FillOrKill, "fill-or-kill"),
    (OrderType::ImmediateOrCancel, "immediate-or-cancel"),
];

impl OrderType {
    /// Exact string the exchange expects
    pub fn as_str(&self) -> &'static str {
        ORDER_TYPE_TOKENS
            .iter()
            .find(|(order_type, _)| order_type == self)
            .map(|(_, token)| *token)
            .unwrap_or("limit")
    }

    /// All order types in wire order
    pub fn all() -> [OrderType; 4] {
        ORDER_TYPE_TOKENS.map(|(order_type, _)| order_type)
    }
}

impl FromStr for OrderType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ORDER_TYPE_TOKENS
            .iter()
            .find(|(_, token)| *token == s)
            .map(|(order_type, _)| *order_type)
            .ok_or_else(|| {
                AppError::InvalidOrderParameters(format!(
                    "{s:?} is not a valid order type, expected one of: \
                     limit, market, fill-or-kill, immediate-or-cancel"
                ))
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for OrderType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
