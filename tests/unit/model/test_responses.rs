use chrono::{TimeZone, Timelike, Utc};
use serde_json::json;
use stockfighter_client::model::responses::*;
use stockfighter_client::model::timestamp::{format_timestamp, parse_timestamp};
use stockfighter_client::presentation::order::{Direction, OrderType};

fn order_status_json() -> serde_json::Value {
    json!({
        "ok": true,
        "symbol": "FOOBAR",
        "venue": "TESTEX",
        "direction": "buy",
        "originalQty": 100,
        "qty": 50,
        "price": 5100,
        "orderType": "limit",
        "id": 12345,
        "account": "EXB123456",
        "ts": "2015-07-05T22:16:18+00:00",
        "fills": [
            {"price": 5050, "qty": 50, "ts": "2015-07-05T22:16:18+00:00"},
            {"price": 5100, "qty": 30, "ts": "2015-07-05T22:16:19.250Z"}
        ],
        "totalFilled": 80,
        "open": true
    })
}

#[test]
fn stock_listing_keeps_order() {
    let listing: StockListing = serde_json::from_value(json!({
        "ok": true,
        "symbols": [
            {"name": "name1", "symbol": "symbol1"},
            {"name": "name2", "symbol": "symbol2"}
        ]
    }))
    .unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(
        listing.symbols,
        vec![
            Stock {
                name: "name1".into(),
                symbol: "symbol1".into()
            },
            Stock {
                name: "name2".into(),
                symbol: "symbol2".into()
            },
        ]
    );
}

#[test]
fn order_book_sides_and_timestamp() {
    let raw_ts = "2015-12-04T09:02:16.680986205Z";
    let book: OrderBook = serde_json::from_value(json!({
        "ok": true,
        "venue": "TESTEX",
        "symbol": "FOO",
        "bids": [
            {"price": 10, "qty": 5, "isBuy": true},
            {"price": 20, "qty": 10, "isBuy": true}
        ],
        "asks": [
            {"price": 1000, "qty": 500, "isBuy": false},
            {"price": 200, "qty": 100, "isBuy": false}
        ],
        "ts": raw_ts
    }))
    .unwrap();

    assert_eq!(book.venue, "TESTEX");
    assert_eq!(book.symbol, "FOO");
    assert_eq!(
        book.bids,
        vec![
            Bid { price: 10, quantity: 5, is_buy: true },
            Bid { price: 20, quantity: 10, is_buy: true },
        ]
    );
    assert_eq!(
        book.asks,
        vec![
            Bid { price: 1000, quantity: 500, is_buy: false },
            Bid { price: 200, quantity: 100, is_buy: false },
        ]
    );

    let expected = Utc.with_ymd_and_hms(2015, 12, 4, 9, 2, 16).unwrap();
    assert_eq!(book.timestamp.timestamp(), expected.timestamp());
    assert_eq!(book.timestamp.nanosecond(), 680_986_205);
    assert_eq!(format_timestamp(&book.timestamp), raw_ts);

    assert_eq!(book.best_bid().unwrap().price, 20);
    assert_eq!(book.best_ask().unwrap().price, 200);
}

#[test]
fn order_book_null_sides_are_empty() {
    let book: OrderBook = serde_json::from_value(json!({
        "ok": true,
        "venue": "TESTEX",
        "symbol": "FOO",
        "bids": null,
        "asks": null,
        "ts": "2015-12-04T09:02:16Z"
    }))
    .unwrap();
    assert!(book.bids.is_empty());
    assert!(book.asks.is_empty());
    assert!(book.best_bid().is_none());
}

#[test]
fn order_book_accepts_timestamp_alias() {
    let book: OrderBook = serde_json::from_value(json!({
        "ok": true,
        "venue": "TESTEX",
        "symbol": "FOO",
        "bids": [],
        "asks": [],
        "timestamp": "2015-12-04T09:02:16+01:00"
    }))
    .unwrap();
    assert_eq!(book.timestamp, parse_timestamp("2015-12-04T08:02:16Z").unwrap());
}

#[test]
fn order_status_fields() {
    let status: OrderStatus = serde_json::from_value(order_status_json()).unwrap();

    assert_eq!(status.direction, Direction::Buy);
    assert_eq!(status.order_type, OrderType::Limit);
    assert_eq!(status.original_qty, 100);
    assert_eq!(status.qty, 50);
    assert_eq!(status.total_filled, 80);
    assert!(status.open);
    assert_eq!(status.id, 12345);
    assert_eq!(status.fills.len(), 2);
    assert_eq!(status.fills[1].quantity, 30);
    assert_eq!(status.fills[1].timestamp.nanosecond(), 250_000_000);

    let back = serde_json::to_value(&status).unwrap();
    assert_eq!(back["orderType"], "limit");
    assert_eq!(back["originalQty"], 100);
    assert_eq!(back["totalFilled"], 80);
}

#[test]
fn order_status_with_unknown_order_type_fails() {
    let mut value = order_status_json();
    value["orderType"] = json!("stop");
    assert!(serde_json::from_value::<OrderStatus>(value).is_err());
}

#[test]
fn quote_with_empty_book() {
    let quote: Quote = serde_json::from_value(json!({
        "ok": true,
        "symbol": "FAC",
        "venue": "OGEX",
        "bidSize": 0,
        "askSize": 0,
        "bidDepth": 0,
        "askDepth": 0,
        "quoteTime": "2015-07-13T05:38:17.33640392Z"
    }))
    .unwrap();

    assert_eq!(quote.bid, None);
    assert_eq!(quote.ask, None);
    assert_eq!(quote.last, None);
    assert_eq!(quote.last_trade, None);
    assert_eq!(quote.quote_time.nanosecond(), 336_403_920);
}

#[test]
fn quote_with_last_trade() {
    let quote: Quote = serde_json::from_value(json!({
        "ok": true,
        "symbol": "FAC",
        "venue": "OGEX",
        "bid": 5100,
        "ask": 5125,
        "bidSize": 392,
        "askSize": 711,
        "bidDepth": 2748,
        "askDepth": 2237,
        "last": 5125,
        "lastSize": 52,
        "lastTrade": "2015-07-13T05:38:17.33640392Z",
        "quoteTime": "2015-07-13T05:38:17.33640392Z"
    }))
    .unwrap();

    assert_eq!(quote.bid, Some(5100));
    assert_eq!(quote.last_size, Some(52));
    assert_eq!(quote.last_trade, Some(quote.quote_time));
}

#[test]
fn account_orders_open_filter() {
    let mut closed = order_status_json();
    closed["open"] = json!(false);
    closed["id"] = json!(12346);

    let orders: AccountOrders = serde_json::from_value(json!({
        "ok": true,
        "venue": "TESTEX",
        "orders": [order_status_json(), closed]
    }))
    .unwrap();

    assert_eq!(orders.orders.len(), 2);
    let open: Vec<u64> = orders.open_orders().map(|order| order.id).collect();
    assert_eq!(open, vec![12345]);
}

#[test]
fn venue_heartbeat_display() {
    let heartbeat: VenueHeartbeat =
        serde_json::from_value(json!({"ok": true, "venue": "TESTEX"})).unwrap();
    assert_eq!(heartbeat.venue, "TESTEX");
    let display = format!("{}", heartbeat);
    assert!(display.contains("TESTEX"));
}
