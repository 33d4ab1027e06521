use crate::common::{AUTH_HEADER, TEST_API_KEY, mock_exchange, order_status_body};
use mockito::Matcher;
use serde_json::json;
use stockfighter_client::prelude::*;

#[tokio::test]
async fn place_order_sends_payload_and_decodes_status() {
    let (mut server, client) = mock_exchange().await;
    let mock = server
        .mock("POST", "/ob/api/venues/TESTEX/stocks/FOOBAR/orders")
        .match_header(AUTH_HEADER, TEST_API_KEY)
        .match_body(Matcher::Json(json!({
            "account": "EXB123456",
            "venue": "TESTEX",
            "stock": "FOOBAR",
            "qty": 50,
            "direction": "buy",
            "orderType": "limit",
            "price": 5100
        })))
        .with_status(200)
        .with_body(order_status_body(50, 100, 80, true))
        .create_async()
        .await;

    let response = client
        .place_order("EXB123456", "TESTEX", "FOOBAR", 50, "buy", "limit", Some(5100))
        .await
        .expect("parameters are valid");

    let status = response.into_result().expect("order should decode");
    assert_eq!(status.qty, 50);
    assert_eq!(status.original_qty, 100);
    assert_eq!(status.total_filled, 80);
    assert!(status.open);
    assert_eq!(status.order_type, OrderType::Limit);
    assert_eq!(
        serde_json::to_value(&status).unwrap()["orderType"],
        "limit"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn market_order_without_price_sends_zero() {
    let (mut server, client) = mock_exchange().await;
    let mock = server
        .mock("POST", "/ob/api/venues/TESTEX/stocks/FOOBAR/orders")
        .match_body(Matcher::PartialJson(json!({
            "orderType": "market",
            "direction": "sell",
            "price": 0
        })))
        .with_status(200)
        .with_body(order_status_body(0, 10, 10, false))
        .create_async()
        .await;

    let response = client
        .place_order("EXB123456", "TESTEX", "FOOBAR", 10, "sell", "market", None)
        .await
        .unwrap();
    assert!(response.ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn hyphenated_order_types_go_out_verbatim() {
    let (mut server, client) = mock_exchange().await;
    let mock = server
        .mock("POST", "/ob/api/venues/TESTEX/stocks/FOOBAR/orders")
        .match_body(Matcher::PartialJson(json!({"orderType": "immediate-or-cancel"})))
        .with_status(200)
        .with_body(r#"{"ok": false, "error": "nothing to match against"}"#)
        .create_async()
        .await;

    let order = Order::new(
        "EXB123456",
        "TESTEX",
        "FOOBAR",
        5,
        Direction::Buy,
        OrderType::ImmediateOrCancel,
        Some(1),
    );
    let response = client.submit_order(&order).await;
    assert_eq!(response.error(), Some("nothing to match against"));
    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_parameters_fail_before_any_request() {
    let (mut server, client) = mock_exchange().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client
        .place_order("EXB123456", "TESTEX", "FOOBAR", 50, "hold", "limit", Some(1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidOrderParameters(_)));

    let err = client
        .place_order("EXB123456", "TESTEX", "FOOBAR", 50, "buy", "FILL_OR_KILL", Some(1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidOrderParameters(_)));

    mock.assert_async().await;
}

#[tokio::test]
async fn rejected_order_is_server_reported() {
    let (mut server, client) = mock_exchange().await;
    let mock = server
        .mock("POST", "/ob/api/venues/TESTEX/stocks/FOOBAR/orders")
        .with_status(200)
        .with_body(r#"{"ok": false, "error": "Account EXB123456 is not authorized to trade on TESTEX"}"#)
        .create_async()
        .await;

    let response = client
        .place_order("EXB123456", "TESTEX", "FOOBAR", 50, "buy", "limit", Some(5100))
        .await
        .unwrap();
    let failure = response.failure().unwrap();
    assert_eq!(failure.kind, FailureKind::ServerReported);
    assert_eq!(
        failure.error,
        "Account EXB123456 is not authorized to trade on TESTEX"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_order_uses_status_text() {
    let (mut server, client) = mock_exchange().await;
    let mock = server
        .mock("POST", "/ob/api/venues/TESTEX/stocks/FOOBAR/orders")
        .with_status(401)
        .with_body(r#"{"ok": false, "error": "bad api key"}"#)
        .create_async()
        .await;

    let response = client
        .place_order("EXB123456", "TESTEX", "FOOBAR", 50, "buy", "limit", Some(5100))
        .await
        .unwrap();
    assert_eq!(response.error(), Some("Unauthorized"));
    assert_eq!(response.failure().unwrap().kind, FailureKind::Transport);
    mock.assert_async().await;
}
