use stockfighter_client::error::AppError;
use stockfighter_client::presentation::order::{Direction, OrderType};

#[test]
fn test_direction_wire_tokens() {
    assert_eq!(Direction::Buy.as_str(), "buy");
    assert_eq!(Direction::Sell.as_str(), "sell");
    assert_eq!("buy".parse::<Direction>().unwrap(), Direction::Buy);
    assert_eq!("sell".parse::<Direction>().unwrap(), Direction::Sell);
}

#[test]
fn test_order_type_wire_tokens() {
    assert_eq!(OrderType::Limit.as_str(), "limit");
    assert_eq!(OrderType::Market.as_str(), "market");
    assert_eq!(OrderType::FillOrKill.as_str(), "fill-or-kill");
    assert_eq!(OrderType::ImmediateOrCancel.as_str(), "immediate-or-cancel");
}

#[test]
fn test_order_type_serialization_uses_hyphens() {
    assert_eq!(
        serde_json::to_string(&OrderType::FillOrKill).unwrap(),
        "\"fill-or-kill\""
    );
    assert_eq!(
        serde_json::to_string(&OrderType::ImmediateOrCancel).unwrap(),
        "\"immediate-or-cancel\""
    );
    let parsed: OrderType = serde_json::from_str("\"immediate-or-cancel\"").unwrap();
    assert_eq!(parsed, OrderType::ImmediateOrCancel);
}

#[test]
fn test_unknown_tokens_are_invalid_order_parameters() {
    match "hold".parse::<Direction>() {
        Err(AppError::InvalidOrderParameters(msg)) => assert!(msg.contains("hold")),
        other => panic!("Unexpected result: {:?}", other),
    }
    match "stop".parse::<OrderType>() {
        Err(AppError::InvalidOrderParameters(msg)) => assert!(msg.contains("stop")),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_deserializing_unknown_token_fails() {
    assert!(serde_json::from_str::<OrderType>("\"stop-limit\"").is_err());
    assert!(serde_json::from_str::<Direction>("\"BUY\"").is_err());
}

#[test]
fn test_display_matches_wire_token() {
    assert_eq!(format!("{}", OrderType::FillOrKill), "fill-or-kill");
    assert_eq!(format!("{}", Direction::Sell), "sell");
}
