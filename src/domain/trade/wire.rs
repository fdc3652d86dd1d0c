//! Wire types for trade requests and responses (REST).

use crate::shared::{Side, TradeStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST response for a single trade.
///
/// `timestamp` stays a string here — the backend emits naive ISO-8601, which
/// the conversion layer parses leniently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeResponse {
    pub id: String,
    pub symbol: String,
    pub side: Side,
    pub price: Decimal,
    pub quantity: Decimal,
    pub timestamp: String,
    pub status: TradeStatus,
}

/// REST response for the paginated trades list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradesPageResponse {
    pub items: Vec<TradeResponse>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// Body for `POST /api/trades`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TradeDraft {
    pub symbol: String,
    pub side: Side,
    pub price: Decimal,
    pub quantity: Decimal,
}

/// Body for `PUT /api/trades/{id}` — partial update, absent fields untouched.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TradeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trades_page_total_pages_rename() {
        let json = r#"{"items":[],"total":42,"page":1,"limit":10,"totalPages":5}"#;
        let page: TradesPageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 42);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn test_trade_response_accepts_float_amounts() {
        let json = r#"{
            "id": "t-1",
            "symbol": "AAPL",
            "side": "buy",
            "price": 187.25,
            "quantity": 10.5,
            "timestamp": "2025-08-20T14:30:00.123456",
            "status": "pending"
        }"#;
        let trade: TradeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(trade.price.to_string(), "187.25");
        assert_eq!(trade.quantity.to_string(), "10.5");
        assert_eq!(trade.side, Side::Buy);
        assert_eq!(trade.status, TradeStatus::Pending);
    }

    #[test]
    fn test_trade_update_skips_absent_fields() {
        let update = TradeUpdate {
            price: Some(Decimal::new(5025, 2)),
            ..TradeUpdate::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"price":50.25}"#);
    }
}
