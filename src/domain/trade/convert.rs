//! Conversions from wire types to domain types for trades.

use super::wire::TradeResponse;
use super::Trade;
use crate::shared::parse_backend_timestamp;

impl From<TradeResponse> for Trade {
    fn from(t: TradeResponse) -> Self {
        Self {
            id: t.id,
            symbol: t.symbol,
            side: t.side,
            price: t.price,
            quantity: t.quantity,
            timestamp: parse_backend_timestamp(&t.timestamp),
            status: t.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{Side, TradeStatus};
    use rust_decimal::Decimal;

    fn sample_response(timestamp: &str) -> TradeResponse {
        TradeResponse {
            id: "t-42".to_string(),
            symbol: "MSFT".to_string(),
            side: Side::Sell,
            price: Decimal::new(41050, 2),
            quantity: Decimal::new(3, 0),
            timestamp: timestamp.to_string(),
            status: TradeStatus::Executed,
        }
    }

    #[test]
    fn test_conversion_carries_all_fields() {
        let trade: Trade = sample_response("2025-08-20T14:30:00").into();
        assert_eq!(trade.id, "t-42");
        assert_eq!(trade.symbol, "MSFT");
        assert_eq!(trade.side, Side::Sell);
        assert_eq!(trade.status, TradeStatus::Executed);
        assert_eq!(trade.timestamp.to_rfc3339(), "2025-08-20T14:30:00+00:00");
    }

    #[test]
    fn test_garbage_timestamp_does_not_drop_record() {
        let trade: Trade = sample_response("not a time").into();
        assert_eq!(trade.id, "t-42");
        assert_eq!(trade.price, Decimal::new(41050, 2));
    }
}
