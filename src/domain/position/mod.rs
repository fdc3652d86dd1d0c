//! Position domain — open positions and the positions sub-client.

pub mod client;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An open position.
///
/// The REST shape is the domain shape here (camelCase JSON, float amounts),
/// so no separate wire type exists for positions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub symbol: String,
    pub quantity: Decimal,
    pub average_price: Decimal,
    pub current_price: Decimal,
    #[serde(rename = "unrealizedPnL")]
    pub unrealized_pnl: Decimal,
    #[serde(rename = "realizedPnL")]
    pub realized_pnl: Decimal,
}

impl Position {
    /// Market value at the current price.
    pub fn market_value(&self) -> Decimal {
        self.current_price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_serde_renames() {
        let json = r#"{
            "id": "p-1",
            "symbol": "TSLA",
            "quantity": 12,
            "averagePrice": 240.0,
            "currentPrice": 251.5,
            "unrealizedPnL": 138.0,
            "realizedPnL": -20.5
        }"#;
        let pos: Position = serde_json::from_str(json).unwrap();
        assert_eq!(pos.average_price, Decimal::new(240, 0));
        assert_eq!(pos.unrealized_pnl, Decimal::new(138, 0));
        assert_eq!(pos.realized_pnl, Decimal::new(-205, 1));

        // Round-trips with the exact capitalization the backend uses.
        let back = serde_json::to_string(&pos).unwrap();
        assert!(back.contains("\"unrealizedPnL\""));
        assert!(back.contains("\"averagePrice\""));
    }

    #[test]
    fn test_market_value() {
        let pos = Position {
            id: "p-1".to_string(),
            symbol: "TSLA".to_string(),
            quantity: Decimal::new(4, 0),
            average_price: Decimal::new(100, 0),
            current_price: Decimal::new(110, 0),
            unrealized_pnl: Decimal::new(40, 0),
            realized_pnl: Decimal::ZERO,
        };
        assert_eq!(pos.market_value(), Decimal::new(440, 0));
    }
}
