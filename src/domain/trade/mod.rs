//! Trade domain — trade records, drafts, and the trades sub-client.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::{Side, TradeStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use wire::{TradeDraft, TradeUpdate};

/// A trade record as the app sees it.
///
/// Created via the API, appended to the trading store's list on success,
/// replaced in place on cancel. Never removed locally except via a refetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub id: String,
    pub symbol: String,
    pub side: Side,
    pub price: Decimal,
    pub quantity: Decimal,
    pub timestamp: DateTime<Utc>,
    pub status: TradeStatus,
}

impl Trade {
    /// Notional value of the trade.
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }
}
