//! Shared types used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod time;

pub use time::parse_backend_timestamp;

use serde::{Deserialize, Serialize};

// ─── Side ────────────────────────────────────────────────────────────────────

/// Trade side: buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
        }
    }
}

// ─── TradeStatus ─────────────────────────────────────────────────────────────

/// Lifecycle status of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Pending,
    Executed,
    Cancelled,
}

impl std::fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TradeStatus::Pending => write!(f, "Pending"),
            TradeStatus::Executed => write!(f, "Executed"),
            TradeStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// Sort direction for paginated queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query parameters for paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl PageQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            sort_by: None,
            sort_order: None,
        }
    }

    pub fn sorted_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = Some(order);
        self
    }

    /// Render as a URL query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page),
            format!("limit={}", self.limit),
        ];
        if let Some(field) = &self.sort_by {
            params.push(format!("sortBy={}", urlencoding::encode(field)));
        }
        if let Some(order) = &self.sort_order {
            params.push(format!("sortOrder={}", order.as_str()));
        }
        params.join("&")
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// One page of results from a paginated endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_serde() {
        let buy: Side = serde_json::from_str("\"buy\"").unwrap();
        assert_eq!(buy, Side::Buy);
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"sell\"");
    }

    #[test]
    fn test_trade_status_serde() {
        let s: TradeStatus = serde_json::from_str("\"executed\"").unwrap();
        assert_eq!(s, TradeStatus::Executed);
        assert_eq!(
            serde_json::to_string(&TradeStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_page_query_minimal() {
        let q = PageQuery::new(2, 25);
        assert_eq!(q.to_query_string(), "page=2&limit=25");
    }

    #[test]
    fn test_page_query_with_sort() {
        let q = PageQuery::new(1, 10).sorted_by("timestamp", SortOrder::Desc);
        assert_eq!(
            q.to_query_string(),
            "page=1&limit=10&sortBy=timestamp&sortOrder=desc"
        );
    }

    #[test]
    fn test_page_query_encodes_sort_field() {
        let q = PageQuery::new(1, 10).sorted_by("executed at", SortOrder::Asc);
        assert_eq!(
            q.to_query_string(),
            "page=1&limit=10&sortBy=executed%20at&sortOrder=asc"
        );
    }
}
