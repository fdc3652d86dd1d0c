//! Trading state container.
//!
//! Every action follows the same shape: set loading, clear error, call the
//! service, mutate the owned collection on success, record a message on
//! failure. Mutating actions re-raise the typed error so the UI layer can
//! react; reads record the message and swallow. The loading flag is cleared
//! on both paths.

use crate::client::TradingClient;
use crate::domain::position::Position;
use crate::domain::trade::{Trade, TradeDraft};
use crate::error::ClientError;
use crate::shared::{Page, PageQuery};

use rust_decimal::Decimal;

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Owns the trades list, the positions snapshot, and the pagination window.
pub struct TradingStore {
    client: TradingClient,
    trades: Vec<Trade>,
    positions: Vec<Position>,
    current_trade: Option<Trade>,
    loading: bool,
    error: Option<String>,
    current_page: u32,
    page_size: u32,
    total_trades: u64,
}

impl TradingStore {
    pub fn new(client: TradingClient) -> Self {
        Self {
            client,
            trades: Vec::new(),
            positions: Vec::new(),
            current_trade: None,
            loading: false,
            error: None,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_trades: 0,
        }
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn current_trade(&self) -> Option<&Trade> {
        self.current_trade.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_trades(&self) -> u64 {
        self.total_trades
    }

    // ── Derived ──────────────────────────────────────────────────────────

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_trades.div_ceil(self.page_size as u64)
    }

    pub fn has_positions(&self) -> bool {
        !self.positions.is_empty()
    }

    pub fn total_unrealized_pnl(&self) -> Decimal {
        self.positions.iter().map(|p| p.unrealized_pnl).sum()
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// Fetch one page of trades. Without explicit params the current page
    /// and page size are used. The response overwrites the local list and
    /// snaps total and current page to server values — the server stays the
    /// single source of truth for pagination.
    pub async fn fetch_trades(&mut self, params: Option<PageQuery>) {
        self.loading = true;
        self.error = None;
        let query =
            params.unwrap_or_else(|| PageQuery::new(self.current_page, self.page_size));
        let result = self.client.trades().list(&query).await;
        self.loading = false;
        match result {
            Ok(page) => self.apply_trades_page(page),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch trades");
                self.error = Some(e.user_message());
            }
        }
    }

    /// Fetch a single trade into the current-trade slot. Does not touch the
    /// list.
    pub async fn fetch_trade(&mut self, id: &str) {
        self.loading = true;
        self.error = None;
        let result = self.client.trades().get(id).await;
        self.loading = false;
        match result {
            Ok(trade) => self.current_trade = Some(trade),
            Err(e) => {
                tracing::warn!(error = %e, trade_id = id, "Failed to fetch trade");
                self.error = Some(e.user_message());
            }
        }
    }

    /// Submit a new trade. On success the server-confirmed trade lands at
    /// the front of the list and is returned to the caller.
    pub async fn create_trade(&mut self, draft: &TradeDraft) -> Result<Trade, ClientError> {
        self.loading = true;
        self.error = None;
        let result = self.client.trades().create(draft).await;
        self.loading = false;
        match result {
            Ok(trade) => {
                self.apply_created(trade.clone());
                Ok(trade)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create trade");
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Cancel a trade. On success the matching list entry is replaced in
    /// place with the server-returned cancelled trade; an id absent from the
    /// local list is silently dropped (the item may simply be off the
    /// current page).
    pub async fn cancel_trade(&mut self, id: &str) -> Result<Trade, ClientError> {
        self.loading = true;
        self.error = None;
        let result = self.client.trades().cancel(id).await;
        self.loading = false;
        match result {
            Ok(trade) => {
                self.apply_cancelled(id, trade.clone());
                Ok(trade)
            }
            Err(e) => {
                tracing::warn!(error = %e, trade_id = id, "Failed to cancel trade");
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Replace the positions list with a fresh snapshot.
    pub async fn fetch_positions(&mut self) {
        self.loading = true;
        self.error = None;
        let result = self.client.positions().list().await;
        self.loading = false;
        match result {
            Ok(positions) => self.positions = positions,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch positions");
                self.error = Some(e.user_message());
            }
        }
    }

    /// Close a position. On success the matching symbol is removed from the
    /// local snapshot and the closed position returned.
    pub async fn close_position(&mut self, symbol: &str) -> Result<Position, ClientError> {
        self.loading = true;
        self.error = None;
        let result = self.client.positions().close(symbol).await;
        self.loading = false;
        match result {
            Ok(position) => {
                self.apply_closed(symbol);
                Ok(position)
            }
            Err(e) => {
                tracing::warn!(error = %e, symbol, "Failed to close position");
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Move to `page` and refetch with the existing page size.
    pub async fn set_page(&mut self, page: u32) {
        self.current_page = page;
        self.fetch_trades(None).await;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // ── State transitions ────────────────────────────────────────────────

    fn apply_trades_page(&mut self, page: Page<Trade>) {
        self.trades = page.items;
        self.total_trades = page.total;
        self.current_page = page.page;
    }

    fn apply_created(&mut self, trade: Trade) {
        self.trades.insert(0, trade);
    }

    fn apply_cancelled(&mut self, id: &str, cancelled: Trade) {
        if let Some(entry) = self.trades.iter_mut().find(|t| t.id == id) {
            *entry = cancelled;
        }
    }

    fn apply_closed(&mut self, symbol: &str) {
        self.positions.retain(|p| p.symbol != symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{Side, TradeStatus};
    use chrono::Utc;

    fn store() -> TradingStore {
        TradingStore::new(TradingClient::builder().build().unwrap())
    }

    fn make_trade(id: &str, symbol: &str) -> Trade {
        Trade {
            id: id.to_string(),
            symbol: symbol.to_string(),
            side: Side::Buy,
            price: Decimal::new(10000, 2),
            quantity: Decimal::new(5, 0),
            timestamp: Utc::now(),
            status: TradeStatus::Pending,
        }
    }

    fn make_position(symbol: &str, unrealized: i64) -> Position {
        Position {
            id: format!("p-{}", symbol),
            symbol: symbol.to_string(),
            quantity: Decimal::new(10, 0),
            average_price: Decimal::new(100, 0),
            current_price: Decimal::new(105, 0),
            unrealized_pnl: Decimal::new(unrealized, 0),
            realized_pnl: Decimal::ZERO,
        }
    }

    fn page_of(items: Vec<Trade>, total: u64, page: u32) -> Page<Trade> {
        Page {
            items,
            total,
            page,
            limit: 10,
        }
    }

    #[test]
    fn test_trades_page_snaps_to_server_values() {
        let mut s = store();
        s.apply_trades_page(page_of(vec![make_trade("t1", "AAPL")], 42, 3));
        assert_eq!(s.trades().len(), 1);
        assert_eq!(s.total_trades(), 42);
        assert_eq!(s.current_page(), 3);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let mut s = store();
        s.apply_trades_page(page_of(vec![], 42, 1));
        assert_eq!(s.total_pages(), 5);
        s.apply_trades_page(page_of(vec![], 40, 1));
        assert_eq!(s.total_pages(), 4);
        s.apply_trades_page(page_of(vec![], 0, 1));
        assert_eq!(s.total_pages(), 0);
    }

    #[test]
    fn test_created_trade_lands_at_front() {
        let mut s = store();
        s.apply_trades_page(page_of(
            vec![make_trade("t1", "AAPL"), make_trade("t2", "MSFT")],
            2,
            1,
        ));
        s.apply_created(make_trade("t3", "TSLA"));
        assert_eq!(s.trades().len(), 3);
        assert_eq!(s.trades()[0].id, "t3");
        assert_eq!(s.trades()[1].id, "t1");
    }

    #[test]
    fn test_cancel_replaces_in_place() {
        let mut s = store();
        s.apply_trades_page(page_of(
            vec![make_trade("t1", "AAPL"), make_trade("t2", "MSFT")],
            2,
            1,
        ));
        let mut cancelled = make_trade("t2", "MSFT");
        cancelled.status = TradeStatus::Cancelled;
        s.apply_cancelled("t2", cancelled);
        assert_eq!(s.trades().len(), 2);
        assert_eq!(s.trades()[0].id, "t1");
        assert_eq!(s.trades()[1].status, TradeStatus::Cancelled);
    }

    #[test]
    fn test_cancel_unknown_id_leaves_list_unchanged() {
        let mut s = store();
        s.apply_trades_page(page_of(vec![make_trade("t1", "AAPL")], 1, 1));
        s.apply_cancelled("t9", make_trade("t9", "NVDA"));
        assert_eq!(s.trades().len(), 1);
        assert_eq!(s.trades()[0].id, "t1");
    }

    #[test]
    fn test_close_position_removes_symbol() {
        let mut s = store();
        s.positions = vec![make_position("AAPL", 50), make_position("MSFT", -20)];
        s.apply_closed("AAPL");
        assert_eq!(s.positions().len(), 1);
        assert!(s.has_positions());
        s.apply_closed("MSFT");
        assert!(!s.has_positions());
    }

    #[test]
    fn test_total_unrealized_pnl_sums_positions() {
        let mut s = store();
        s.positions = vec![
            make_position("AAPL", 150),
            make_position("MSFT", -40),
            make_position("TSLA", 10),
        ];
        assert_eq!(s.total_unrealized_pnl(), Decimal::new(120, 0));
    }
}
