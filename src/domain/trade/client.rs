//! Trades sub-client — stateless façade over the trade endpoints.

use crate::client::TradingClient;
use crate::domain::trade::wire::{TradeDraft, TradeUpdate};
use crate::domain::trade::Trade;
use crate::error::ClientError;
use crate::shared::{Page, PageQuery};

pub struct Trades<'a> {
    pub(crate) client: &'a TradingClient,
}

impl<'a> Trades<'a> {
    /// Fetch one page of trades.
    pub async fn list(&self, query: &PageQuery) -> Result<Page<Trade>, ClientError> {
        let resp = self.client.http.get_trades(query).await?;
        Ok(Page {
            items: resp.items.into_iter().map(Trade::from).collect(),
            total: resp.total,
            page: resp.page,
            limit: resp.limit,
        })
    }

    /// Fetch a single trade by id.
    pub async fn get(&self, id: &str) -> Result<Trade, ClientError> {
        Ok(self.client.http.get_trade(id).await?.into())
    }

    /// Submit a new trade.
    pub async fn create(&self, draft: &TradeDraft) -> Result<Trade, ClientError> {
        Ok(self.client.http.create_trade(draft).await?.into())
    }

    /// Partially update an existing trade.
    pub async fn update(&self, id: &str, update: &TradeUpdate) -> Result<Trade, ClientError> {
        Ok(self.client.http.update_trade(id, update).await?.into())
    }

    /// Cancel a trade. Returns the trade in its cancelled state.
    pub async fn cancel(&self, id: &str) -> Result<Trade, ClientError> {
        Ok(self.client.http.cancel_trade(id).await?.into())
    }
}
