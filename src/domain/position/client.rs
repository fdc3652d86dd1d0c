//! Positions sub-client — stateless façade over the position endpoints.

use crate::client::TradingClient;
use crate::domain::position::Position;
use crate::error::ClientError;

pub struct Positions<'a> {
    pub(crate) client: &'a TradingClient,
}

impl<'a> Positions<'a> {
    /// Fetch the full position snapshot.
    pub async fn list(&self) -> Result<Vec<Position>, ClientError> {
        Ok(self.client.http.get_positions().await?)
    }

    /// Fetch a single position by symbol.
    pub async fn get(&self, symbol: &str) -> Result<Position, ClientError> {
        Ok(self.client.http.get_position(symbol).await?)
    }

    /// Close a position. Returns the position in its closed state.
    pub async fn close(&self, symbol: &str) -> Result<Position, ClientError> {
        Ok(self.client.http.close_position(symbol).await?)
    }
}
