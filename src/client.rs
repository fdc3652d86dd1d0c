//! High-level client — `TradingClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder and the accessor methods. Sub-clients are the
//! stateless service layer: one domain operation, one transport call, no
//! state of their own.

use crate::auth::client::Auth;
use crate::domain::position::client::Positions;
use crate::domain::trade::client::Trades;
use crate::error::ClientError;
use crate::http::TradingHttp;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthService;
pub use crate::domain::position::client::Positions as PositionsService;
pub use crate::domain::trade::client::Trades as TradesService;

/// The primary entry point for the V3 Trading API.
///
/// Cheap to clone — the underlying reqwest client and cookie store are
/// shared between clones.
#[derive(Clone)]
pub struct TradingClient {
    pub(crate) http: TradingHttp,
}

impl TradingClient {
    pub fn builder() -> TradingClientBuilder {
        TradingClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn positions(&self) -> Positions<'_> {
        Positions { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TradingClientBuilder {
    base_url: String,
}

impl Default for TradingClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl TradingClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<TradingClient, ClientError> {
        Ok(TradingClient {
            http: TradingHttp::new(&self.base_url),
        })
    }
}
