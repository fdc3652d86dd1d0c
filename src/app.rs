//! `AppContext` — one explicit context object per application session.
//!
//! The stores are deliberately not global singletons: the shell constructs
//! one `AppContext` at startup and passes references to whichever layer
//! needs them, which keeps every store constructible in isolation.

use crate::client::TradingClient;
use crate::store::auth::{AuthStore, Navigator};
use crate::store::layout::{LayoutStore, ThemeSink, Viewport};
use crate::store::persist::SettingsStorage;
use crate::store::trading::TradingStore;

use std::sync::Arc;

/// The three state containers for one session.
pub struct AppContext {
    pub auth: AuthStore,
    pub trading: TradingStore,
    pub layout: LayoutStore,
}

impl AppContext {
    /// Wire up the stores. The layout store rehydrates from `storage` and
    /// syncs the dark class immediately.
    pub fn new(
        client: TradingClient,
        origin: impl Into<String>,
        storage: Arc<dyn SettingsStorage>,
        theme: Box<dyn ThemeSink>,
        viewport: Box<dyn Viewport>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        Self {
            auth: AuthStore::new(client.clone(), navigator, origin),
            trading: TradingStore::new(client),
            layout: LayoutStore::new(storage, theme, viewport),
        }
    }
}
