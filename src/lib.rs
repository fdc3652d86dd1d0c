//! # V3 Trading client
//!
//! The client-side layer of the V3 Trading web application: a typed REST
//! client plus the app's state containers.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — shared types, domain models, wire types and conversions
//! 2. **HTTP transport** — `TradingHttp` with per-endpoint retry policies
//!    and a cookie store for session auth
//! 3. **Services** — `TradingClient` with stateless sub-clients
//!    (`auth()`, `trades()`, `positions()`): one domain operation, one call
//! 4. **State containers** — `AuthStore`, `TradingStore`, `LayoutStore`,
//!    bundled into an `AppContext` constructed once per session
//! 5. **Persistence** — debounced mirror of the layout configuration into
//!    durable client storage
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use v3trading_client::prelude::*;
//!
//! let client = TradingClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let mut ctx = AppContext::new(
//!     client,
//!     "http://localhost:5173",
//!     Arc::new(FileSettings::new("layout-settings.json")),
//!     Box::new(NoopTheme),
//!     Box::new(FixedViewport(1280)),
//!     Box::new(navigator),
//! );
//!
//! ctx.auth.fetch_user().await;
//! ctx.trading.fetch_trades(None).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, clients.
pub mod domain;

/// Unified client error types.
pub mod error;

/// Network URL constants and helpers.
pub mod network;

/// Authentication: user profile, session validation, login URL.
pub mod auth;

// ── Layer 2: HTTP transport ──────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 3: Services ────────────────────────────────────────────────────────

/// `TradingClient` — the API entry point with nested sub-clients.
pub mod client;

// ── Layer 4: State containers ────────────────────────────────────────────────

/// App-owned state containers.
pub mod store;

/// `AppContext` — the per-session bundle of stores.
pub mod app;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Page, PageQuery, Side, SortOrder, TradeStatus};

    // Domain types
    pub use crate::domain::position::Position;
    pub use crate::domain::trade::{Trade, TradeDraft, TradeUpdate};

    // Auth types
    pub use crate::auth::User;

    // Errors
    pub use crate::error::{ClientError, HttpError, StorageError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Client + sub-clients
    pub use crate::client::{
        AuthService, PositionsService, TradesService, TradingClient, TradingClientBuilder,
    };
    pub use crate::http::{RetryConfig, RetryPolicy};

    // Stores
    pub use crate::app::AppContext;
    pub use crate::store::{
        AuthStore, FileSettings, FixedViewport, LayoutConfig, LayoutState, LayoutStore,
        MemorySettings, MenuMode, Navigator, NoopTheme, SettingsStorage, ThemeSink,
        TradingStore, Viewport,
    };
}
