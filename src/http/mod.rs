//! HTTP transport layer — `TradingHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::TradingHttp;
pub use retry::{RetryConfig, RetryPolicy};
