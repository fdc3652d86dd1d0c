//! Low-level HTTP transport — `TradingHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Session auth rides on an
//! HTTP-only cookie, so the client carries a cookie store and never touches
//! tokens directly.

use crate::domain::position::Position;
use crate::domain::trade::wire::{TradeDraft, TradeResponse, TradeUpdate, TradesPageResponse};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::PageQuery;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the V3 Trading REST API.
#[derive(Clone)]
pub struct TradingHttp {
    base_url: String,
    client: Client,
}

impl TradingHttp {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    pub async fn me<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        let url = format!("{}/api/auth/me", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn logout(&self) -> Result<serde_json::Value, HttpError> {
        let url = format!("{}/api/auth/logout", self.base_url);
        self.post(&url, &serde_json::json!({}), RetryPolicy::None)
            .await
    }

    // ── Trades ───────────────────────────────────────────────────────────

    pub async fn get_trades(&self, query: &PageQuery) -> Result<TradesPageResponse, HttpError> {
        let url = format!(
            "{}/api/trades?{}",
            self.base_url,
            query.to_query_string()
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_trade(&self, id: &str) -> Result<TradeResponse, HttpError> {
        let url = format!("{}/api/trades/{}", self.base_url, urlencoding::encode(id));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn create_trade(&self, draft: &TradeDraft) -> Result<TradeResponse, HttpError> {
        let url = format!("{}/api/trades", self.base_url);
        self.post(&url, draft, RetryPolicy::None).await
    }

    pub async fn update_trade(
        &self,
        id: &str,
        update: &TradeUpdate,
    ) -> Result<TradeResponse, HttpError> {
        let url = format!("{}/api/trades/{}", self.base_url, urlencoding::encode(id));
        self.put(&url, update, RetryPolicy::None).await
    }

    pub async fn cancel_trade(&self, id: &str) -> Result<TradeResponse, HttpError> {
        let url = format!(
            "{}/api/trades/{}/cancel",
            self.base_url,
            urlencoding::encode(id)
        );
        self.patch_empty(&url, RetryPolicy::None).await
    }

    // ── Positions ────────────────────────────────────────────────────────

    pub async fn get_positions(&self) -> Result<Vec<Position>, HttpError> {
        let url = format!("{}/api/positions", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_position(&self, symbol: &str) -> Result<Position, HttpError> {
        let url = format!(
            "{}/api/positions/{}",
            self.base_url,
            urlencoding::encode(symbol)
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn close_position(&self, symbol: &str) -> Result<Position, HttpError> {
        let url = format!(
            "{}/api/positions/{}/close",
            self.base_url,
            urlencoding::encode(symbol)
        );
        self.post(&url, &serde_json::json!({}), RetryPolicy::None)
            .await
    }

    // ── Internal HTTP verbs ──────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::PUT, url, Some(body), retry)
            .await
    }

    async fn patch_empty<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::PATCH, url, None::<&()>, retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
