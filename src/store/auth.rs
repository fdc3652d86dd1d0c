//! Auth state container.

use crate::auth::User;
use crate::client::TradingClient;
use crate::error::ClientError;
use crate::network;

/// Performs full-page navigation. The browser/webview shell supplies this;
/// the store only computes the target URL.
pub trait Navigator: Send {
    fn navigate_to(&self, url: &str);
}

/// Owns the session slice of app state: the current user plus loading/error
/// flags. The user field is only ever written by this store's actions.
pub struct AuthStore {
    client: TradingClient,
    navigator: Box<dyn Navigator>,
    origin: String,
    user: Option<User>,
    loading: bool,
    error: Option<String>,
}

impl AuthStore {
    pub fn new(
        client: TradingClient,
        navigator: Box<dyn Navigator>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            client,
            navigator,
            origin: origin.into(),
            user: None,
            loading: false,
            error: None,
        }
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// Validate the session cookie and populate the user.
    ///
    /// A 401 is a normal "no session" outcome: user cleared, no error
    /// surfaced. The loading flag is a soft guard only — it is not atomic
    /// with respect to the caller's check.
    pub async fn fetch_user(&mut self) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.error = None;
        let result = self.client.auth().current_user().await;
        self.loading = false;
        self.apply_fetch_result(result);
    }

    /// Send the browser to the Google OAuth entry point.
    pub fn login(&self) {
        self.navigator
            .navigate_to(&network::google_login_url(&self.origin));
    }

    /// Clear the server-side session. On failure the user stays signed in
    /// locally and the error is surfaced.
    pub async fn logout(&mut self) {
        self.loading = true;
        self.error = None;
        let result = self.client.auth().logout().await;
        self.loading = false;
        match result {
            Ok(()) => self.user = None,
            Err(e) => {
                tracing::warn!(error = %e, "Logout failed");
                self.error = Some(e.user_message());
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn apply_fetch_result(&mut self, result: Result<User, ClientError>) {
        match result {
            Ok(user) => self.user = Some(user),
            Err(e) if e.is_unauthorized() => self.user = None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch user");
                self.user = None;
                self.error = Some(e.user_message());
            }
        }
    }
}
