//! Auth sub-client — session validation, logout, login URL.

use crate::auth::{User, UserResponse};
use crate::client::TradingClient;
use crate::error::ClientError;
use crate::network;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a TradingClient,
}

impl<'a> Auth<'a> {
    /// Validate the current session cookie and return the user profile.
    ///
    /// A 401 surfaces as `HttpError::Unauthorized`; the auth store treats
    /// that as a normal "no session" outcome rather than an error.
    pub async fn current_user(&self) -> Result<User, ClientError> {
        let resp: UserResponse = self.client.http.me().await?;
        Ok(resp.into())
    }

    /// Clear the server-side session cookie.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let _ = self.client.http.logout().await?;
        Ok(())
    }

    /// URL to send the browser to for the Google OAuth flow.
    ///
    /// Takes the app origin, not the API base URL — the reverse proxy routes
    /// `/api` to the backend in both dev and production.
    pub fn login_url(&self, origin: &str) -> String {
        network::google_login_url(origin)
    }
}
