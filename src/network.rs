//! Network URL constants and helpers.

/// Default REST API base URL (local backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Local-storage key for persisted layout settings.
pub const LAYOUT_SETTINGS_KEY: &str = "v3trading-layout-settings";

/// Login entry point for the Google OAuth flow.
///
/// Built from the app origin rather than the API base URL so the redirect
/// works behind both the dev proxy and the production reverse proxy.
pub fn google_login_url(origin: &str) -> String {
    format!("{}/api/auth/google", origin.trim_end_matches('/'))
}
