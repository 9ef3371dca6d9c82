//! Thin HTTP client for the CRM API.
//!
//! Requests go out with browser credentials so the session cookie is sent.

use crate::Entitlements;

fn api_base() -> String {
    leptos::window().location().origin().unwrap_or_default()
}

/// Load the feature entitlements of the signed-in session.
pub async fn fetch_entitlements() -> Result<Entitlements, String> {
    let res = reqwest::Client::new()
        .get(format!("{}/entitlements", api_base()))
        .fetch_credentials_include()
        .send()
        .await
        .map_err(|e| format!("Entitlements request failed: {e}"))?;

    if !res.status().is_success() {
        return Err(format!("Entitlements request failed: {}", res.status()));
    }

    res.json()
        .await
        .map_err(|e| format!("Failed to deserialize entitlements: {e}"))
}
