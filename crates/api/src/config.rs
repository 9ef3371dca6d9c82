//! Server configuration from environment variables.

use std::net::SocketAddr;

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SESSION_COOKIE: &str = "sid";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Tenant-facing branding served by `/settings/theme`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub brand_name: String,
    pub primary_color: String,
    pub logo_url: Option<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            brand_name: "TenantCRM".to_string(),
            primary_color: "#2563eb".to_string(),
            logo_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Name of the cookie carrying the session id.
    pub session_cookie: String,
    pub theme: ThemeConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Read configuration from the process environment.
    ///
    /// - `CRM_BIND_ADDR` (default `0.0.0.0:8080`)
    /// - `CRM_SESSION_COOKIE` (default `sid`)
    /// - `CRM_THEME_BRAND`, `CRM_THEME_PRIMARY`, `CRM_THEME_LOGO_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup("CRM_BIND_ADDR") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                var: "CRM_BIND_ADDR",
                value,
            })?,
            None => {
                tracing::warn!("CRM_BIND_ADDR not set; using {DEFAULT_BIND_ADDR}");
                defaults.bind_addr
            }
        };

        let session_cookie = match lookup("CRM_SESSION_COOKIE") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Empty("CRM_SESSION_COOKIE"));
            }
            Some(value) => value.trim().to_string(),
            None => defaults.session_cookie,
        };

        let theme = ThemeConfig {
            brand_name: lookup("CRM_THEME_BRAND").unwrap_or(defaults.theme.brand_name),
            primary_color: lookup("CRM_THEME_PRIMARY").unwrap_or(defaults.theme.primary_color),
            logo_url: lookup("CRM_THEME_LOGO_URL").filter(|v| !v.is_empty()),
        };

        Ok(Self {
            bind_addr,
            session_cookie,
            theme,
        })
    }
}
