//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is static, so settings are read from the build environment with
//! `option_env!` and normalized here. Pages read the resulting
//! `ClientConfig` from Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_PROFILE_ID: &str = "67a78dc1a0d27dd1623ec869";

/// Console log verbosity for the browser build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_log_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Remote API base URL without a trailing slash.
    pub api_url: String,
    /// Psychologist whose profile the public landing page shows.
    pub profile_id: String,
    pub log_level: LogLevel,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            profile_id: DEFAULT_PROFILE_ID.to_owned(),
            log_level: LogLevel::default(),
        }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `CONTYGO_API_URL`: remote API base URL
    /// - `CONTYGO_PROFILE_ID`: profile shown on the public page
    /// - `CONTYGO_LOG_LEVEL`: `error`, `warn`, `info` (default) or `debug`
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CONTYGO_API_URL"),
            option_env!("CONTYGO_PROFILE_ID"),
            option_env!("CONTYGO_LOG_LEVEL"),
        )
    }

    /// Build config from raw optional values, applying defaults.
    pub fn from_values(api_url: Option<&str>, profile_id: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = non_blank(api_url)
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_owned();
        let profile_id = non_blank(profile_id).unwrap_or(DEFAULT_PROFILE_ID).to_owned();
        Self { api_url, profile_id, log_level: parse_log_level(log_level) }
    }

    /// Join an endpoint path onto the API base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_log_level(raw: Option<&str>) -> LogLevel {
    match non_blank(raw).map(str::to_ascii_lowercase).as_deref() {
        Some("error") => LogLevel::Error,
        Some("warn" | "warning") => LogLevel::Warn,
        Some("debug" | "trace") => LogLevel::Debug,
        _ => LogLevel::Info,
    }
}
