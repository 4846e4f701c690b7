//! Application Context
//!
//! Services shared by every component, created once in `App` and provided
//! via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::notify::Notifier;
use crate::query::QueryClient;

#[derive(Clone)]
pub struct AppContext {
    /// Organization API client
    pub api: ApiClient,
    /// Per-scope cache versions, bumped by mutations
    pub queries: QueryClient,
    /// Toast queue
    pub notifier: Notifier,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ApiClient::new(&config.api),
            queries: QueryClient::new(),
            notifier: Notifier::new(config.ui.toast_duration_ms),
        }
    }
}

/// Get the app context; panics outside `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
