//! Application Context
//!
//! Shared REST client provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpCardsApi;
use crate::config::ApiConfig;

/// App-wide handle to the cards backend
#[derive(Clone, Copy)]
pub struct ApiContext {
    api: StoredValue<HttpCardsApi, LocalStorage>,
}

impl ApiContext {
    pub fn new(config: &ApiConfig) -> Self {
        log::info!("Using cards API at {}", config.base_url);
        Self {
            api: StoredValue::new_local(HttpCardsApi::new(config)),
        }
    }

    /// Client handle to move into a `spawn_local` task
    pub fn api(&self) -> HttpCardsApi {
        self.api.get_value()
    }
}

pub fn use_api() -> ApiContext {
    expect_context::<ApiContext>()
}
