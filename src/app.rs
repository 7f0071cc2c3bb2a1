//! Cards App
//!
//! Root component: provides the API client and renders the cards page.

use leptos::prelude::*;

use crate::components::CardsPage;
use crate::config::ApiConfig;
use crate::context::ApiContext;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    provide_context(ApiContext::new(&config));

    view! {
        <CardsPage />
    }
}
