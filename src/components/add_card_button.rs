//! Floating "+" button that opens the create dialog.

use leptos::prelude::*;

#[component]
pub fn AddCardButton(#[prop(into)] on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="add-card-fab"
            title="Add new card"
            on:click=move |_| on_click.run(())
        >
            "+"
        </button>
    }
}
