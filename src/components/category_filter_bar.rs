//! Category Filter Bar
//!
//! "All" plus one chip per category in use. Only narrows what the grid shows.

use leptos::prelude::*;

#[component]
pub fn CategoryFilterBar(
    #[prop(into)] categories: Signal<Vec<String>>,
    #[prop(into)] active: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || !categories.get().is_empty()>
            <div class="filter-bar">
                <button
                    class=move || if active.get().is_none() { "filter-chip active" } else { "filter-chip" }
                    on:click=move |_| on_select.run(None)
                >
                    "All"
                </button>
                <For
                    each=move || categories.get()
                    key=|name| name.clone()
                    children=move |name| {
                        let for_class = name.clone();
                        let for_click = name.clone();
                        let is_active = move || active.get().as_deref() == Some(for_class.as_str());
                        view! {
                            <button
                                class=move || if is_active() { "filter-chip active" } else { "filter-chip" }
                                on:click=move |_| on_select.run(Some(for_click.clone()))
                            >
                                {name}
                            </button>
                        }
                    }
                />
            </div>
        </Show>
    }
}
