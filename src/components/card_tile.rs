//! Card Tile Component
//!
//! One grid cell: title, description, category tags and creation date.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::format::{format_created, TILE_FORMAT};
use crate::models::{Card, CardId};

#[component]
pub fn CardTile(
    card: Card,
    #[prop(into)] deleting: Signal<bool>,
    #[prop(into)] on_open: Callback<Card>,
    #[prop(into)] on_delete: Callback<CardId>,
) -> impl IntoView {
    let id = card.id.clone();
    let created = format_created(&card.created, TILE_FORMAT);
    let Card { title, description, categories_names, .. } = card.clone();

    view! {
        <div
            class="card-tile"
            class:deleting=move || deleting.get()
            on:click=move |_| on_open.run(card.clone())
        >
            <div class="tile-delete">
                <DeleteConfirmButton
                    busy=deleting
                    on_confirm=move |_| on_delete.run(id.clone())
                />
            </div>

            <h3 class="tile-title">{title}</h3>
            <p class="tile-description">{description}</p>

            <div class="tile-footer">
                <div class="tile-categories">
                    {categories_names
                        .into_iter()
                        .map(|name| view! { <span class="category-tag">{name}</span> })
                        .collect_view()}
                </div>
                <span class="tile-date">{created}</span>
            </div>
        </div>
    }
}
