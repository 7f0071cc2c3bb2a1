//! Cards Page
//!
//! Top-level screen: header with count, category filter, the card grid, the
//! floating add button and both dialogs. The page owns the `CardListModel`;
//! dialogs report back through callbacks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CardsApi;
use crate::components::{
    AddCardButton, CardDetailDialog, CardTile, CategoryFilterBar, CreateCardDialog,
};
use crate::context::use_api;
use crate::models::{Card, CardId};
use crate::view_model::{CardListModel, LoadState};

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 card total".to_string()
    } else {
        format!("{} cards total", count)
    }
}

#[component]
pub fn CardsPage() -> impl IntoView {
    let ctx = use_api();
    let list = RwSignal::new(CardListModel::new());
    let create_open = RwSignal::new(false);
    let selected = RwSignal::new(None::<Card>);

    let load = move || {
        let ticket = list.try_update(|m| m.begin_load());
        let Some(ticket) = ticket else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list().await;
            list.try_update(|m| m.finish_load(ticket, result));
        });
    };

    // Initial fetch on mount
    Effect::new(move |_| load());

    let state = Memo::new(move |_| list.with(|m| m.state().clone()));
    let empty = Memo::new(move |_| list.with(|m| m.is_empty()));
    let available = Memo::new(move |_| list.with(|m| m.available_categories()));
    let filter = Memo::new(move |_| list.with(|m| m.filter().map(str::to_string)));

    let delete = move |id: CardId| {
        if list.try_update(|m| m.begin_delete(&id)) != Some(true) {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            let result = api.delete(&id).await;
            if result.is_ok() {
                log::info!("Deleted card {}", id);
            }
            // Keep the detail dialog from showing a card that no longer exists
            if result.is_ok() && selected.with_untracked(|s| s.as_ref().map(|c| &c.id) == Some(&id)) {
                selected.set(None);
            }
            list.try_update(|m| m.finish_delete(&id, result));
        });
    };

    let grid = move || match state.get() {
        LoadState::Loading => view! {
            <div class="status-panel">
                <div class="spinner"></div>
                <p>"Loading cards..."</p>
            </div>
        }
        .into_any(),
        LoadState::Failed(message) => view! {
            <div class="status-panel error">
                <p>"Error: " {message}</p>
                <button class="primary-btn" on:click=move |_| load()>"Retry"</button>
            </div>
        }
        .into_any(),
        LoadState::Ready if empty.get() => view! {
            <div class="status-panel">
                <p>"No cards found"</p>
            </div>
        }
        .into_any(),
        LoadState::Ready => view! {
            <CategoryFilterBar
                categories=available
                active=filter
                on_select=move |category| list.update(|m| m.set_filter(category))
            />
            <div class="card-grid">
                <For
                    each=move || list.with(|m| m.visible_cards())
                    key=|card| {
                        (
                            card.id.clone(),
                            card.title.clone(),
                            card.description.clone(),
                            card.categories_names.clone(),
                        )
                    }
                    children=move |card: Card| {
                        let id = card.id.clone();
                        let deleting = Signal::derive(move || list.with(|m| m.is_deleting(&id)));
                        view! {
                            <CardTile
                                card=card
                                deleting=deleting
                                on_open=move |card: Card| selected.set(Some(card))
                                on_delete=delete
                            />
                        }
                    }
                />
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="cards-page">
            <header class="page-header">
                <h1>"My Notes"</h1>
                <span class="card-count">{move || list.with(|m| count_label(m.cards().len()))}</span>
            </header>

            {move || list.with(|m| m.notice().map(str::to_string)).map(|notice| view! {
                <div class="notice-banner">
                    <span>{notice}</span>
                    <button class="notice-dismiss" on:click=move |_| list.update(|m| m.dismiss_notice())>
                        "×"
                    </button>
                </div>
            })}

            <main class="page-body">{grid}</main>

            <AddCardButton on_click=move |_| create_open.set(true) />

            <CreateCardDialog
                open=create_open
                on_close=move |_| create_open.set(false)
                on_add=move |card: Card| list.update(|m| m.card_added(card))
                available_categories=available
            />

            <CardDetailDialog
                card=selected
                on_close=move |_| selected.set(None)
                on_update=move |card: Card| {
                    list.update(|m| m.card_updated(card.clone()));
                    selected.set(Some(card));
                }
                available_categories=available
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label_singular_and_plural() {
        assert_eq!(count_label(0), "0 cards total");
        assert_eq!(count_label(1), "1 card total");
        assert_eq!(count_label(7), "7 cards total");
    }
}
