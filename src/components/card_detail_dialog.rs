//! Card Detail Dialog
//!
//! Read-only view of one card with an Edit toggle. Saving sends the edits and
//! reports the merged card through `on_update`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CardsApi;
use crate::components::{CategoryInput, Modal};
use crate::context::use_api;
use crate::format::{format_created, DETAIL_FORMAT};
use crate::models::Card;
use crate::view_model::{DetailDialogModel, Mode};

#[component]
pub fn CardDetailDialog(
    #[prop(into)] card: Signal<Option<Card>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_update: Callback<Card>,
    #[prop(into)] available_categories: Signal<Vec<String>>,
) -> impl IntoView {
    let ctx = use_api();
    let model = RwSignal::new(DetailDialogModel::default());

    // Reseed whenever the page shows another card (or none)
    Effect::new(move |_| match card.get() {
        Some(card) => model.update(|m| m.show(card)),
        None => model.update(|m| {
            m.close();
        }),
    });

    let editing = move || model.with(|m| m.mode() == Mode::Editing);
    let busy = move || model.with(|m| m.is_busy());
    let shown = move || model.with(|m| m.card().cloned());

    let save = move |_: web_sys::MouseEvent| {
        let Some(Ok((ticket, update))) = model.try_update(|m| m.begin_save()) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.update(&update).await;
            let merged = model.try_update(|m| m.finish_save(ticket, &update, result));
            if let Some(Some(card)) = merged {
                log::info!("Updated card {}", card.id);
                on_update.run(card);
            }
        });
    };

    let toggle_edit = move |_: web_sys::MouseEvent| {
        if editing() {
            model.update(|m| m.cancel_edit());
        } else {
            model.update(|m| m.begin_edit());
        }
    };

    let title_section = move || {
        if editing() {
            view! {
                <input
                    type="text"
                    class="field-input"
                    placeholder="Enter card title..."
                    prop:value=move || model.with(|m| m.draft.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        model.update(|m| m.draft.title = value);
                    }
                />
            }
            .into_any()
        } else {
            let title = shown().map(|c| c.title).unwrap_or_default();
            view! { <div class="detail-title">{title}</div> }.into_any()
        }
    };

    let description_section = move || {
        if editing() {
            view! {
                <textarea
                    class="field-input"
                    rows="6"
                    placeholder="Enter card description..."
                    prop:value=move || model.with(|m| m.draft.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        model.update(|m| m.draft.description = value);
                    }
                ></textarea>
            }
            .into_any()
        } else {
            let description = shown()
                .map(|c| c.description)
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "No description provided".to_string());
            view! { <div class="detail-description">{description}</div> }.into_any()
        }
    };

    let categories_section = move || {
        if editing() {
            view! {
                <CategoryInput
                    selected=Signal::derive(move || model.with(|m| m.draft.categories.clone()))
                    available=available_categories
                    on_add=move |name: String| {
                        let known = available_categories.get_untracked();
                        model.update(|m| {
                            m.draft.add_category(&name, &known);
                        });
                    }
                    on_remove=move |name: String| model.update(|m| m.draft.remove_category(&name))
                />
            }
            .into_any()
        } else {
            let categories = shown().map(|c| c.categories_names).unwrap_or_default();
            if categories.is_empty() {
                view! { <span class="placeholder-text">"No categories assigned"</span> }.into_any()
            } else {
                view! {
                    <div class="detail-categories">
                        {categories
                            .into_iter()
                            .map(|name| view! { <span class="category-tag">{name}</span> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
        }
    };

    let created = move || {
        shown()
            .map(|c| format_created(&c.created, DETAIL_FORMAT))
            .unwrap_or_default()
    };

    view! {
        <Modal
            open=Signal::derive(move || model.with(|m| m.card().is_some()))
            on_close=on_close
            busy=Signal::derive(busy)
            title="Card Details"
        >
            <div class="dialog-body">
                <div class="detail-toolbar">
                    <button
                        class=move || if editing() { "secondary-btn" } else { "primary-btn" }
                        disabled=busy
                        on:click=toggle_edit
                    >
                        {move || if editing() { "Cancel" } else { "Edit" }}
                    </button>
                </div>

                <label class="field-label">"Title"</label>
                {title_section}

                <label class="field-label">"Description"</label>
                {description_section}

                <label class="field-label">"Categories"</label>
                {categories_section}

                <hr class="divider" />
                <p class="detail-created">"Created: " {created}</p>

                {move || model.with(|m| m.error().map(str::to_string)).map(|error| view! {
                    <p class="dialog-error">{error}</p>
                })}

                <Show when=editing>
                    <div class="dialog-actions">
                        <button
                            class="secondary-btn"
                            disabled=busy
                            on:click=move |_| model.update(|m| m.cancel_edit())
                        >
                            "Cancel"
                        </button>
                        <button class="primary-btn" disabled=busy on:click=save>
                            {move || if busy() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </Show>
            </div>
        </Modal>
    }
}
