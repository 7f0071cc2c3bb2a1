//! Create Card Dialog
//!
//! Collects title/description/categories, creates the card and hands the
//! stored record to the list through `on_add`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CardsApi;
use crate::components::{CategoryInput, Modal};
use crate::context::use_api;
use crate::models::Card;
use crate::view_model::CreateDialogModel;

#[component]
pub fn CreateCardDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_add: Callback<Card>,
    #[prop(into)] available_categories: Signal<Vec<String>>,
) -> impl IntoView {
    let ctx = use_api();
    let model = RwSignal::new(CreateDialogModel::default());

    // Follow the page's open flag
    Effect::new(move |_| {
        if open.get() {
            model.update(|m| m.open());
        } else {
            model.update(|m| {
                m.close();
            });
        }
    });

    let busy = move || model.with(|m| m.is_busy());
    let has_title = move || model.with(|m| m.draft.has_title());

    let submit = move |_: web_sys::MouseEvent| {
        let Some(Ok((ticket, body))) = model.try_update(|m| m.begin_submit()) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.create(&body).await;
            if let Some(Some(card)) = model.try_update(|m| m.finish_submit(ticket, result)) {
                log::info!("Created card {}", card.id);
                on_add.run(card);
                on_close.run(());
            }
        });
    };

    view! {
        <Modal
            open=Signal::derive(move || model.with(|m| m.is_open()))
            on_close=on_close
            busy=Signal::derive(busy)
            title="Create New Card"
        >
            <div class="dialog-body">
                <label class="field-label">"Title " <span class="required">"*"</span></label>
                <input
                    type="text"
                    class="field-input"
                    placeholder="Enter card title..."
                    maxlength="100"
                    prop:value=move || model.with(|m| m.draft.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        model.update(|m| m.draft.title = value);
                    }
                />

                <label class="field-label">"Description"</label>
                <textarea
                    class="field-input"
                    rows="6"
                    maxlength="500"
                    placeholder="Enter card description..."
                    prop:value=move || model.with(|m| m.draft.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        model.update(|m| m.draft.description = value);
                    }
                ></textarea>

                <label class="field-label">"Categories"</label>
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
                <p class="field-hint">"You can type new categories or select existing ones"</p>

                {move || model.with(|m| m.error().map(str::to_string)).map(|error| view! {
                    <p class="dialog-error">{error}</p>
                })}

                <div class="dialog-actions">
                    <button class="secondary-btn" disabled=busy on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="primary-btn"
                        disabled=move || busy() || !has_title()
                        on:click=submit
                    >
                        {move || if busy() { "Creating..." } else { "Create Card" }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}
