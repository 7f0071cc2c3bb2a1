//! Modal Shell
//!
//! Backdrop + panel with a header and close button. Clicking the backdrop
//! closes, clicks inside the panel do not. Neither closes while `busy`.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    let request_close = move || {
        if !busy.get_untracked() {
            on_close.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| request_close()>
                <div class="modal-panel" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{title.clone()}</h2>
                        <button
                            class="close-btn"
                            disabled=move || busy.get()
                            on:click=move |_| request_close()
                        >
                            "×"
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
