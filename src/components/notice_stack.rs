//! Notice Stack Component
//!
//! Toasts in the corner of the screen. Click to dismiss.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_dismiss_notice, toast_class, use_app_store, UiStateStoreFields};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notice-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast_class(toast.notice.level)
                            on:click=move |_| store_dismiss_notice(&store, id)
                        >
                            <span>{toast.notice.message.clone()}</span>
                            {toast.notice.selectable.clone().map(|text| view! {
                                <input
                                    type="text"
                                    class="notice-selectable"
                                    readonly=true
                                    value=text
                                    on:click=|ev| {
                                        ev.stop_propagation();
                                        if let Some(input) = ev
                                            .target()
                                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                                        {
                                            input.select();
                                        }
                                    }
                                />
                            })}
                        </div>
                    }
                }
            />
        </div>
    }
}
