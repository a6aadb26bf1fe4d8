//! Category Bar Component
//!
//! One button per gear category.

use gear_catalog_core::Category;
use leptos::prelude::*;

use crate::commands;
use crate::store::{use_app_store, UiStateStoreFields};

#[component]
pub fn CategoryBar() -> impl IntoView {
    let store = use_app_store();
    let current = Memo::new(move |_| store.app().read().category());

    view! {
        <div class="category-buttons">
            {Category::ALL.iter().map(|&category| {
                view! {
                    <button
                        class=move || if current.get() == category { "active" } else { "" }
                        on:click=move |_| commands::select_category(store, category)
                    >
                        {format!("{} {}", category.icon(), category.label())}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
