//! Catalog View Component
//!
//! Home screen: category buttons and the gear grid of the active category.

use leptos::prelude::*;

use crate::components::{CategoryBar, GearCard};
use crate::store::{use_app_store, UiStateStoreFields};

#[component]
pub fn CatalogView() -> impl IntoView {
    let store = use_app_store();

    let category = Memo::new(move |_| store.app().read().category());
    let loading = Memo::new(move |_| store.app().read().is_loading());
    let gears = Memo::new(move |_| store.app().read().gears().to_vec());
    let can_delete = Memo::new(move |_| store.app().read().capabilities().can_delete_gears);

    view! {
        <div class="home-view">
            <h2>"Catégories de Gears"</h2>
            <CategoryBar />

            <div class="category-title">
                <h3>{move || {
                    let category = category.get();
                    format!("{} Gears {}", category.icon(), category.label())
                }}</h3>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Chargement..."</div> }
            >
                <div class="gears-grid">
                    <For
                        each=move || gears.get()
                        key=|gear| gear.id.clone()
                        children=move |gear| view! { <GearCard gear=gear can_delete=can_delete /> }
                    />
                </div>
            </Show>
        </div>
    }
}
