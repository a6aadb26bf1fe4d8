//! Navigation Bar Component
//!
//! Tabs for the top-level screens. The admin tab only exists with a session.

use gear_catalog_core::View;
use leptos::prelude::*;

use crate::commands;
use crate::store::{use_app_store, UiStateStoreFields};

const TABS: &[(View, &str)] = &[
    (View::Home, "🏠 Accueil"),
    (View::Suggest, "💡 Faire une suggestion"),
    (View::Login, "🔐 Connexion Admin"),
    (View::Admin, "⚙️ Panel Admin"),
];

#[component]
pub fn NavBar(active_view: Memo<View>) -> impl IntoView {
    let store = use_app_store();
    let signed_in = Memo::new(move |_| store.app().read().session().is_some());

    view! {
        <nav class="navigation">
            {TABS.iter().map(|&(view, label)| {
                let visible = move || view != View::Admin || signed_in.get();
                view! {
                    <Show when=visible>
                        <button
                            class=move || if active_view.get() == view { "active" } else { "" }
                            on:click=move |_| commands::navigate(store, view)
                        >
                            {label}
                        </button>
                    </Show>
                }
            }).collect_view()}
        </nav>
    }
}
