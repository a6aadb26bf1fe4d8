//! Gear Catalog Frontend App
//!
//! Header, navigation and the active screen.

use gear_catalog_core::View;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    AdminPanel, CatalogView, Header, LoginForm, NavBar, NoticeStack, SuggestionForm,
};
use crate::store::{UiState, UiStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(UiState::new(commands::sessions().restore_session()));
    provide_context(store);

    // Initial catalog load
    Effect::new(move |_| commands::refresh_gears(store));

    let theme = Memo::new(move |_| store.app().read().theme);
    let active_view = Memo::new(move |_| store.app().read().active_view());

    view! {
        <div class=move || format!("app {}-mode", theme.get().as_str())>
            <Header />
            <NavBar active_view=active_view />

            <main class="main-content">
                {move || match active_view.get() {
                    View::Home => view! { <CatalogView /> }.into_any(),
                    View::Suggest => view! { <SuggestionForm /> }.into_any(),
                    View::Login => view! { <LoginForm /> }.into_any(),
                    View::Admin => view! { <AdminPanel /> }.into_any(),
                }}
            </main>

            <NoticeStack />
        </div>
    }
}
