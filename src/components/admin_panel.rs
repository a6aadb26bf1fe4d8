//! Admin Panel Component
//!
//! Pending suggestions for every signed-in role, account creation for roles
//! allowed to create accounts, and the recent log lines.

use leptos::prelude::*;

use crate::components::{CreateUserForm, LogJournal, SuggestionCard};
use crate::store::{use_app_store, UiStateStoreFields};

#[component]
pub fn AdminPanel() -> impl IntoView {
    let store = use_app_store();

    let pending = Memo::new(move |_| store.app().read().pending_suggestions().to_vec());
    let capabilities = Memo::new(move |_| store.app().read().capabilities());
    let can_review = Memo::new(move |_| capabilities.get().can_review_suggestions);

    view! {
        <div class="admin-panel">
            <h2>"⚙️ Panel Administrateur"</h2>
            <div class="admin-sections">
                <div class="suggestions-section">
                    <h3>"📝 Suggestions en attente"</h3>
                    <Show
                        when=move || !pending.get().is_empty()
                        fallback=|| view! { <p>"Aucune suggestion en attente"</p> }
                    >
                        <div class="suggestions-grid">
                            <For
                                each=move || pending.get()
                                key=|s| s.id.clone()
                                children=move |suggestion| view! {
                                    <SuggestionCard suggestion=suggestion can_review=can_review />
                                }
                            />
                        </div>
                    </Show>
                </div>
                <Show when=move || capabilities.get().can_create_users>
                    <CreateUserForm assignable=Signal::derive(move || capabilities.get().assignable_roles) />
                </Show>
            </div>
            <LogJournal />
        </div>
    }
}
