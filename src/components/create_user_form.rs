//! Create User Form Component
//!
//! Offers only the roles the signed-in account may assign.

use gear_catalog_core::Role;
use leptos::prelude::*;

use crate::commands;
use crate::store::{use_app_store, UiStateStoreFields};

#[component]
pub fn CreateUserForm(#[prop(into)] assignable: Signal<&'static [Role]>) -> impl IntoView {
    let store = use_app_store();

    let username = Memo::new(move |_| store.app().read().new_user_draft.username.clone());
    let password = Memo::new(move |_| store.app().read().new_user_draft.password.clone());
    let role = Memo::new(move |_| store.app().read().new_user_draft.role);

    let on_role = move |ev: web_sys::Event| {
        if let Some(role) = Role::parse(&event_target_value(&ev)) {
            store.app().write().new_user_draft.role = role;
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        commands::create_user(store);
    };

    view! {
        <div class="create-user-section">
            <h3>"👤 Créer un utilisateur"</h3>
            <form on:submit=submit>
                <div class="form-group">
                    <label>"Nom d'utilisateur:"</label>
                    <input
                        type="text"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            store.app().write().new_user_draft.username = event_target_value(&ev);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Mot de passe:"</label>
                    <input
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            store.app().write().new_user_draft.password = event_target_value(&ev);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Rôle:"</label>
                    <select prop:value=move || role.get().as_str() on:change=on_role>
                        {move || assignable.get().iter().map(|&r| view! {
                            <option value=r.as_str()>{r.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <button type="submit" class="submit-btn">"Créer l'utilisateur"</button>
            </form>
        </div>
    }
}
