//! Login Form Component

use leptos::prelude::*;

use crate::commands;
use crate::store::{use_app_store, UiStateStoreFields};

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();

    let username = Memo::new(move |_| store.app().read().login_draft.username.clone());
    let password = Memo::new(move |_| store.app().read().login_draft.password.clone());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        commands::login(store);
    };

    view! {
        <div class="login-form">
            <h2>"🔐 Connexion Administrateur"</h2>
            <form on:submit=submit>
                <div class="form-group">
                    <label>"Nom d'utilisateur:"</label>
                    <input
                        type="text"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            store.app().write().login_draft.username = event_target_value(&ev);
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
                            store.app().write().login_draft.password = event_target_value(&ev);
                        }
                    />
                </div>
                <button type="submit" class="submit-btn">"Se connecter"</button>
            </form>
            <div class="test-account">
                <p><strong>"Compte de test:"</strong></p>
                <p>"Nom d'utilisateur: admin"</p>
                <p>"Mot de passe: admin123"</p>
            </div>
        </div>
    }
}
