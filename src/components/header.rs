//! Header Component
//!
//! Logo, title, theme toggle and the signed-in user's greeting.

use gear_catalog_core::Theme;
use leptos::prelude::*;

use crate::commands;
use crate::store::{use_app_store, UiStateStoreFields};

const LOGO_URL: &str = "https://i.imgur.com/XZWXmBV.png";

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();

    let theme = Memo::new(move |_| store.app().read().theme);
    let greeting = Memo::new(move |_| {
        store
            .app()
            .read()
            .session()
            .map(|s| format!("Bonjour, {} ({})", s.username(), s.role().as_str()))
    });

    let toggle_theme = move |_| store.app().write().toggle_theme();

    view! {
        <header class=move || format!("header {}", theme.get().as_str())>
            <div class="header-content">
                <div class="logo-section">
                    <img src=LOGO_URL alt="Center French" class="logo" />
                    <h1>"Center French - Suggestions Gears"</h1>
                </div>
                <div class="header-actions">
                    <button class="theme-toggle" on:click=toggle_theme>
                        {move || if theme.get() == Theme::Dark { "☀️" } else { "🌙" }}
                    </button>
                    {move || greeting.get().map(|text| view! {
                        <div class="user-section">
                            <span>{text}</span>
                            <button class="logout-btn" on:click=move |_| commands::logout(store)>
                                "Déconnexion"
                            </button>
                        </div>
                    })}
                </div>
            </div>
        </header>
    }
}
