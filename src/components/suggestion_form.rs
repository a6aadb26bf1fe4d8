//! Suggestion Form Component
//!
//! Anonymous gear proposal. Inputs write straight into the draft held by
//! the store so the values survive a failed submission.

use gear_catalog_core::{Category, SuggestionDraft};
use leptos::prelude::*;

use crate::commands;
use crate::store::{use_app_store, AppStore, UiStateStoreFields};

fn draft_field(
    store: AppStore,
    read: fn(&SuggestionDraft) -> String,
    write: fn(&mut SuggestionDraft, String),
) -> (Memo<String>, impl Fn(web_sys::Event) + Copy + 'static) {
    let value = Memo::new(move |_| read(&store.app().read().suggestion_draft));
    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        write(&mut store.app().write().suggestion_draft, value);
    };
    (value, on_input)
}

#[component]
pub fn SuggestionForm() -> impl IntoView {
    let store = use_app_store();

    let (name, on_name) = draft_field(store, |d| d.name.clone(), |d, v| d.name = v);
    let (nickname, on_nickname) =
        draft_field(store, |d| d.nickname.clone(), |d, v| d.nickname = v);
    let (gear_id, on_gear_id) = draft_field(store, |d| d.gear_id.clone(), |d, v| d.gear_id = v);
    let (image_url, on_image_url) =
        draft_field(store, |d| d.image_url.clone(), |d, v| d.image_url = v);
    let (description, on_description) =
        draft_field(store, |d| d.description.clone(), |d, v| d.description = v);
    let category = Memo::new(move |_| store.app().read().suggestion_draft.category);

    let on_category = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        if let Some(category) = Category::parse(&value) {
            store.app().write().suggestion_draft.category = category;
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        commands::submit_suggestion(store);
    };

    view! {
        <div class="suggestion-form">
            <h2>"💡 Faire une suggestion de gear"</h2>
            <form on:submit=submit>
                <div class="form-group">
                    <label>"Nom du gear:"</label>
                    <input type="text" required=true prop:value=move || name.get() on:input=on_name />
                </div>
                <div class="form-group">
                    <label>"Surnom:"</label>
                    <input type="text" required=true prop:value=move || nickname.get() on:input=on_nickname />
                </div>
                <div class="form-group">
                    <label>"ID du gear:"</label>
                    <input type="text" required=true prop:value=move || gear_id.get() on:input=on_gear_id />
                </div>
                <div class="form-group">
                    <label>"URL de l'image:"</label>
                    <input type="url" required=true prop:value=move || image_url.get() on:input=on_image_url />
                </div>
                <div class="form-group">
                    <label>"Description:"</label>
                    <textarea required=true prop:value=move || description.get() on:input=on_description></textarea>
                </div>
                <div class="form-group">
                    <label>"Catégorie:"</label>
                    <select
                        prop:value=move || category.get().as_str()
                        on:change=on_category
                    >
                        {Category::ALL.iter().map(|&c| view! {
                            <option value=c.as_str()>{c.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <button type="submit" class="submit-btn">"Soumettre la suggestion"</button>
            </form>
        </div>
    }
}
