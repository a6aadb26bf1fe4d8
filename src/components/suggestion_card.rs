//! Suggestion Card Component

use gear_catalog_core::{Review, Suggestion};
use leptos::prelude::*;

use crate::commands;
use crate::store::use_app_store;

#[component]
pub fn SuggestionCard(suggestion: Suggestion, can_review: Memo<bool>) -> impl IntoView {
    let store = use_app_store();
    let id = StoredValue::new(suggestion.id.clone());
    let review = move |review: Review| commands::review_suggestion(store, review, id.get_value());

    view! {
        <div class="suggestion-card">
            <div class="suggestion-image">
                <img src=suggestion.image_url.clone() alt=suggestion.name.clone() />
            </div>
            <div class="suggestion-info">
                <h4>{suggestion.name.clone()}</h4>
                <p class="suggestion-nickname">{format!("\"{}\"", suggestion.nickname)}</p>
                <p class="suggestion-id">"ID: " {suggestion.gear_id.clone()}</p>
                <p class="suggestion-category">"Catégorie: " {suggestion.category.label()}</p>
                <p class="suggestion-description">{suggestion.description.clone()}</p>
                {suggestion.submitted_on().map(|date| view! {
                    <p class="suggestion-date">"Soumis le " {date}</p>
                })}
                <Show when=move || can_review.get()>
                    <div class="suggestion-actions">
                        <button
                            class="approve-btn"
                            on:click=move |_| review(Review::Approve)
                        >
                            "✅ Approuver"
                        </button>
                        <button
                            class="reject-btn"
                            on:click=move |_| review(Review::Reject)
                        >
                            "❌ Rejeter"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
