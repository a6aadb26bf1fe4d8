//! Suggestion Commands
//!
//! Anonymous submission and moderation of pending suggestions.

use gear_catalog_core::{Notice, Review};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_push_notice, AppStore, UiStateStoreFields};

use super::client;

/// Fetch the pending list; no-op while signed out
pub fn refresh_suggestions(store: AppStore) {
    let request = store.app().write().begin_suggestion_refresh();
    let Some((ticket, bearer)) = request else {
        return;
    };
    spawn_local(async move {
        let result = client().list_suggestions(&bearer).await;
        let notice = store.app().write().finish_suggestion_refresh(ticket, result);
        if let Some(notice) = notice {
            store_push_notice(&store, notice);
        }
    });
}

pub fn submit_suggestion(store: AppStore) {
    let draft = store.app().read_untracked().suggestion_draft.clone();
    if !draft.is_complete() {
        store_push_notice(&store, Notice::error("Tous les champs sont obligatoires"));
        return;
    }
    spawn_local(async move {
        let result = client().submit_suggestion(&draft).await;
        let notice = store.app().write().finish_suggestion_submit(result);
        store_push_notice(&store, notice);
    });
}

/// Approve or reject, then refetch the pending list on success
pub fn review_suggestion(store: AppStore, review: Review, id: String) {
    let bearer = store.app().read_untracked().review_authorization();
    let Some(bearer) = bearer else {
        store_push_notice(&store, Notice::error("Accès refusé"));
        return;
    };
    spawn_local(async move {
        let result = match review {
            Review::Approve => client().approve_suggestion(&bearer, &id).await,
            Review::Reject => client().reject_suggestion(&bearer, &id).await,
        };
        let notice = store.app().write().finish_review(review, result);
        let reviewed = notice.is_success();
        store_push_notice(&store, notice);
        if reviewed {
            refresh_suggestions(store);
        }
    });
}
