//! Catalog Commands
//!
//! Category switching, list refresh and gear deletion.

use gear_catalog_core::{Category, FetchTicket, Notice};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_push_notice, AppStore, UiStateStoreFields};

use super::client;

/// Reload the active category; the previous list stays up until the reply lands
pub fn refresh_gears(store: AppStore) {
    let (ticket, category) = {
        let app_field = store.app();
        let mut app = app_field.write();
        (app.begin_gear_refresh(), app.category())
    };
    spawn_gear_fetch(store, ticket, category);
}

pub fn select_category(store: AppStore, category: Category) {
    let ticket = store.app().write().select_category(category);
    spawn_gear_fetch(store, ticket, category);
}

fn spawn_gear_fetch(store: AppStore, ticket: FetchTicket, category: Category) {
    spawn_local(async move {
        let result = client().list_gears(category).await;
        let notice = store.app().write().finish_gear_refresh(ticket, result);
        if let Some(notice) = notice {
            store_push_notice(&store, notice);
        }
    });
}

/// Delete after the inline confirmation, then reload on success
pub fn delete_gear(store: AppStore, id: String) {
    let bearer = store.app().read_untracked().delete_authorization();
    let Some(bearer) = bearer else {
        store_push_notice(&store, Notice::error("Accès refusé"));
        return;
    };
    spawn_local(async move {
        let result = client().delete_gear(&bearer, &id).await;
        let notice = store.app().write().finish_gear_delete(result);
        let deleted = notice.is_success();
        store_push_notice(&store, notice);
        if deleted {
            refresh_gears(store);
        }
    });
}
