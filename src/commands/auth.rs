//! Auth Commands
//!
//! Login, logout and account creation.

use gear_catalog_core::Notice;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_push_notice, AppStore, UiStateStoreFields};

use super::{client, refresh_gears, refresh_suggestions, sessions};

/// Sign in with the login draft; lands on the admin panel on success
pub fn login(store: AppStore) {
    let draft = store.app().read_untracked().login_draft.clone();
    spawn_local(async move {
        let result = sessions().login(&client(), &draft).await;
        let notice = store.app().write().finish_login(result);
        let signed_in = notice.is_success();
        store_push_notice(&store, notice);
        if signed_in {
            refresh_suggestions(store);
        }
    });
}

/// Local only: forget the token and return home
pub fn logout(store: AppStore) {
    sessions().logout();
    store.app().write().sign_out();
    refresh_gears(store);
}

pub fn create_user(store: AppStore) {
    let request = store.app().read_untracked().user_creation_request();
    let Some((bearer, draft)) = request else {
        store_push_notice(&store, Notice::error("Vous ne pouvez pas attribuer ce rôle"));
        return;
    };
    if !draft.is_complete() {
        store_push_notice(&store, Notice::error("Tous les champs sont obligatoires"));
        return;
    }
    spawn_local(async move {
        let result = client().create_user(&bearer, &draft).await;
        let notice = store.app().write().finish_user_creation(result);
        store_push_notice(&store, notice);
    });
}
