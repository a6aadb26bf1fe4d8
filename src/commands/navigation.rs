//! Navigation Commands

use gear_catalog_core::View;
use leptos::prelude::*;

use crate::store::{AppStore, UiStateStoreFields};

use super::{refresh_gears, refresh_suggestions};

/// Switch screens and load what the new screen shows
pub fn navigate(store: AppStore, view: View) {
    let moved = store.app().write().navigate(view);
    if !moved {
        log::debug!("Navigation to {:?} refused while signed out", view);
        return;
    }
    match view {
        View::Home => refresh_gears(store),
        View::Admin => refresh_suggestions(store),
        View::Suggest | View::Login => {}
    }
}
