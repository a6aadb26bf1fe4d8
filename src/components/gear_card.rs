//! Gear Card Component

use gear_catalog_core::Gear;
use leptos::prelude::*;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::store::use_app_store;

#[component]
pub fn GearCard(gear: Gear, can_delete: Memo<bool>) -> impl IntoView {
    let store = use_app_store();

    let copy_id = gear.gear_id.clone();
    let delete_id = gear.id.clone();
    let on_delete = Callback::new(move |_: ()| commands::delete_gear(store, delete_id.clone()));

    view! {
        <div class="gear-card">
            <div class="gear-image">
                <img src=gear.image_url.clone() alt=gear.name.clone() />
            </div>
            <div class="gear-info">
                <h3>{gear.name.clone()}</h3>
                <p class="gear-nickname">{format!("\"{}\"", gear.nickname)}</p>
                <p class="gear-id">"ID: " {gear.gear_id.clone()}</p>
                <p class="gear-description">{gear.description.clone()}</p>
                <div class="gear-actions">
                    {gear.category.allows_copy().then(|| view! {
                        <button
                            class="copy-btn"
                            on:click=move |_| commands::copy_to_clipboard(store, copy_id.clone())
                        >
                            "📋 Copier ID"
                        </button>
                    })}
                    <Show when=move || can_delete.get()>
                        <DeleteConfirmButton
                            button_class="delete-btn"
                            label="🗑️ Supprimer"
                            on_confirm=on_delete
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}
