//! Clipboard Commands
//!
//! Copies gear ids. Tries the async Clipboard API, then the legacy
//! `execCommand("copy")` path, and finally hands the text back as a
//! selectable notice.

use gear_catalog_core::Notice;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::store::{store_push_notice, AppStore};

const COPIED: &str = "ID copié dans le presse-papier !";

pub fn copy_to_clipboard(store: AppStore, text: String) {
    spawn_local(async move {
        let copied = match write_async(&text).await {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Clipboard API unavailable: {:?}", e);
                match copy_with_textarea(&text) {
                    Ok(done) => done,
                    Err(e) => {
                        log::debug!("execCommand copy failed: {:?}", e);
                        false
                    }
                }
            }
        };

        if copied {
            store_push_notice(&store, Notice::success(COPIED));
        } else {
            log::warn!("Could not copy {} automatically", text);
            store_push_notice(&store, fallback_notice(&text));
        }
    });
}

fn fallback_notice(text: &str) -> Notice {
    Notice::info(format!("Impossible de copier automatiquement. ID: {}", text))
        .with_selectable(text)
}

/// `navigator.clipboard.writeText`, looked up dynamically since it is
/// absent on insecure origins
async fn write_async(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("navigator.clipboard missing"));
    }
    let write_text: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

fn copy_with_textarea(text: &str) -> Result<bool, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    let html_document: web_sys::HtmlDocument = document.clone().dyn_into()?;

    let textarea: web_sys::HtmlTextAreaElement =
        document.create_element("textarea")?.dyn_into()?;
    textarea.set_value(text);
    textarea.set_read_only(true);
    let style = textarea.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", "-9999px")?;

    body.append_child(&textarea)?;
    textarea.select();
    let copied = html_document.exec_command("copy");
    body.remove_child(&textarea)?;
    copied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_notice_carries_id() {
        let notice = fallback_notice("g-42");
        assert!(notice.message.ends_with("ID: g-42"));
        assert_eq!(notice.selectable.as_deref(), Some("g-42"));
        assert!(!notice.is_success());
    }
}
