//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gear_catalog_core::{AppState, Notice, NoticeLevel, Session};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

/// How long a toast stays up
const NOTICE_TTL_MS: u32 = 4_000;
/// Toasts carrying text to copy by hand stay longer
const MANUAL_COPY_TTL_MS: u32 = 15_000;

/// A notice on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Session, navigation, lists and drafts
    pub app: AppState,
    /// Toasts currently displayed, oldest first
    pub toasts: Vec<Toast>,
    /// Last toast id handed out
    pub last_toast_id: u64,
}

impl UiState {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            app: AppState::new(session),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<UiState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn toast_ttl_ms(notice: &Notice) -> u32 {
    if notice.selectable.is_some() {
        MANUAL_COPY_TTL_MS
    } else {
        NOTICE_TTL_MS
    }
}

/// CSS class for a toast
pub fn toast_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice success",
        NoticeLevel::Info => "notice info",
        NoticeLevel::Error => "notice error",
    }
}

/// Show a notice and schedule its removal
pub fn store_push_notice(store: &AppStore, notice: Notice) {
    let id = {
        let last_field = store.last_toast_id();
        let mut last = last_field.write();
        *last += 1;
        *last
    };
    let ttl = toast_ttl_ms(&notice);
    store.toasts().write().push(Toast { id, notice });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(ttl).await;
        store_dismiss_notice(&store, id);
    });
}

/// Remove a toast by ID
pub fn store_dismiss_notice(store: &AppStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
