//! Log Journal Component
//!
//! Collapsible view over the in-memory log ring.

use leptos::prelude::*;

const SHOWN_LINES: usize = 20;

#[component]
pub fn LogJournal() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::new());
    let reload = move || set_lines.set(rolling_logger::recent(SHOWN_LINES));

    view! {
        <details class="log-journal" on:toggle=move |_| reload()>
            <summary>"Journal"</summary>
            <button class="log-refresh-btn" on:click=move |_| reload()>"↻"</button>
            <ul>
                {move || lines.get().into_iter().map(|line| view! {
                    <li class=format!("log-line {}", line.level.as_str().to_lowercase())>
                        {line.to_string()}
                    </li>
                }).collect_view()}
            </ul>
        </details>
    }
}
