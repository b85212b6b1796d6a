//! Footer Component
//!
//! Tagline plus a collapsible view of the recent log lines, when the
//! console logger is installed.

use std::sync::Arc;

use console_logger::RollingBuffer;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let buffer = use_context::<Arc<RollingBuffer>>();
    let (open, set_open) = signal(false);

    view! {
        <footer class="app-footer">
            <p>"ProjPlanning · Conectando ONGs para un impacto mayor"</p>
            {buffer.map(|buffer| view! {
                <button type="button" class="log-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                    {move || if open.get() { "Ocultar registro" } else { "Ver registro" }}
                </button>
                <Show when=move || open.get()>
                    <LogPanel buffer=buffer.clone() />
                </Show>
            })}
        </footer>
    }
}

/// Lines buffered when the panel was opened, oldest first
#[component]
fn LogPanel(buffer: Arc<RollingBuffer>) -> impl IntoView {
    let lines = buffer.snapshot();
    view! {
        <div class="log-panel">
            <p class="log-count">{format!("{} / {} líneas", lines.len(), buffer.capacity())}</p>
            <pre class="log-lines">
                {lines.into_iter().map(|line| view! { <div class="log-line">{line.to_string()}</div> }).collect_view()}
            </pre>
        </div>
    }
}
