//! Neutral loading placeholder.

use leptos::prelude::*;

/// Full-area spinner shown while a page or the session check is pending.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-live="polite">
            <span class="loader__spinner"></span>
            <span class="loader__label">"Cargando..."</span>
        </div>
    }
}
