//! Fallback for unmatched routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::routes::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"La página que buscás no existe."</p>
            <A href=HOME_PATH>"Volver al inicio"</A>
        </div>
    }
}
