//! Page heading with a trail back to the dashboard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::routes::HOME_PATH;

#[component]
pub fn Breadcrumb(#[prop(into)] page_name: String, #[prop(optional)] parent: Option<(String, String)>) -> impl IntoView {
    let title = page_name.clone();
    view! {
        <div class="breadcrumb">
            <h2 class="breadcrumb__title">{title}</h2>
            <nav>
                <ol class="breadcrumb__trail">
                    <li>
                        <A href=HOME_PATH>"Inicio"</A>
                        " /"
                    </li>
                    {parent.map(|(href, label)| view! {
                        <li>
                            <A href=href>{label}</A>
                            " /"
                        </li>
                    })}
                    <li class="breadcrumb__current">{page_name}</li>
                </ol>
            </nav>
        </div>
    }
}
