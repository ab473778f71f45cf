//! Authenticated layout: sidebar navigation, header, and routed content.
//!
//! ARCHITECTURE
//! ============
//! Mounted as the parent route of every protected page; the page itself
//! renders through `<Outlet/>`.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::routes::{
    BILLING_PATH, CALENDAR_PATH, HOME_PATH, PATIENTS_PATH, PROFILE_PATH, PUBLIC_PROFILE_PATH, RESOURCES_PATH,
    WAIT_LIST_PATH,
};

const NAV_ITEMS: &[(&str, &str)] = &[
    (HOME_PATH, "Inicio"),
    (PATIENTS_PATH, "Pacientes"),
    (CALENDAR_PATH, "Calendario"),
    (RESOURCES_PATH, "Recursos"),
    (BILLING_PATH, "Facturación"),
    (WAIT_LIST_PATH, "Lista de espera"),
    (PROFILE_PATH, "Perfil"),
];

#[component]
pub fn AppShell() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_dark = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };
    let on_toggle_sidebar = move |_| ui.update(UiState::toggle_sidebar);
    let on_nav = move |_| ui.update(UiState::close_sidebar);

    view! {
        <div class="app-shell" class:app-shell--sidebar-open=move || ui.get().sidebar_open>
            <aside class="sidebar">
                <A href=HOME_PATH attr:class="sidebar__brand">"Contygo"</A>
                <nav class="sidebar__nav" on:click=on_nav>
                    {NAV_ITEMS
                        .iter()
                        .map(|(href, label)| view! { <A href=*href attr:class="sidebar__link">{*label}</A> })
                        .collect_view()}
                </nav>
                <A href=PUBLIC_PROFILE_PATH attr:class="sidebar__public">"Ver perfil público"</A>
            </aside>
            <div class="app-shell__main">
                <header class="app-header">
                    <button class="btn btn--icon app-header__menu" title="Menú" on:click=on_toggle_sidebar>
                        "☰"
                    </button>
                    <button class="btn btn--icon" title="Cambiar tema" on:click=on_toggle_dark>
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                </header>
                <main class="app-content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
