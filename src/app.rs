//! Root application component: context providers, session gate, routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates every app-wide context object (configuration, API client,
//! session state and gate, UI chrome). `SessionGateView` runs the single
//! session check and mounts the public or the protected route tree.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::app_shell::AppShell;
use crate::components::loader::Loader;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    billing::BillingPage, calendar::CalendarPage, dashboard::DashboardPage, not_found::NotFoundPage,
    patient_detail::PatientDetailPage, patients::PatientsPage, payment_return::PaymentReturnPage,
    profile_settings::ProfileSettingsPage, public_profile::PublicProfilePage, resources::ResourcesPage,
    session_detail::SessionDetailPage, sign_in::SignInPage, sign_up::SignUpPage, wait_list::WaitListPage,
};
use crate::state::session::{SessionGate, SessionState, SessionStatus};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// API client from context, wrapped for cheap capture in event handlers.
pub fn use_api() -> StoredValue<ApiClient> {
    StoredValue::new(expect_context::<ApiClient>())
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);

    provide_context(ApiClient::new(&config));
    provide_context(config);
    provide_context(SessionGate::new());
    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(UiState::with_dark_mode(dark)));

    view! {
        <Title text="Contygo"/>
        <Router>
            <SessionGateView/>
        </Router>
    }
}

/// Runs the session check once and mounts the matching route tree.
#[component]
fn SessionGateView() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let gate = expect_context::<SessionGate>();
    let api = use_api();
    let location = use_location();
    let navigate = use_navigate();

    if let Some(ticket) = gate.begin_check() {
        leptos::task::spawn_local(async move {
            let outcome = api.get_value().check_auth().await;
            let path = location.pathname.get_untracked();
            let decision = ticket.resolve(outcome, &path);
            if let Some(target) = decision.redirect {
                log::info!("no session at {path}; redirecting to {target}");
                navigate(target, NavigateOptions { replace: true, ..Default::default() });
            }
            session.update(|s| {
                if !s.settle(decision.status) {
                    log::warn!("session already settled as {:?}", s.status);
                }
            });
        });
    }

    view! {
        <Show when=move || session.with(SessionState::is_settled) fallback=|| view! { <Loader/> }>
            {move || {
                if session.with(|s| s.status == SessionStatus::Authenticated) {
                    view! { <ProtectedRoutes/> }.into_any()
                } else {
                    view! { <PublicRoutes/> }.into_any()
                }
            }}
        </Show>
    }
}

#[component]
fn PublicRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage/> }>
            <Route path=(StaticSegment("auth"), StaticSegment("signin")) view=SignInPage/>
            <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignUpPage/>
            <Route path=StaticSegment("p") view=PublicProfilePage/>
            <Route path=(StaticSegment("p"), StaticSegment("payment")) view=PaymentReturnPage/>
        </Routes>
    }
}

#[component]
fn ProtectedRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage/> }>
            <Route path=StaticSegment("p") view=PublicProfilePage/>
            <Route path=(StaticSegment("p"), StaticSegment("payment")) view=PaymentReturnPage/>
            <ParentRoute path=StaticSegment("") view=AppShell>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("patients") view=PatientsPage/>
                <Route path=(StaticSegment("patients"), ParamSegment("patient_id")) view=PatientDetailPage/>
                <Route
                    path=(StaticSegment("patients"), ParamSegment("patient_id"), ParamSegment("session_id"))
                    view=SessionDetailPage
                />
                <Route path=StaticSegment("calendar") view=CalendarPage/>
                <Route path=StaticSegment("resources") view=ResourcesPage/>
                <Route path=StaticSegment("billing") view=BillingPage/>
                <Route path=StaticSegment("waitlist") view=WaitListPage/>
                <Route path=StaticSegment("profile") view=ProfileSettingsPage/>
            </ParentRoute>
        </Routes>
    }
}
