//! Home overview: counts of patients, upcoming appointments and pending
//! bookings, each linking into its view.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::app::use_api;
use crate::components::breadcrumb::Breadcrumb;
use crate::net::error::ApiError;
use crate::pages::calendar::visible_appointments;
use crate::util::routes::{CALENDAR_PATH, PATIENTS_PATH, WAIT_LIST_PATH};

/// Tile counts; `None` until loaded or when the fetch failed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overview {
    pub patients: Option<usize>,
    pub appointments: Option<usize>,
    pub bookings: Option<usize>,
}

pub fn count_label(count: Option<usize>) -> String {
    count.map_or_else(|| "-".to_owned(), |n| n.to_string())
}

fn counted<T>(what: &str, result: Result<Vec<T>, ApiError>) -> Option<usize> {
    match result {
        Ok(items) => Some(items.len()),
        Err(e) => {
            log::error!("dashboard {what} count failed: {e}");
            None
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let overview = RwSignal::new(Overview::default());

    leptos::task::spawn_local(async move {
        let client = api.get_value();
        let patients = counted("patients", client.fetch_patients().await);
        overview.update(|o| o.patients = patients);
        let appointments = counted(
            "appointments",
            client.fetch_appointments().await.map(|items| visible_appointments(&items)),
        );
        overview.update(|o| o.appointments = appointments);
        let bookings = counted("bookings", client.fetch_bookings().await);
        overview.update(|o| o.bookings = bookings);
    });

    view! {
        <Title text="Inicio | Contygo"/>
        <Breadcrumb page_name="Inicio"/>
        <div class="tiles">
            <A href=PATIENTS_PATH attr:class="tile">
                <span class="tile__count">{move || count_label(overview.get().patients)}</span>
                <span class="tile__label">"Pacientes"</span>
            </A>
            <A href=CALENDAR_PATH attr:class="tile">
                <span class="tile__count">{move || count_label(overview.get().appointments)}</span>
                <span class="tile__label">"Citas programadas"</span>
            </A>
            <A href=WAIT_LIST_PATH attr:class="tile">
                <span class="tile__count">{move || count_label(overview.get().bookings)}</span>
                <span class="tile__label">"Solicitudes en espera"</span>
            </A>
        </div>
    }
}
