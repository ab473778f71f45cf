//! Wait list of booking requests from the public profile.
//!
//! Accepting turns the booking into a patient, rejecting discards it; either
//! way the booking leaves the list once the API confirms.

#[cfg(test)]
#[path = "wait_list_test.rs"]
mod wait_list_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_api;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::loader::Loader;
use crate::components::modal::ConfirmDialog;
use crate::net::types::Booking;
use crate::pages::common::{load_list, write_error};
use crate::state::list::ListState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingDecision {
    Accept,
    Reject,
}

impl BookingDecision {
    pub fn title(self) -> &'static str {
        match self {
            Self::Accept => "¿Estás seguro de que deseas aceptar esta solicitud?",
            Self::Reject => "¿Estás seguro de que deseas rechazar esta solicitud?",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Accept => "Agregaremos este paciente al sistema.",
            Self::Reject => "La solicitud se eliminará de la lista de espera.",
        }
    }

    pub fn confirm_label(self) -> &'static str {
        match self {
            Self::Accept => "Aceptar",
            Self::Reject => "Rechazar",
        }
    }

    /// Inline error when the API refuses the decision.
    pub fn failure(self) -> String {
        match self {
            Self::Accept => write_error("aceptar", "la solicitud"),
            Self::Reject => write_error("rechazar", "la solicitud"),
        }
    }
}

#[component]
pub fn WaitListPage() -> impl IntoView {
    let api = use_api();
    let state = RwSignal::new(ListState::<Booking>::default());
    let decision = RwSignal::new(BookingDecision::Accept);

    leptos::task::spawn_local(async move {
        load_list(state, api.get_value().fetch_bookings(), "solicitudes").await;
    });

    let on_confirm = Callback::new(move |()| {
        let Some(booking) = state.get_untracked().pending_delete else {
            return;
        };
        let action = decision.get_untracked();
        let mut started = false;
        state.update(|s| started = s.begin_submit());
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            let result = match action {
                BookingDecision::Accept => client.accept_booking(&booking).await,
                BookingDecision::Reject => client.reject_booking(&booking).await,
            };
            match result {
                Ok(()) => {
                    log::info!("booking {} {:?}", booking.id, action);
                    state.update(|s| s.removed(&booking.id));
                }
                Err(e) => {
                    log::error!("booking {} {:?} failed: {e}", booking.id, action);
                    state.update(|s| s.submit_failed(action.failure()));
                }
            }
        });
    });

    let ask = move |booking: Booking, action: BookingDecision| {
        decision.set(action);
        state.update(|s| s.request_delete(booking));
    };

    let rows = move || {
        state
            .get()
            .items
            .into_iter()
            .map(|booking| {
                let accept = booking.clone();
                let reject = booking.clone();
                view! {
                    <tr>
                        <td>{booking.name}</td>
                        <td>{booking.age}</td>
                        <td>{booking.gender}</td>
                        <td>{booking.email}</td>
                        <td>{booking.phone}</td>
                        <td class="table__message">{booking.message}</td>
                        <td>
                            <button
                                class="btn btn--link"
                                on:click=move |_| ask(accept.clone(), BookingDecision::Accept)
                            >
                                "Aceptar"
                            </button>
                            <button
                                class="btn btn--link btn--danger"
                                on:click=move |_| ask(reject.clone(), BookingDecision::Reject)
                            >
                                "Rechazar"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Title text="Lista de espera | Contygo"/>
        <Breadcrumb page_name="Lista de espera"/>
        <div class="card">
            <h3>"Solicitudes pendientes"</h3>
            {move || {
                let s = state.get();
                if s.loading {
                    view! { <Loader/> }.into_any()
                } else if let Some(err) = s.error.clone().filter(|_| s.items.is_empty()) {
                    view! { <p class="card__error">{err}</p> }.into_any()
                } else if s.items.is_empty() {
                    view! { <p class="card__empty">"No hay solicitudes en espera."</p> }.into_any()
                } else {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Nombre"</th>
                                    <th>"Edad"</th>
                                    <th>"Género"</th>
                                    <th>"Email"</th>
                                    <th>"Teléfono"</th>
                                    <th>"Mensaje"</th>
                                    <th>"Acciones"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>

        <Show when=move || state.with(|s| s.pending_delete.is_some())>
            {move || {
                let action = decision.get();
                view! {
                    <ConfirmDialog
                        title=action.title()
                        message=action.message()
                        confirm_label=action.confirm_label()
                        busy=Signal::derive(move || state.get().busy)
                        error=Signal::derive(move || state.get().error)
                        on_confirm=on_confirm
                        on_cancel=Callback::new(move |()| state.update(ListState::cancel_delete))
                    />
                }
            }}
        </Show>
    }
}
