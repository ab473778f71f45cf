//! Appointment calendar: list, create, edit, cancel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches appointments and patients on mount. Creates append the record
//! with the id the API returns; edits replace by id; deletes show an
//! editable cancellation notice for the patient before confirming.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use std::cmp::Reverse;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_api;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::field::{SelectField, TextField};
use crate::components::loader::Loader;
use crate::components::modal::{ConfirmDialog, Modal};
use crate::net::types::{Appointment, Patient};
use crate::pages::common::{load_list, reconcile_list, write_error};
use crate::state::list::{FormMode, ListState, LocalWrite, with_assigned_id};
use crate::util::dates::{format_date_dmy, parse_api_date};
use crate::util::forms::require_all;

pub const MODALITIES: &[(&str, &str)] = &[("presencial", "Presencial"), ("virtual", "Virtual")];
pub const STATUSES: &[(&str, &str)] = &[("activo", "Activo"), ("cancelado", "Cancelado"), ("terminada", "Terminada")];
const FINISHED: &str = "terminada";

/// Appointments still on the calendar, most recent date first.
pub fn visible_appointments(items: &[Appointment]) -> Vec<Appointment> {
    let mut visible: Vec<Appointment> = items.iter().filter(|a| a.status != FINISHED).cloned().collect();
    visible.sort_by_key(|a| Reverse(parse_api_date(&a.date)));
    visible
}

pub fn status_label(status: &str) -> &'static str {
    STATUSES.iter().find(|(value, _)| *value == status).map_or("Activo", |(_, label)| label)
}

/// Bind the draft to a patient picked from the list; unknown ids clear it.
pub fn select_patient(draft: &mut Appointment, patients: &[Patient], patient_id: &str) {
    match patients.iter().find(|p| p.id == patient_id) {
        Some(patient) => {
            draft.patient_id.clone_from(&patient.id);
            draft.patient_name.clone_from(&patient.name);
        }
        None => {
            draft.patient_id.clear();
            draft.patient_name.clear();
        }
    }
}

/// Patient, date, time, reason, duration and modality are required.
///
/// # Errors
///
/// Returns the message to show in the form.
pub fn validate_appointment(appointment: &Appointment) -> Result<(), &'static str> {
    require_all(&[
        &appointment.patient_id,
        &appointment.date,
        &appointment.time,
        &appointment.reason,
        &appointment.duration,
        &appointment.modality,
    ])
}

/// Notice shown to the practitioner before cancelling, addressed to the patient.
pub fn cancellation_message(appointment: &Appointment, patients: &[Patient]) -> String {
    let name = patients
        .iter()
        .find(|p| p.id == appointment.patient_id)
        .map(|p| p.name.as_str())
        .or_else(|| (!appointment.patient_name.is_empty()).then_some(appointment.patient_name.as_str()))
        .unwrap_or("Desconocido");
    format!(
        "Estimado/a {name},\n\nLe informamos que su cita del {} a las {} ha sido cancelada.\n\
         Pronto recibirá un mensaje para reprogramarla.\n\nSaludos.",
        format_date_dmy(&appointment.date),
        appointment.time,
    )
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let api = use_api();
    let state = RwSignal::new(ListState::<Appointment>::default());
    let patients = RwSignal::new(ListState::<Patient>::default());
    let draft = RwSignal::new(Appointment::default());
    let notice = RwSignal::new(String::new());

    leptos::task::spawn_local(async move {
        let client = api.get_value();
        load_list(state, client.fetch_appointments(), "citas").await;
        load_list(patients, client.fetch_patients(), "pacientes").await;
    });

    let open_create = move |_| {
        draft.set(Appointment::default());
        state.update(ListState::open_create);
    };
    let close_form = Callback::new(move |()| state.update(ListState::close_form));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let appointment = draft.get_untracked();
        if let Err(msg) = validate_appointment(&appointment) {
            state.update(|s| s.submit_failed(msg));
            return;
        }
        let editing = matches!(state.get_untracked().form, FormMode::Edit(_));
        let mut started = false;
        state.update(|s| started = s.begin_submit());
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            if editing {
                match client.edit_appointment(&appointment).await {
                    Ok(()) => state.update(|s| s.updated(appointment)),
                    Err(e) => {
                        log::error!("edit appointment failed: {e}");
                        state.update(|s| s.submit_failed(write_error("editar", "la cita")));
                    }
                }
            } else {
                match client.add_appointment(&appointment).await {
                    Ok(Some(id)) => state.update(|s| s.created(with_assigned_id(appointment, Some(id)))),
                    Ok(None) => {
                        reconcile_list(state, client.fetch_appointments(), LocalWrite::Created(appointment), "citas")
                            .await
                    }
                    Err(e) => {
                        log::error!("add appointment failed: {e}");
                        state.update(|s| s.submit_failed(write_error("agregar", "la cita")));
                    }
                }
            }
        });
    };

    let on_confirm_delete = Callback::new(move |()| {
        let Some(appointment) = state.get_untracked().pending_delete else {
            return;
        };
        let mut started = false;
        state.update(|s| started = s.begin_submit());
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            match api.get_value().delete_appointment(&appointment).await {
                Ok(()) => state.update(|s| s.removed(&appointment.id)),
                Err(e) => {
                    log::error!("delete appointment {} failed: {e}", appointment.id);
                    state.update(|s| s.submit_failed(write_error("eliminar", "la cita")));
                }
            }
        });
    });

    let patient_options = Signal::derive(move || {
        patients.get().items.into_iter().map(|p| (p.id, p.name)).collect::<Vec<_>>()
    });

    let cards = move || {
        visible_appointments(&state.get().items)
            .into_iter()
            .map(|appt| {
                let edit = appt.clone();
                let delete = appt.clone();
                view! {
                    <div class="appointment-card">
                        <p class="appointment-card__when">
                            {format!("Fecha: {} - Hora: {}", format_date_dmy(&appt.date), appt.time)}
                        </p>
                        <p><strong>"Paciente: "</strong>{appt.patient_name}</p>
                        <p><strong>"Motivo: "</strong>{appt.reason}</p>
                        <p><strong>"Duración: "</strong>{format!("{} minutos", appt.duration)}</p>
                        <p><strong>"Modalidad: "</strong>{appt.modality}</p>
                        <p><strong>"Estado: "</strong>{status_label(&appt.status)}</p>
                        <div class="appointment-card__actions">
                            <button
                                class="btn btn--link"
                                on:click=move |_| {
                                    draft.set(edit.clone());
                                    state.update(|s| s.open_edit(edit.clone()));
                                }
                            >
                                "Editar"
                            </button>
                            <button
                                class="btn btn--link btn--danger"
                                on:click=move |_| {
                                    notice.set(cancellation_message(&delete, &patients.get_untracked().items));
                                    state.update(|s| s.request_delete(delete.clone()));
                                }
                            >
                                "Eliminar"
                            </button>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Title text="Calendario | Contygo"/>
        <Breadcrumb page_name="Calendario"/>
        <div class="card">
            <div class="card__header">
                <h3>"Calendario de citas"</h3>
                <button class="btn btn--primary" on:click=open_create>"Nueva cita"</button>
            </div>
            <Show when=move || state.with(|s| s.is_stale())>
                <p class="card__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            {move || {
                let s = state.get();
                if s.loading {
                    view! { <Loader/> }.into_any()
                } else if s.items.is_empty() && s.error.is_some() && !s.form.is_open() {
                    view! { <p class="card__error">{s.error.unwrap_or_default()}</p> }.into_any()
                } else if visible_appointments(&s.items).is_empty() {
                    view! { <p class="card__empty">"No hay citas programadas."</p> }.into_any()
                } else {
                    view! { <div class="appointment-grid">{cards}</div> }.into_any()
                }
            }}
        </div>

        <Show when=move || state.with(|s| s.form.is_open())>
            <Modal
                title=Signal::derive(move || {
                    let editing = matches!(state.get().form, FormMode::Edit(_));
                    (if editing { "Editar cita" } else { "Nueva cita" }).to_owned()
                })
                on_close=close_form
            >
                <form class="form" on:submit=on_submit>
                    <SelectField
                        label="Nombre del paciente"
                        prompt="Seleccionar paciente"
                        value=Signal::derive(move || draft.get().patient_id)
                        options=patient_options
                        on_change=Callback::new(move |id: String| {
                            let list = patients.get_untracked().items;
                            draft.update(|d| select_patient(d, &list, &id));
                        })
                    />
                    <TextField
                        label="Fecha"
                        input_type="date"
                        value=Signal::derive(move || draft.get().date)
                        on_input=Callback::new(move |v| draft.update(|d| d.date = v))
                    />
                    <TextField
                        label="Hora"
                        input_type="time"
                        value=Signal::derive(move || draft.get().time)
                        on_input=Callback::new(move |v| draft.update(|d| d.time = v))
                    />
                    <TextField
                        label="Motivo de la sesión"
                        value=Signal::derive(move || draft.get().reason)
                        on_input=Callback::new(move |v| draft.update(|d| d.reason = v))
                    />
                    <TextField
                        label="Duración (minutos)"
                        input_type="number"
                        value=Signal::derive(move || draft.get().duration)
                        on_input=Callback::new(move |v| draft.update(|d| d.duration = v))
                    />
                    <SelectField
                        label="Modalidad"
                        prompt="Seleccionar modalidad"
                        value=Signal::derive(move || draft.get().modality)
                        options=Signal::derive(|| pairs(MODALITIES))
                        on_change=Callback::new(move |v| draft.update(|d| d.modality = v))
                    />
                    <SelectField
                        label="Estado de la cita"
                        value=Signal::derive(move || draft.get().status)
                        options=Signal::derive(|| pairs(STATUSES))
                        on_change=Callback::new(move |v| draft.update(|d| d.status = v))
                    />
                    <Show when=move || state.with(|s| s.error.is_some())>
                        <p class="form__error">{move || state.get().error.unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close_form.run(())>
                            "Cancelar"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || state.get().busy>
                            {move || if matches!(state.get().form, FormMode::Edit(_)) { "Actualizar" } else { "Guardar" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </Show>

        <Show when=move || state.with(|s| s.pending_delete.is_some())>
            <ConfirmDialog
                title="¿Estás seguro de que deseas eliminar esta cita?"
                message="Una vez eliminada no podrás recuperarla y deberás agendarla nuevamente. Este es el aviso para el paciente:"
                busy=Signal::derive(move || state.get().busy)
                error=Signal::derive(move || state.get().error)
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |()| state.update(ListState::cancel_delete))
            >
                <textarea
                    class="field__input"
                    rows="6"
                    prop:value=move || notice.get()
                    on:input=move |ev| notice.set(event_target_value(&ev))
                ></textarea>
            </ConfirmDialog>
        </Show>
    }
}

fn pairs(options: &[(&str, &str)]) -> Vec<(String, String)> {
    options.iter().map(|(v, l)| ((*v).to_owned(), (*l).to_owned())).collect()
}
