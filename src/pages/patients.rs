//! Patient list with create, edit, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/get-patients` on mount. Creates append the returned record,
//! edits re-fetch and reconcile, deletes go through a confirmation dialog.
//! Row clicks open the patient detail route.

#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_api;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::field::{SelectField, TextArea, TextField, same_options};
use crate::components::loader::Loader;
use crate::components::modal::{ConfirmDialog, Modal};
use crate::net::types::Patient;
use crate::pages::common::{load_error, load_list, reconcile_list, write_error};
use crate::state::list::{FormMode, ListState, LocalWrite, with_assigned_id};
use crate::util::forms::require_all;
use crate::util::routes::patient_detail_path;

pub const GENDERS: &[&str] = &["masculino", "femenino", "otro"];

/// Blank patient for the create form.
pub fn new_patient_draft() -> Patient {
    Patient { gender: GENDERS[0].to_owned(), ..Patient::default() }
}

/// Name, age, email and phone are required.
///
/// # Errors
///
/// Returns the message to show in the form.
pub fn validate_patient(patient: &Patient) -> Result<(), &'static str> {
    require_all(&[&patient.name, &patient.age, &patient.email, &patient.phone])
}

pub fn form_title(form: &FormMode<Patient>) -> &'static str {
    match form {
        FormMode::Edit(_) => "Editar paciente",
        _ => "Agregar paciente",
    }
}

#[component]
pub fn PatientsPage() -> impl IntoView {
    let api = use_api();
    let navigate = StoredValue::new_local(use_navigate());
    let state = RwSignal::new(ListState::<Patient>::default());
    let draft = RwSignal::new(new_patient_draft());

    leptos::task::spawn_local(async move {
        load_list(state, api.get_value().fetch_patients(), "pacientes").await;
    });

    let open_create = move |_| {
        draft.set(new_patient_draft());
        state.update(ListState::open_create);
    };
    let close_form = Callback::new(move |()| state.update(ListState::close_form));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let patient = draft.get_untracked();
        if let Err(msg) = validate_patient(&patient) {
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
                match client.edit_patient(&patient).await {
                    Ok(()) => {
                        reconcile_list(state, client.fetch_patients(), LocalWrite::Updated(patient), "pacientes").await
                    }
                    Err(e) => {
                        log::error!("edit patient failed: {e}");
                        state.update(|s| s.submit_failed(write_error("actualizar", "el paciente")));
                    }
                }
            } else {
                match client.add_patient(&patient).await {
                    Ok(Some(id)) => state.update(|s| s.created(with_assigned_id(patient, Some(id)))),
                    Ok(None) => {
                        reconcile_list(state, client.fetch_patients(), LocalWrite::Created(patient), "pacientes").await
                    }
                    Err(e) => {
                        log::error!("add patient failed: {e}");
                        state.update(|s| s.submit_failed(write_error("agregar", "el paciente")));
                    }
                }
            }
        });
    };

    let on_confirm_delete = Callback::new(move |()| {
        let Some(patient) = state.get_untracked().pending_delete else {
            return;
        };
        let mut started = false;
        state.update(|s| started = s.begin_submit());
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            match api.get_value().delete_patient(&patient).await {
                Ok(()) => state.update(|s| s.removed(&patient.id)),
                Err(e) => {
                    log::error!("delete patient {} failed: {e}", patient.id);
                    state.update(|s| s.submit_failed(write_error("eliminar", "el paciente")));
                }
            }
        });
    });
    let on_cancel_delete = Callback::new(move |()| state.update(ListState::cancel_delete));

    let rows = move || {
        state
            .get()
            .items
            .into_iter()
            .map(|p| {
                let open = patient_detail_path(&p.id);
                let edit = p.clone();
                let delete = p.clone();
                view! {
                    <tr
                        class="table__row table__row--link"
                        on:click=move |_| navigate.with_value(|nav| nav(&open, NavigateOptions::default()))
                    >
                        <td>{p.name}</td>
                        <td>{p.age}</td>
                        <td>{p.gender}</td>
                        <td>{p.email}</td>
                        <td>{p.phone}</td>
                        <td class="table__actions" on:click=move |ev| ev.stop_propagation()>
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
                                on:click=move |_| state.update(|s| s.request_delete(delete.clone()))
                            >
                                "Eliminar"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Title text="Pacientes | Contygo"/>
        <Breadcrumb page_name="Pacientes"/>
        <div class="card">
            <div class="card__header">
                <h3>"Lista de pacientes"</h3>
                <button class="btn btn--primary" on:click=open_create>"+ Agregar paciente"</button>
            </div>
            <Show when=move || state.with(|s| s.is_stale())>
                <p class="card__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            {move || {
                let s = state.get();
                if s.loading {
                    view! { <Loader/> }.into_any()
                } else if s.items.is_empty() && s.error.is_some() && !s.form.is_open() {
                    view! { <p class="card__error">{s.error.unwrap_or_else(|| load_error("pacientes"))}</p> }.into_any()
                } else if s.items.is_empty() {
                    view! { <p class="card__empty">"No hay pacientes registrados."</p> }.into_any()
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

        <Show when=move || state.with(|s| s.form.is_open())>
            <Modal
                title=Signal::derive(move || form_title(&state.get().form).to_owned())
                on_close=close_form
            >
                <form class="form" on:submit=on_submit>
                    <TextField
                        label="Nombre"
                        value=Signal::derive(move || draft.get().name)
                        on_input=Callback::new(move |v| draft.update(|d| d.name = v))
                    />
                    <TextField
                        label="Edad"
                        value=Signal::derive(move || draft.get().age)
                        on_input=Callback::new(move |v| draft.update(|d| d.age = v))
                    />
                    <SelectField
                        label="Género"
                        value=Signal::derive(move || draft.get().gender)
                        options=Signal::derive(|| same_options(GENDERS))
                        on_change=Callback::new(move |v| draft.update(|d| d.gender = v))
                    />
                    <TextField
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || draft.get().email)
                        on_input=Callback::new(move |v| draft.update(|d| d.email = v))
                    />
                    <TextField
                        label="Teléfono"
                        value=Signal::derive(move || draft.get().phone)
                        on_input=Callback::new(move |v| draft.update(|d| d.phone = v))
                    />
                    <TextArea
                        label="Motivo de consulta"
                        value=Signal::derive(move || draft.get().message)
                        on_input=Callback::new(move |v| draft.update(|d| d.message = v))
                    />
                    <Show when=move || state.with(|s| s.error.is_some())>
                        <p class="form__error">{move || state.get().error.unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close_form.run(())>
                            "Cancelar"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || state.get().busy>
                            {move || if state.get().busy { "Guardando..." } else { "Guardar" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </Show>

        <Show when=move || state.with(|s| s.pending_delete.is_some())>
            <ConfirmDialog
                title="¿Eliminar paciente?"
                message="Se eliminará el paciente y su historial. Esta acción no se puede deshacer."
                busy=Signal::derive(move || state.get().busy)
                error=Signal::derive(move || state.get().error)
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
            />
        </Show>
    }
}
