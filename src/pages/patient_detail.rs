//! Patient detail: profile, paginated sessions, medications, shared resources.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `/get-patient-byid/:id` on mount, then the resources already shared
//! with that patient. Medication writes re-fetch the record and reconcile.

#[cfg(test)]
#[path = "patient_detail_test.rs"]
mod patient_detail_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::app::use_api;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::field::{TextArea, TextField};
use crate::components::loader::Loader;
use crate::components::modal::{ConfirmDialog, Modal};
use crate::net::error::ApiError;
use crate::net::types::{Medication, PatientRecord, Resource, SessionSummary};
use crate::pages::common::{load_error, settle_refetch, write_error};
use crate::state::list::{ListState, LocalWrite, with_assigned_id};
use crate::util::dates::format_date_dmy;
use crate::util::forms::require_all;
use crate::util::pagination::{SESSIONS_PER_PAGE, page_slice, total_pages};
use crate::util::routes::{PATIENTS_PATH, session_detail_path};

/// Sessions shown on 1-based `page`.
pub fn sessions_on_page(record: &PatientRecord, page: usize) -> Vec<SessionSummary> {
    page_slice(&record.sessions, page, SESSIONS_PER_PAGE).to_vec()
}

pub fn session_page_count(record: &PatientRecord) -> usize {
    total_pages(record.sessions.len(), SESSIONS_PER_PAGE)
}

/// Every medication field except the free-text description is required.
///
/// # Errors
///
/// Returns the message to show in the form.
pub fn validate_medication(medication: &Medication) -> Result<(), &'static str> {
    require_all(&[
        &medication.name,
        &medication.date,
        &medication.duration,
        &medication.dose,
        &medication.frequency,
    ])
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct DetailState {
    loading: bool,
    record: Option<PatientRecord>,
    error: Option<String>,
}

/// Settle the medication list after an accepted add.
///
/// The added medication is kept locally when the patient can't be re-read.
pub fn medications_after_add(
    meds: &mut ListState<Medication>,
    fetched: Result<Option<PatientRecord>, ApiError>,
    added: Medication,
    patient_id: &str,
) {
    let fetched = match fetched {
        Ok(Some(record)) => Ok(record.medications),
        Ok(None) => Err(ApiError::Shape(format!("patient {patient_id} missing after adding a medication"))),
        Err(e) => Err(e),
    };
    settle_refetch(meds, fetched, LocalWrite::Created(added), "los fármacos");
}

#[component]
pub fn PatientDetailPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let patient_id = move || params.read().get("patient_id").unwrap_or_default();

    let detail = RwSignal::new(DetailState { loading: true, ..DetailState::default() });
    let meds = RwSignal::new(ListState::<Medication>::default());
    let shared = RwSignal::new(ListState::<Resource>::default());
    let page = RwSignal::new(1_usize);
    let med_draft = RwSignal::new(Medication::for_patient(""));

    let id = patient_id();
    leptos::task::spawn_local(async move {
        let client = api.get_value();
        match client.fetch_patient(&id).await {
            Ok(Some(record)) => {
                meds.update(|s| s.loaded(record.medications.clone()));
                match client.fetch_patient_resources(&record).await {
                    Ok(items) => shared.update(|s| s.loaded(items)),
                    Err(e) => {
                        log::error!("loading shared resources for {id} failed: {e}");
                        shared.update(|s| s.load_failed(load_error("los recursos")));
                    }
                }
                detail.set(DetailState { loading: false, record: Some(record), error: None });
            }
            Ok(None) => detail.set(DetailState { loading: false, record: None, error: None }),
            Err(e) => {
                log::error!("loading patient {id} failed: {e}");
                detail.set(DetailState { loading: false, record: None, error: Some(load_error("el paciente")) });
            }
        }
    });

    let open_med_form = move |_| {
        med_draft.set(Medication::for_patient(&patient_id()));
        meds.update(ListState::open_create);
    };
    let close_med_form = Callback::new(move |()| meds.update(ListState::close_form));

    let on_med_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let medication = med_draft.get_untracked();
        if let Err(msg) = validate_medication(&medication) {
            meds.update(|s| s.submit_failed(msg));
            return;
        }
        let mut started = false;
        meds.update(|s| started = s.begin_submit());
        if !started {
            return;
        }
        let id = patient_id();
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            match client.add_medication(&medication).await {
                Ok(assigned) => {
                    let added = with_assigned_id(medication, assigned);
                    let fetched = client.fetch_patient(&id).await;
                    meds.update(|s| medications_after_add(s, fetched, added, &id));
                }
                Err(e) => {
                    log::error!("add medication failed: {e}");
                    meds.update(|s| s.submit_failed(write_error("agregar", "el fármaco")));
                }
            }
        });
    };

    let on_confirm_med_delete = Callback::new(move |()| {
        let Some(medication) = meds.get_untracked().pending_delete else {
            return;
        };
        let mut started = false;
        meds.update(|s| started = s.begin_submit());
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            match api.get_value().delete_medication(&medication).await {
                Ok(()) => meds.update(|s| s.removed(&medication.id)),
                Err(e) => {
                    log::error!("delete medication failed: {e}");
                    meds.update(|s| s.submit_failed(write_error("eliminar", "el fármaco")));
                }
            }
        });
    });

    let on_confirm_unshare = Callback::new(move |()| {
        let Some(resource) = shared.get_untracked().pending_delete else {
            return;
        };
        let Some(record) = detail.get_untracked().record else {
            return;
        };
        let mut started = false;
        shared.update(|s| started = s.begin_submit());
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            match api.get_value().remove_patient_resource(&record, &resource).await {
                Ok(()) => shared.update(|s| s.removed(&resource.id)),
                Err(e) => {
                    log::error!("removing shared resource failed: {e}");
                    shared.update(|s| s.submit_failed(write_error("quitar", "el recurso")));
                }
            }
        });
    });

    let session_rows = move || {
        let Some(record) = detail.get().record else {
            return Vec::new();
        };
        let pid = record.id.clone();
        sessions_on_page(&record, page.get())
            .into_iter()
            .map(|session| {
                let target = session_detail_path(&pid, &session.id);
                view! {
                    <tr class="table__row">
                        <td>
                            <A href=target>{format_date_dmy(&session.date)}</A>
                        </td>
                        <td>{session.reason}</td>
                        <td>{session.time}</td>
                        <td>{session.modality}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    let page_count = move || detail.with(|d| d.record.as_ref().map_or(1, session_page_count));

    let med_rows = move || {
        meds.get()
            .items
            .into_iter()
            .map(|m| {
                let delete = m.clone();
                view! {
                    <tr>
                        <td>{m.name}</td>
                        <td>{m.dose}</td>
                        <td>{m.frequency}</td>
                        <td>{format_date_dmy(&m.date)}</td>
                        <td>{m.duration}</td>
                        <td>{m.status}</td>
                        <td>
                            <button
                                class="btn btn--link btn--danger"
                                on:click=move |_| meds.update(|s| s.request_delete(delete.clone()))
                            >
                                "Eliminar"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    let shared_rows = move || {
        shared
            .get()
            .items
            .into_iter()
            .map(|r| {
                let remove = r.clone();
                view! {
                    <tr>
                        <td>{r.name}</td>
                        <td>{r.kind}</td>
                        <td>{format_date_dmy(&r.uploaded_at)}</td>
                        <td>
                            <button
                                class="btn btn--link btn--danger"
                                on:click=move |_| shared.update(|s| s.request_delete(remove.clone()))
                            >
                                "Quitar"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Title text="Paciente | Contygo"/>
        <Breadcrumb page_name="Paciente" parent=(PATIENTS_PATH.to_owned(), "Pacientes".to_owned())/>
        {move || {
            let d = detail.get();
            if d.loading {
                return view! { <Loader/> }.into_any();
            }
            if let Some(error) = d.error {
                return view! { <p class="card__error">{error}</p> }.into_any();
            }
            let Some(record) = d.record else {
                return view! { <p class="card__empty">"No hay datos del paciente."</p> }.into_any();
            };
            view! {
                <div class="card">
                    <h3>"Información del paciente"</h3>
                    <dl class="detail-list">
                        <dt>"Nombre"</dt><dd>{record.name}</dd>
                        <dt>"Edad"</dt><dd>{record.age}</dd>
                        <dt>"Teléfono"</dt><dd>{record.phone}</dd>
                        <dt>"Email"</dt><dd>{record.email}</dd>
                        <dt>"Género"</dt><dd>{record.gender}</dd>
                    </dl>
                </div>
            }
                .into_any()
        }}

        <Show when=move || detail.with(|d| d.record.is_some())>
            <div class="card">
                <h3>"Sesiones"</h3>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Fecha"</th>
                            <th>"Motivo"</th>
                            <th>"Hora"</th>
                            <th>"Modalidad"</th>
                        </tr>
                    </thead>
                    <tbody>{session_rows}</tbody>
                </table>
                <div class="pagination">
                    <button
                        class="btn"
                        disabled=move || page.get() <= 1
                        on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        "Anterior"
                    </button>
                    <span>{move || format!("Página {} de {}", page.get(), page_count())}</span>
                    <button
                        class="btn"
                        disabled=move || page.get() >= page_count()
                        on:click=move |_| page.update(|p| *p = (*p + 1).min(page_count()))
                    >
                        "Siguiente"
                    </button>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3>"Fármacos"</h3>
                    <button class="btn btn--primary" on:click=open_med_form>"+ Agregar fármaco"</button>
                </div>
                <Show when=move || meds.with(|s| s.is_stale())>
                    <p class="card__error">{move || meds.get().error.unwrap_or_default()}</p>
                </Show>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Dosis"</th>
                            <th>"Frecuencia"</th>
                            <th>"Inicio"</th>
                            <th>"Duración"</th>
                            <th>"Estado"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{med_rows}</tbody>
                </table>
            </div>

            <div class="card">
                <h3>"Materiales brindados"</h3>
                {move || {
                    let s = shared.get();
                    if s.loading {
                        view! { <Loader/> }.into_any()
                    } else if s.items.is_empty() {
                        view! { <p class="card__empty">"Todavía no se compartieron recursos."</p> }.into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Nombre"</th>
                                        <th>"Tipo"</th>
                                        <th>"Fecha"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>{shared_rows}</tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}
            </div>
        </Show>

        <Show when=move || meds.with(|s| s.form.is_open())>
            <Modal title="Agregar fármaco".to_owned() on_close=close_med_form>
                <form class="form" on:submit=on_med_submit>
                    <TextField
                        label="Nombre"
                        value=Signal::derive(move || med_draft.get().name)
                        on_input=Callback::new(move |v| med_draft.update(|d| d.name = v))
                    />
                    <TextField
                        label="Fecha de inicio"
                        input_type="date"
                        value=Signal::derive(move || med_draft.get().date)
                        on_input=Callback::new(move |v| med_draft.update(|d| d.date = v))
                    />
                    <TextArea
                        label="Descripción"
                        value=Signal::derive(move || med_draft.get().description)
                        on_input=Callback::new(move |v| med_draft.update(|d| d.description = v))
                    />
                    <TextField
                        label="Duración"
                        value=Signal::derive(move || med_draft.get().duration)
                        on_input=Callback::new(move |v| med_draft.update(|d| d.duration = v))
                    />
                    <TextField
                        label="Dosis"
                        value=Signal::derive(move || med_draft.get().dose)
                        on_input=Callback::new(move |v| med_draft.update(|d| d.dose = v))
                    />
                    <TextField
                        label="Frecuencia"
                        value=Signal::derive(move || med_draft.get().frequency)
                        on_input=Callback::new(move |v| med_draft.update(|d| d.frequency = v))
                    />
                    <Show when=move || meds.with(|s| s.error.is_some())>
                        <p class="form__error">{move || meds.get().error.unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close_med_form.run(())>
                            "Cancelar"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || meds.get().busy>
                            "Guardar"
                        </button>
                    </div>
                </form>
            </Modal>
        </Show>

        <Show when=move || meds.with(|s| s.pending_delete.is_some())>
            <ConfirmDialog
                title="¿Eliminar fármaco?"
                message="El fármaco dejará de figurar en la ficha del paciente."
                busy=Signal::derive(move || meds.get().busy)
                error=Signal::derive(move || meds.get().error)
                on_confirm=on_confirm_med_delete
                on_cancel=Callback::new(move |()| meds.update(ListState::cancel_delete))
            />
        </Show>

        <Show when=move || shared.with(|s| s.pending_delete.is_some())>
            <ConfirmDialog
                title="¿Quitar recurso?"
                message="El paciente dejará de tener acceso a este recurso."
                confirm_label="Quitar"
                busy=Signal::derive(move || shared.get().busy)
                error=Signal::derive(move || shared.get().error)
                on_confirm=on_confirm_unshare
                on_cancel=Callback::new(move |()| shared.update(ListState::cancel_delete))
            />
        </Show>
    }
}
