//! Resource library: list, upload, and share with a patient by email.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resources and patients are fetched on mount. Uploads go out as
//! multipart with the file's upper-cased extension as `type`, then the list
//! is re-fetched. Sharing opens a modal bound to one resource.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use leptos::html;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_api;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::field::{SelectField, TextArea, TextField};
use crate::components::loader::Loader;
use crate::components::modal::Modal;
use crate::net::types::{Patient, Resource, ShareMessage};
use crate::pages::common::{load_list, write_error};
use crate::state::list::ListState;
use crate::util::dates::format_date_dmy;
use crate::util::forms::{file_kind, require_all};

const BYTES_PER_MB: f64 = 1_048_576.0;
pub const NO_RECIPIENT: &str = "Paciente o recurso no seleccionado";

#[allow(clippy::cast_precision_loss)]
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

/// Type sent with an upload, derived from the chosen file name.
///
/// # Errors
///
/// Returns the message to show when no usable file is selected.
pub fn upload_kind(file_name: &str) -> Result<String, &'static str> {
    if file_name.trim().is_empty() {
        return Err("Seleccioná un archivo");
    }
    let kind = file_kind(file_name);
    if kind.is_empty() {
        return Err("El archivo no tiene extensión");
    }
    Ok(kind)
}

/// Share modal state: the resource being sent and the email envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareForm {
    pub resource: Option<Resource>,
    pub send: ShareMessage,
    pub busy: bool,
    pub error: Option<String>,
    pub sent: bool,
}

impl ShareForm {
    pub fn open(resource: Resource) -> Self {
        Self { resource: Some(resource), ..Self::default() }
    }

    pub fn is_open(&self) -> bool {
        self.resource.is_some()
    }

    /// Address the message to a patient from the list; unknown ids clear it.
    pub fn select_patient(&mut self, patients: &[Patient], patient_id: &str) {
        match patients.iter().find(|p| p.id == patient_id) {
            Some(patient) => {
                self.send.patient_id.clone_from(&patient.id);
                self.send.name.clone_from(&patient.name);
                self.send.email.clone_from(&patient.email);
            }
            None => {
                self.send.patient_id.clear();
                self.send.name.clear();
                self.send.email.clear();
            }
        }
    }

    /// Recipient and resource first, then subject and message.
    ///
    /// # Errors
    ///
    /// Returns the message to show in the modal.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.resource.is_none() || self.send.patient_id.is_empty() {
            return Err(NO_RECIPIENT);
        }
        require_all(&[&self.send.email, &self.send.subject, &self.send.message])
    }
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let api = use_api();
    let state = RwSignal::new(ListState::<Resource>::default());
    let patients = RwSignal::new(ListState::<Patient>::default());
    let share = RwSignal::new(ShareForm::default());
    let file_input = NodeRef::<html::Input>::new();
    let file_name = RwSignal::new(String::new());
    let upload_busy = RwSignal::new(false);
    let upload_error = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {
        let client = api.get_value();
        load_list(state, client.fetch_resources(), "recursos").await;
        load_list(patients, client.fetch_patients(), "pacientes").await;
    });

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if upload_busy.get_untracked() {
            return;
        }
        let kind = match upload_kind(&file_name.get_untracked()) {
            Ok(kind) => kind,
            Err(msg) => {
                upload_error.set(Some(msg.to_owned()));
                return;
            }
        };
        upload_error.set(None);
        upload_busy.set(true);
        start_upload(api, file_input, kind, state, file_name, upload_busy, upload_error);
    };

    let on_share = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = share.get_untracked();
        if form.busy {
            return;
        }
        if let Err(msg) = form.validate() {
            share.update(|s| s.error = Some(msg.to_owned()));
            return;
        }
        let Some(resource) = form.resource.clone() else {
            return;
        };
        share.update(|s| {
            s.busy = true;
            s.error = None;
        });
        leptos::task::spawn_local(async move {
            match api.get_value().share_resource(&form.send, &resource).await {
                Ok(()) => share.update(|s| {
                    s.busy = false;
                    s.sent = true;
                }),
                Err(e) => {
                    log::error!("share resource {} failed: {e}", resource.id);
                    share.update(|s| {
                        s.busy = false;
                        s.error = Some(write_error("compartir", "el recurso"));
                    });
                }
            }
        });
    };

    let close_share = Callback::new(move |()| share.set(ShareForm::default()));
    let patient_options = Signal::derive(move || {
        patients.get().items.into_iter().map(|p| (p.id, p.name)).collect::<Vec<_>>()
    });

    let rows = move || {
        state
            .get()
            .items
            .into_iter()
            .map(|resource| {
                let target = resource.clone();
                view! {
                    <tr>
                        <td>
                            <a href=resource.path target="_blank" rel="noopener">{resource.name}</a>
                        </td>
                        <td>{resource.kind}</td>
                        <td>{format_size_mb(resource.size)}</td>
                        <td>{format_date_dmy(&resource.uploaded_at)}</td>
                        <td>
                            <button
                                class="btn btn--link"
                                on:click=move |_| share.set(ShareForm::open(target.clone()))
                            >
                                "Compartir"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Title text="Recursos | Contygo"/>
        <Breadcrumb page_name="Recursos"/>
        <div class="card">
            <h3>"Subir recurso"</h3>
            <form class="form form--inline" on:submit=on_upload>
                <input
                    class="field__input"
                    type="file"
                    node_ref=file_input
                    on:change=move |ev| file_name.set(event_target_value(&ev))
                />
                <span class="form__hint">
                    {move || {
                        let kind = file_kind(&file_name.get());
                        if kind.is_empty() { String::new() } else { format!("Tipo: {kind}") }
                    }}
                </span>
                <button class="btn btn--primary" type="submit" disabled=move || upload_busy.get()>
                    {move || if upload_busy.get() { "Subiendo..." } else { "Subir" }}
                </button>
            </form>
            <Show when=move || upload_error.get().is_some()>
                <p class="form__error">{move || upload_error.get().unwrap_or_default()}</p>
            </Show>
        </div>

        <div class="card">
            <h3>"Recursos"</h3>
            {move || {
                let s = state.get();
                if s.loading {
                    view! { <Loader/> }.into_any()
                } else if let Some(err) = s.error.filter(|_| s.items.is_empty()) {
                    view! { <p class="card__error">{err}</p> }.into_any()
                } else if s.items.is_empty() {
                    view! { <p class="card__empty">"Todavía no subiste recursos."</p> }.into_any()
                } else {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Nombre"</th>
                                    <th>"Tipo"</th>
                                    <th>"Tamaño"</th>
                                    <th>"Subido"</th>
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

        <Show when=move || share.with(ShareForm::is_open)>
            <Modal
                title=Signal::derive(move || {
                    let name = share.get().resource.map(|r| r.name).unwrap_or_default();
                    format!("Compartir {name}")
                })
                on_close=close_share
            >
                <Show
                    when=move || !share.get().sent
                    fallback=move || {
                        view! {
                            <p class="form__success">"Recurso enviado al paciente."</p>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| close_share.run(())>"Cerrar"</button>
                            </div>
                        }
                    }
                >
                    <form class="form" on:submit=on_share>
                        <SelectField
                            label="Paciente"
                            prompt="Seleccionar paciente"
                            value=Signal::derive(move || share.get().send.patient_id)
                            options=patient_options
                            on_change=Callback::new(move |id: String| {
                                let list = patients.get_untracked().items;
                                share.update(|s| s.select_patient(&list, &id));
                            })
                        />
                        <TextField
                            label="Email"
                            input_type="email"
                            value=Signal::derive(move || share.get().send.email)
                            on_input=Callback::new(move |v| share.update(|s| s.send.email = v))
                        />
                        <TextField
                            label="Asunto"
                            value=Signal::derive(move || share.get().send.subject)
                            on_input=Callback::new(move |v| share.update(|s| s.send.subject = v))
                        />
                        <TextArea
                            label="Mensaje"
                            value=Signal::derive(move || share.get().send.message)
                            on_input=Callback::new(move |v| share.update(|s| s.send.message = v))
                        />
                        <Show when=move || share.with(|s| s.error.is_some())>
                            <p class="form__error">{move || share.get().error.unwrap_or_default()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| close_share.run(())>
                                "Cancelar"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || share.get().busy>
                                {move || if share.get().busy { "Enviando..." } else { "Enviar" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </Modal>
        </Show>
    }
}

#[cfg(feature = "csr")]
fn start_upload(
    api: StoredValue<crate::net::api::ApiClient>,
    input: NodeRef<html::Input>,
    kind: String,
    state: RwSignal<ListState<Resource>>,
    file_name: RwSignal<String>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    let Some(file) = input.get_untracked().and_then(|el| el.files()).and_then(|files| files.get(0)) else {
        busy.set(false);
        error.set(Some("Seleccioná un archivo".to_owned()));
        return;
    };
    leptos::task::spawn_local(async move {
        let client = api.get_value();
        match client.upload_resource(&file, &kind).await {
            Ok(()) => {
                file_name.set(String::new());
                if let Some(el) = input.get_untracked() {
                    el.set_value("");
                }
                match client.fetch_resources().await {
                    Ok(items) => state.update(|s| s.reconcile(items)),
                    Err(e) => log::warn!("re-fetch after upload failed: {e}"),
                }
            }
            Err(e) => {
                log::error!("upload resource failed: {e}");
                error.set(Some(write_error("subir", "el recurso")));
            }
        }
        busy.set(false);
    });
}

#[cfg(not(feature = "csr"))]
fn start_upload(
    _api: StoredValue<crate::net::api::ApiClient>,
    _input: NodeRef<html::Input>,
    _kind: String,
    _state: RwSignal<ListState<Resource>>,
    _file_name: RwSignal<String>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    log::debug!("file uploads need the browser build");
    busy.set(false);
    error.set(Some(write_error("subir", "el recurso")));
}
