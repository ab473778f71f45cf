//! Billing: payment links for patients.
//!
//! SYSTEM CONTEXT
//! ==============
//! Payments and patients are fetched on mount. Creating a payment asks the
//! API for a checkout link, shows it read-only for the practitioner to copy,
//! and re-fetches the list. Any listed payment can be emailed to a patient.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_api;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::field::{SelectField, TextField, same_options};
use crate::components::loader::Loader;
use crate::components::modal::Modal;
use crate::net::types::{Buyer, Patient, Payment};
use crate::pages::common::{load_list, reconcile_list, write_error};
use crate::state::list::{ListState, LocalWrite};
use crate::util::dates::{format_millis_dmy, now_millis};
use crate::util::forms::require_all;

pub const MODALITIES: &[&str] = &["Presencial", "Virtual"];

pub fn new_payment_draft() -> Payment {
    Payment { modality: MODALITIES[0].to_owned(), ..Payment::default() }
}

/// Bill the payment to a patient from the list; unknown ids clear the payer.
pub fn select_payer(draft: &mut Payment, patients: &[Patient], patient_id: &str) {
    match patients.iter().find(|p| p.id == patient_id) {
        Some(patient) => {
            draft.patient_id.clone_from(&patient.id);
            draft.name.clone_from(&patient.name);
            draft.buyer = Buyer { email: patient.email.clone(), name: patient.name.clone(), date: String::new() };
        }
        None => {
            draft.patient_id.clear();
            draft.name.clear();
            draft.buyer = Buyer::default();
        }
    }
}

/// Patient name, descriptor and sessions are required.
///
/// # Errors
///
/// Returns the message to show in the form.
pub fn validate_payment(payment: &Payment) -> Result<(), &'static str> {
    require_all(&[&payment.name, &payment.descriptor, &payment.sessions])
}

/// The payment as sent, stamped with the moment it was issued.
pub fn issued_at(mut payment: Payment, now_millis: i64) -> Payment {
    payment.date = now_millis;
    payment
}

pub fn with_link(mut payment: Payment, link: Option<&str>) -> Payment {
    if let Some(link) = link {
        payment.path = link.to_owned();
    }
    payment
}

/// Share modal: the payment to send and the chosen recipient.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentShare {
    pub payment: Option<Payment>,
    pub patient_id: String,
    pub busy: bool,
    pub error: Option<String>,
    pub sent: bool,
}

impl PaymentShare {
    pub fn open(payment: Payment) -> Self {
        let patient_id = payment.patient_id.clone();
        Self { payment: Some(payment), patient_id, ..Self::default() }
    }

    pub fn is_open(&self) -> bool {
        self.payment.is_some()
    }

    /// The recipient record and payment, if both are resolved.
    pub fn target(&self, patients: &[Patient]) -> Option<(Patient, Payment)> {
        let payment = self.payment.clone()?;
        let patient = patients.iter().find(|p| p.id == self.patient_id)?.clone();
        Some((patient, payment))
    }
}

#[component]
pub fn BillingPage() -> impl IntoView {
    let api = use_api();
    let state = RwSignal::new(ListState::<Payment>::default());
    let patients = RwSignal::new(ListState::<Patient>::default());
    let draft = RwSignal::new(new_payment_draft());
    let link = RwSignal::new(None::<String>);
    let share = RwSignal::new(PaymentShare::default());

    leptos::task::spawn_local(async move {
        let client = api.get_value();
        load_list(state, client.fetch_payments(), "pagos").await;
        load_list(patients, client.fetch_patients(), "pacientes").await;
    });

    let patient_options = Signal::derive(move || {
        patients.get().items.into_iter().map(|p| (p.id, p.name)).collect::<Vec<_>>()
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payment = issued_at(draft.get_untracked(), now_millis());
        if let Err(msg) = validate_payment(&payment) {
            state.update(|s| s.submit_failed(msg));
            return;
        }
        let mut started = false;
        state.update(|s| started = s.begin_submit());
        if !started {
            return;
        }
        link.set(None);
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            match client.create_payment_link(&payment).await {
                Ok(url) => {
                    if url.is_none() {
                        log::warn!("payment created without a checkout link");
                    }
                    link.set(url.clone());
                    draft.set(new_payment_draft());
                    let local = LocalWrite::Created(with_link(payment, url.as_deref()));
                    reconcile_list(state, client.fetch_payments(), local, "pagos").await;
                }
                Err(e) => {
                    log::error!("create payment link failed: {e}");
                    state.update(|s| s.submit_failed(write_error("generar", "el link de pago")));
                }
            }
        });
    };

    let on_share = move |_| {
        let form = share.get_untracked();
        if form.busy {
            return;
        }
        let Some((patient, payment)) = form.target(&patients.get_untracked().items) else {
            share.update(|s| s.error = Some("Seleccioná un paciente".to_owned()));
            return;
        };
        share.update(|s| {
            s.busy = true;
            s.error = None;
        });
        leptos::task::spawn_local(async move {
            match api.get_value().share_payment(&patient, &payment).await {
                Ok(()) => share.update(|s| {
                    s.busy = false;
                    s.sent = true;
                }),
                Err(e) => {
                    log::error!("share payment {} failed: {e}", payment.id);
                    share.update(|s| {
                        s.busy = false;
                        s.error = Some(write_error("enviar", "el pago"));
                    });
                }
            }
        });
    };
    let close_share = Callback::new(move |()| share.set(PaymentShare::default()));

    let rows = move || {
        state
            .get()
            .items
            .into_iter()
            .map(|payment| {
                let target = payment.clone();
                view! {
                    <tr>
                        <td>{payment.name}</td>
                        <td>{payment.descriptor}</td>
                        <td>{payment.sessions}</td>
                        <td>{payment.price}</td>
                        <td>{format_millis_dmy(payment.date)}</td>
                        <td>
                            <a href=payment.path target="_blank" rel="noopener">"Link"</a>
                        </td>
                        <td>
                            <button
                                class="btn btn--link"
                                on:click=move |_| share.set(PaymentShare::open(target.clone()))
                            >
                                "Enviar"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Title text="Facturación | Contygo"/>
        <Breadcrumb page_name="Facturación"/>
        <div class="card">
            <h3>"Generar link de pago"</h3>
            <form class="form" on:submit=on_create>
                <SelectField
                    label="Nombre del paciente"
                    prompt="Seleccionar paciente"
                    value=Signal::derive(move || draft.get().patient_id)
                    options=patient_options
                    on_change=Callback::new(move |id: String| {
                        let list = patients.get_untracked().items;
                        draft.update(|d| select_payer(d, &list, &id));
                    })
                />
                <TextField
                    label="Cantidad de sesiones"
                    input_type="number"
                    value=Signal::derive(move || draft.get().sessions)
                    on_input=Callback::new(move |v| draft.update(|d| d.sessions = v))
                />
                <TextField
                    label="Precio"
                    input_type="number"
                    value=Signal::derive(move || draft.get().price)
                    on_input=Callback::new(move |v| draft.update(|d| d.price = v))
                />
                <TextField
                    label="Descriptor"
                    placeholder="Ej: Sesiones de marzo"
                    value=Signal::derive(move || draft.get().descriptor)
                    on_input=Callback::new(move |v| draft.update(|d| d.descriptor = v))
                />
                <SelectField
                    label="Modalidad"
                    value=Signal::derive(move || draft.get().modality)
                    options=Signal::derive(|| same_options(MODALITIES))
                    on_change=Callback::new(move |v| draft.update(|d| d.modality = v))
                />
                <Show when=move || state.with(|s| s.error.is_some() && !s.loading)>
                    <p class="form__error">{move || state.get().error.unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || state.get().busy>
                    {move || if state.get().busy { "Generando..." } else { "Generar link" }}
                </button>
            </form>
            <Show when=move || link.get().is_some()>
                <label class="field">
                    <span class="field__label">"Link para enviar al paciente:"</span>
                    <input class="field__input" type="text" readonly prop:value=move || link.get().unwrap_or_default()/>
                </label>
            </Show>
        </div>

        <div class="card">
            <h3>"Pagos"</h3>
            {move || {
                let s = state.get();
                if s.loading {
                    view! { <Loader/> }.into_any()
                } else if s.items.is_empty() {
                    view! { <p class="card__empty">"No hay pagos registrados."</p> }.into_any()
                } else {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Paciente"</th>
                                    <th>"Descriptor"</th>
                                    <th>"Sesiones"</th>
                                    <th>"Precio"</th>
                                    <th>"Fecha"</th>
                                    <th>"Link"</th>
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

        <Show when=move || share.with(PaymentShare::is_open)>
            <Modal title="Enviar pago al paciente" on_close=close_share>
                <Show
                    when=move || !share.get().sent
                    fallback=move || {
                        view! {
                            <p class="form__success">"Pago enviado al paciente."</p>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| close_share.run(())>"Cerrar"</button>
                            </div>
                        }
                    }
                >
                    <SelectField
                        label="Paciente"
                        prompt="Seleccionar paciente"
                        value=Signal::derive(move || share.get().patient_id)
                        options=patient_options
                        on_change=Callback::new(move |id: String| share.update(|s| s.patient_id = id))
                    />
                    <Show when=move || share.with(|s| s.error.is_some())>
                        <p class="form__error">{move || share.get().error.unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| close_share.run(())>"Cancelar"</button>
                        <button class="btn btn--primary" disabled=move || share.get().busy on:click=on_share>
                            {move || if share.get().busy { "Enviando..." } else { "Enviar" }}
                        </button>
                    </div>
                </Show>
            </Modal>
        </Show>
    }
}
