//! Landing page for the checkout provider's redirect.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::app::use_api;
use crate::util::payment_return::{registration_from_query, should_register, status_label};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Registration {
    Skipped,
    Pending,
    Saved,
    Failed,
}

#[component]
pub fn PaymentReturnPage() -> impl IntoView {
    let api = use_api();
    let query = use_query_map().get_untracked();
    let registration = registration_from_query(|key| query.get(key));
    let headline = status_label(&registration);
    let progress = RwSignal::new(Registration::Skipped);

    if should_register(&registration) {
        progress.set(Registration::Pending);
        leptos::task::spawn_local(async move {
            match api.get_value().register_payment(&registration).await {
                Ok(()) => {
                    log::info!("payment {:?} registered", registration.payment_id);
                    progress.set(Registration::Saved);
                }
                Err(e) => {
                    log::error!("register payment {:?} failed: {e}", registration.payment_id);
                    progress.set(Registration::Failed);
                }
            }
        });
    } else {
        log::warn!("payment return without payment_id; nothing to register");
    }

    view! {
        <Title text="Pago | Contygo"/>
        <div class="payment-return card">
            <h1>{headline}</h1>
            <p>
                {move || match progress.get() {
                    Registration::Skipped => "",
                    Registration::Pending => "Registrando el pago...",
                    Registration::Saved => "El pago quedó registrado. Ya podés cerrar esta ventana.",
                    Registration::Failed => "No pudimos registrar el pago. Contactá a tu psicólogo.",
                }}
            </p>
        </div>
    }
}
