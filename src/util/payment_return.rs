//! Checkout return parameters.
//!
//! The payment provider redirects back to `/p/payment` with its result in
//! the query string. The page forwards those values to the API once.

#[cfg(test)]
#[path = "payment_return_test.rs"]
mod payment_return_test;

use crate::net::types::PaymentRegistration;

/// Build a registration from a query lookup; blank values count as absent.
pub fn registration_from_query<F>(lookup: F) -> PaymentRegistration
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
    PaymentRegistration {
        collection_id: get("collection_id"),
        collection_status: get("collection_status"),
        payment_id: get("payment_id"),
        status: get("status"),
        external_reference: get("external_reference"),
        payment_type: get("payment_type"),
        merchant_order_id: get("merchant_order_id"),
        preference_id: get("preference_id"),
        site_id: get("site_id"),
        processing_mode: get("processing_mode"),
        merchant_account_id: get("merchant_account_id"),
    }
}

/// Only a return that names a payment is worth registering.
pub fn should_register(registration: &PaymentRegistration) -> bool {
    registration.payment_id.is_some()
}

/// Headline for the return page.
pub fn status_label(registration: &PaymentRegistration) -> &'static str {
    match registration.status.as_deref().or(registration.collection_status.as_deref()) {
        Some("approved") => "¡Pago aprobado!",
        Some("pending" | "in_process") => "Pago pendiente de confirmación",
        Some(_) => "El pago no pudo completarse",
        None => "No se recibió información del pago",
    }
}
