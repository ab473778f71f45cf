use std::collections::HashMap;

use super::*;

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn registration(pairs: &[(&str, &str)]) -> PaymentRegistration {
    let map = query(pairs);
    registration_from_query(|key| map.get(key).cloned())
}

#[test]
fn reads_every_provider_parameter() {
    let reg = registration(&[
        ("collection_id", "1"),
        ("collection_status", "approved"),
        ("payment_id", "2"),
        ("status", "approved"),
        ("external_reference", "ref"),
        ("payment_type", "credit_card"),
        ("merchant_order_id", "3"),
        ("preference_id", "pref"),
        ("site_id", "MLU"),
        ("processing_mode", "aggregator"),
        ("merchant_account_id", "null"),
    ]);
    assert_eq!(reg.payment_id.as_deref(), Some("2"));
    assert_eq!(reg.site_id.as_deref(), Some("MLU"));
    assert_eq!(reg.merchant_account_id.as_deref(), Some("null"));
    assert!(should_register(&reg));
}

#[test]
fn blank_values_are_absent() {
    let reg = registration(&[("payment_id", "  "), ("status", "")]);
    assert_eq!(reg.payment_id, None);
    assert_eq!(reg.status, None);
    assert!(!should_register(&reg));
}

#[test]
fn status_label_follows_status_then_collection_status() {
    assert_eq!(status_label(&registration(&[("status", "approved")])), "¡Pago aprobado!");
    assert_eq!(status_label(&registration(&[("collection_status", "pending")])), "Pago pendiente de confirmación");
    assert_eq!(status_label(&registration(&[("status", "rejected")])), "El pago no pudo completarse");
    assert_eq!(status_label(&registration(&[])), "No se recibió información del pago");
}
