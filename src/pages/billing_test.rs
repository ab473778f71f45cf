use super::*;

fn ana() -> Patient {
    Patient { id: "p1".into(), name: "Ana".into(), email: "ana@example.com".into(), ..Patient::default() }
}

// =============================================================
// Create
// =============================================================

#[test]
fn select_payer_fills_patient_and_buyer() {
    let mut draft = new_payment_draft();
    select_payer(&mut draft, &[ana()], "p1");
    assert_eq!(draft.patient_id, "p1");
    assert_eq!(draft.name, "Ana");
    assert_eq!(draft.buyer.email, "ana@example.com");

    select_payer(&mut draft, &[ana()], "missing");
    assert!(draft.name.is_empty());
    assert_eq!(draft.buyer, Buyer::default());
}

#[test]
fn validate_payment_requires_name_descriptor_sessions() {
    let mut draft = new_payment_draft();
    draft.price = "1500".into();
    assert_eq!(validate_payment(&draft), Err(crate::util::forms::ALL_FIELDS_REQUIRED));
    draft.name = "Ana".into();
    draft.descriptor = "Marzo".into();
    assert!(validate_payment(&draft).is_err());
    draft.sessions = "4".into();
    assert_eq!(validate_payment(&draft), Ok(()));
}

#[test]
fn issued_payment_carries_timestamp_and_link() {
    let payment = issued_at(new_payment_draft(), 1_714_730_400_000);
    assert_eq!(payment.date, 1_714_730_400_000);
    let linked = with_link(payment.clone(), Some("https://pay.example/abc"));
    assert_eq!(linked.path, "https://pay.example/abc");
    assert_eq!(with_link(payment, None).path, "");
}

// =============================================================
// Share
// =============================================================

#[test]
fn share_defaults_recipient_to_payer() {
    let payment = Payment { id: "pay1".into(), patient_id: "p1".into(), ..Payment::default() };
    let share = PaymentShare::open(payment.clone());
    assert!(share.is_open());
    assert_eq!(share.target(&[ana()]), Some((ana(), payment)));
}

#[test]
fn share_without_known_patient_has_no_target() {
    let share = PaymentShare::open(Payment::default());
    assert_eq!(share.target(&[ana()]), None);
    assert_eq!(PaymentShare::default().target(&[ana()]), None);
}
