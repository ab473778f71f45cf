use super::*;

fn patients() -> Vec<Patient> {
    vec![Patient { id: "p1".into(), name: "Ana".into(), email: "ana@example.com".into(), ..Patient::default() }]
}

// =============================================================
// Upload
// =============================================================

#[test]
fn format_size_mb_uses_two_decimals() {
    assert_eq!(format_size_mb(0), "0.00 MB");
    assert_eq!(format_size_mb(1_048_576), "1.00 MB");
    assert_eq!(format_size_mb(2_621_440), "2.50 MB");
}

#[test]
fn upload_kind_is_upper_cased_extension() {
    assert_eq!(upload_kind("C:\\fakepath\\guia.pdf"), Ok("PDF".to_owned()));
    assert_eq!(upload_kind("video.final.mp4"), Ok("MP4".to_owned()));
}

#[test]
fn upload_kind_rejects_missing_file_or_extension() {
    assert!(upload_kind("").is_err());
    assert!(upload_kind("README").is_err());
}

// =============================================================
// Share
// =============================================================

#[test]
fn select_patient_fills_recipient() {
    let mut form = ShareForm::open(Resource { id: "r1".into(), ..Resource::default() });
    form.select_patient(&patients(), "p1");
    assert_eq!(form.send.patient_id, "p1");
    assert_eq!(form.send.name, "Ana");
    assert_eq!(form.send.email, "ana@example.com");
}

#[test]
fn validate_requires_recipient_before_fields() {
    let form = ShareForm::open(Resource::default());
    assert_eq!(form.validate(), Err(NO_RECIPIENT));

    let mut form = ShareForm::default();
    form.select_patient(&patients(), "p1");
    assert_eq!(form.validate(), Err(NO_RECIPIENT));
}

#[test]
fn validate_requires_subject_and_message() {
    let mut form = ShareForm::open(Resource { id: "r1".into(), ..Resource::default() });
    form.select_patient(&patients(), "p1");
    assert!(form.validate().is_err());
    form.send.subject = "Material".into();
    form.send.message = "Te comparto la guía".into();
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn closed_form_is_not_open() {
    assert!(!ShareForm::default().is_open());
    assert!(ShareForm::open(Resource::default()).is_open());
}
