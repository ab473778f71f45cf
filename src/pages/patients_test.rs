use super::*;

#[test]
fn new_draft_defaults_gender() {
    let draft = new_patient_draft();
    assert_eq!(draft.gender, "masculino");
    assert!(draft.id.is_empty());
    assert!(draft.name.is_empty());
}

#[test]
fn validate_patient_requires_contact_fields() {
    let mut patient = new_patient_draft();
    assert!(validate_patient(&patient).is_err());
    patient.name = "Ana".into();
    patient.age = "34".into();
    patient.email = "ana@example.com".into();
    assert!(validate_patient(&patient).is_err());
    patient.phone = "099123456".into();
    assert_eq!(validate_patient(&patient), Ok(()));
}

#[test]
fn form_title_tracks_mode() {
    assert_eq!(form_title(&FormMode::Create), "Agregar paciente");
    assert_eq!(form_title(&FormMode::Edit(Patient::default())), "Editar paciente");
}

#[test]
fn rejected_create_keeps_list_and_modal() {
    let existing = Patient { id: "p1".into(), name: "Ana".into(), ..Patient::default() };
    let mut state = ListState::default();
    state.loaded(vec![existing.clone()]);
    state.open_create();
    assert!(state.begin_submit());
    state.submit_failed(write_error("agregar", "el paciente"));
    assert_eq!(state.items, vec![existing]);
    assert_eq!(state.form, FormMode::Create);
    assert_eq!(state.error.as_deref(), Some("Error al agregar el paciente"));
}
