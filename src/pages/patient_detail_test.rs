use super::*;

fn record_with_sessions(count: usize) -> PatientRecord {
    PatientRecord {
        id: "p1".into(),
        sessions: (1..=count)
            .map(|i| SessionSummary { id: format!("s{i}"), ..SessionSummary::default() })
            .collect(),
        ..PatientRecord::default()
    }
}

#[test]
fn sessions_are_paged_five_at_a_time() {
    let record = record_with_sessions(12);
    assert_eq!(session_page_count(&record), 3);
    let first: Vec<_> = sessions_on_page(&record, 1).into_iter().map(|s| s.id).collect();
    assert_eq!(first, vec!["s1", "s2", "s3", "s4", "s5"]);
    let last: Vec<_> = sessions_on_page(&record, 3).into_iter().map(|s| s.id).collect();
    assert_eq!(last, vec!["s11", "s12"]);
}

#[test]
fn patient_without_sessions_has_one_empty_page() {
    let record = record_with_sessions(0);
    assert_eq!(session_page_count(&record), 1);
    assert!(sessions_on_page(&record, 1).is_empty());
}

#[test]
fn medication_requires_everything_but_description() {
    let mut med = Medication::for_patient("p1");
    assert!(validate_medication(&med).is_err());
    med.name = "Sertralina".into();
    med.date = "2024-05-01".into();
    med.duration = "3 meses".into();
    med.dose = "50mg".into();
    med.frequency = "diaria".into();
    assert_eq!(validate_medication(&med), Ok(()));
}

// =============================================================
// Medication list after add
// =============================================================

fn medication(id: &str, name: &str) -> Medication {
    Medication { id: id.into(), name: name.into(), ..Medication::for_patient("p1") }
}

#[test]
fn failed_reread_keeps_added_medication_with_returned_id() {
    let mut meds = ListState::default();
    meds.loaded(vec![medication("m1", "Sertralina")]);
    let added = with_assigned_id(medication("", "Litio"), Some("m2".into()));
    medications_after_add(&mut meds, Err(ApiError::Unavailable), added, "p1");
    assert_eq!(meds.find("m2").map(|m| m.name.as_str()), Some("Litio"));
    assert_eq!(meds.items.len(), 2);
    assert!(meds.error.is_some());
}

#[test]
fn missing_patient_keeps_added_medication() {
    let mut meds = ListState::default();
    meds.loaded(Vec::new());
    medications_after_add(&mut meds, Ok(None), medication("m5", "Litio"), "p1");
    assert_eq!(meds.items, vec![medication("m5", "Litio")]);
}

#[test]
fn reread_record_replaces_medications() {
    let mut meds = ListState::default();
    meds.loaded(vec![medication("m1", "Sertralina")]);
    let record = PatientRecord {
        medications: vec![medication("m1", "Sertralina"), medication("m2", "Litio")],
        ..PatientRecord::default()
    };
    medications_after_add(&mut meds, Ok(Some(record)), medication("", "Litio"), "p1");
    assert_eq!(meds.items.len(), 2);
    assert_eq!(meds.error, None);
}
