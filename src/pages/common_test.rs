use super::*;
use crate::net::types::Patient;

#[test]
fn load_error_names_the_collection() {
    assert_eq!(load_error("pacientes"), "Error al obtener pacientes");
}

#[test]
fn write_error_names_action_and_target() {
    assert_eq!(write_error("agregar", "el paciente"), "Error al agregar el paciente");
    assert_eq!(write_error("eliminar", "la cita"), "Error al eliminar la cita");
}

// =============================================================
// Re-fetch after write
// =============================================================

fn patient(id: &str, name: &str) -> Patient {
    Patient { id: id.to_owned(), name: name.to_owned(), ..Patient::default() }
}

fn listed(items: Vec<Patient>) -> ListState<Patient> {
    let mut state = ListState::default();
    state.loaded(items);
    state
}

#[test]
fn failed_refetches_after_creates_keep_every_record() {
    let mut state = listed(vec![patient("p1", "Ana")]);
    for name in ["Luis", "Marta"] {
        assert!(state.begin_submit());
        settle_refetch(&mut state, Err(ApiError::Unavailable), LocalWrite::Created(patient("", name)), "pacientes");
    }
    let names: Vec<_> = state.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Ana", "Luis", "Marta"]);
    assert_eq!(state.error.as_deref(), Some("Error al obtener pacientes"));
    assert!(!state.busy);
}

#[test]
fn failed_refetch_after_update_replaces_by_id() {
    let mut state = listed(vec![patient("p1", "Ana"), patient("p2", "Luis")]);
    settle_refetch(&mut state, Err(ApiError::Unavailable), LocalWrite::Updated(patient("p2", "Luis M.")), "pacientes");
    assert_eq!(state.items, vec![patient("p1", "Ana"), patient("p2", "Luis M.")]);
}

#[test]
fn successful_refetch_replaces_list() {
    let mut state = listed(vec![patient("p1", "Ana")]);
    let fresh = vec![patient("p1", "Ana"), patient("p7", "Luis")];
    settle_refetch(&mut state, Ok(fresh.clone()), LocalWrite::Created(patient("", "Luis")), "pacientes");
    assert_eq!(state.items, fresh);
    assert_eq!(state.error, None);
}
