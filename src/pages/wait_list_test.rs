use super::*;

fn booking(id: &str) -> Booking {
    Booking { id: id.into(), name: "Ana".into(), ..Booking::default() }
}

#[test]
fn decision_copy_matches_action() {
    assert!(BookingDecision::Accept.title().contains("aceptar"));
    assert!(BookingDecision::Reject.title().contains("rechazar"));
    assert_eq!(BookingDecision::Accept.confirm_label(), "Aceptar");
    assert_eq!(BookingDecision::Reject.failure(), "Error al rechazar la solicitud");
}

#[test]
fn resolved_booking_leaves_the_list() {
    let mut state = ListState::default();
    state.loaded(vec![booking("b1"), booking("b2")]);
    state.request_delete(booking("b1"));
    assert!(state.begin_submit());
    state.removed("b1");
    assert_eq!(state.items, vec![booking("b2")]);
    assert!(state.pending_delete.is_none());
}

#[test]
fn refused_decision_keeps_booking_and_dialog() {
    let mut state = ListState::default();
    state.loaded(vec![booking("b1")]);
    state.request_delete(booking("b1"));
    assert!(state.begin_submit());
    state.submit_failed(BookingDecision::Accept.failure());
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.pending_delete, Some(booking("b1")));
    assert!(!state.busy);
}
