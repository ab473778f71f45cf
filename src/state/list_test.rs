use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Row {
    id: String,
    label: String,
}

impl Keyed for Row {
    fn key(&self) -> &str {
        &self.id
    }

    fn set_key(&mut self, id: String) {
        self.id = id;
    }
}

fn row(id: &str, label: &str) -> Row {
    Row { id: id.to_owned(), label: label.to_owned() }
}

fn loaded(rows: &[Row]) -> ListState<Row> {
    let mut state = ListState::default();
    state.loaded(rows.to_vec());
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn default_is_loading_and_empty() {
    let state = ListState::<Row>::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert!(!state.form.is_open());
    assert!(!state.busy);
}

#[test]
fn load_failed_keeps_previous_items() {
    let mut state = loaded(&[row("1", "a")]);
    state.load_failed("offline");
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("offline"));
}

// =============================================================
// Create / edit
// =============================================================

#[test]
fn created_appends_and_closes_form() {
    let mut state = loaded(&[row("1", "a")]);
    state.open_create();
    assert!(state.begin_submit());
    state.created(row("2", "b"));
    assert_eq!(state.items, vec![row("1", "a"), row("2", "b")]);
    assert_eq!(state.form, FormMode::Closed);
    assert!(!state.busy);
}

#[test]
fn failed_create_leaves_list_unchanged_and_modal_open() {
    let mut state = loaded(&[row("1", "a")]);
    state.open_create();
    assert!(state.begin_submit());
    state.submit_failed("Error al crear el paciente");
    assert_eq!(state.items, vec![row("1", "a")]);
    assert_eq!(state.form, FormMode::Create);
    assert_eq!(state.error.as_deref(), Some("Error al crear el paciente"));
    assert!(!state.busy);
}

#[test]
fn begin_submit_rejects_overlapping_writes() {
    let mut state = loaded(&[]);
    assert!(state.begin_submit());
    assert!(!state.begin_submit());
}

#[test]
fn updated_replaces_by_key_in_place() {
    let mut state = loaded(&[row("1", "a"), row("2", "b")]);
    state.open_edit(row("2", "b"));
    state.updated(row("2", "bb"));
    assert_eq!(state.items, vec![row("1", "a"), row("2", "bb")]);
    assert_eq!(state.form, FormMode::Closed);
}

#[test]
fn reconcile_replaces_whole_list() {
    let mut state = loaded(&[row("1", "a")]);
    state.open_edit(row("1", "a"));
    state.reconcile(vec![row("1", "a2"), row("3", "c")]);
    assert_eq!(state.items, vec![row("1", "a2"), row("3", "c")]);
    assert!(!state.form.is_open());
}

// =============================================================
// Delete
// =============================================================

#[test]
fn removed_drops_id_and_closes_confirmation() {
    let mut state = loaded(&[row("a1", "x"), row("a2", "y")]);
    state.request_delete(row("a1", "x"));
    assert!(state.begin_submit());
    state.removed("a1");
    assert!(state.find("a1").is_none());
    assert!(state.find("a2").is_some());
    assert_eq!(state.pending_delete, None);
    assert!(!state.busy);
}

#[test]
fn failed_delete_keeps_item_and_confirmation() {
    let mut state = loaded(&[row("a1", "x")]);
    state.request_delete(row("a1", "x"));
    state.submit_failed("boom");
    assert!(state.find("a1").is_some());
    assert_eq!(state.pending_delete, Some(row("a1", "x")));
}

#[test]
fn cancel_delete_clears_candidate() {
    let mut state = loaded(&[row("a1", "x")]);
    state.request_delete(row("a1", "x"));
    state.cancel_delete();
    assert_eq!(state.pending_delete, None);
    assert_eq!(state.items.len(), 1);
}

// =============================================================
// Assigned ids and local fallback
// =============================================================

#[test]
fn with_assigned_id_stamps_returned_id() {
    let stamped = with_assigned_id(row("", "new"), Some("n9".to_owned()));
    assert_eq!(stamped, row("n9", "new"));
}

#[test]
fn with_assigned_id_keeps_existing_when_none() {
    assert_eq!(with_assigned_id(row("p1", "x"), None), row("p1", "x"));
}

#[test]
fn kept_local_creates_append_even_without_ids() {
    let mut state = loaded(&[row("p1", "ana")]);
    state.kept_local(LocalWrite::Created(row("", "luis")), "stale");
    state.kept_local(LocalWrite::Created(row("", "marta")), "stale");
    assert_eq!(state.items, vec![row("p1", "ana"), row("", "luis"), row("", "marta")]);
    assert_eq!(state.error.as_deref(), Some("stale"));
    assert!(!state.busy);
}

#[test]
fn kept_local_update_replaces_by_key() {
    let mut state = loaded(&[row("p1", "ana"), row("p2", "luis")]);
    state.open_edit(row("p2", "luis"));
    state.kept_local(LocalWrite::Updated(row("p2", "luis m.")), "stale");
    assert_eq!(state.items, vec![row("p1", "ana"), row("p2", "luis m.")]);
    assert_eq!(state.form, FormMode::Closed);
}

#[test]
fn stale_only_when_items_shown_without_modal() {
    let mut state = loaded(&[row("p1", "ana")]);
    assert!(!state.is_stale());
    state.kept_local(LocalWrite::Created(row("", "luis")), "stale");
    assert!(state.is_stale());
    state.open_create();
    assert!(!state.is_stale());
}
