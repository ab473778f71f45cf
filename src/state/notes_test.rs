use super::*;

fn note(id: &str, text: &str) -> SessionNote {
    SessionNote { id: Some(id.to_owned()), note: text.to_owned(), created_at: 1 }
}

fn editor_with(notes: Vec<SessionNote>) -> NotesEditor {
    let mut editor = NotesEditor::loading();
    editor.reconcile(Some(SessionRecord { id: "s1".into(), notes, ..SessionRecord::default() }));
    editor
}

#[test]
fn reconcile_copies_server_notes_and_clears_draft() {
    let mut editor = editor_with(vec![note("n1", "uno")]);
    editor.draft = "borrador".into();
    editor.reconcile(Some(SessionRecord { id: "s1".into(), ..SessionRecord::default() }));
    assert!(editor.notes.is_empty());
    assert!(editor.draft.is_empty());
    assert!(!editor.loading);
}

#[test]
fn missing_session_yields_empty_notes() {
    let mut editor = NotesEditor::loading();
    editor.reconcile(None);
    assert!(editor.session.is_none());
    assert!(editor.notes.is_empty());
}

#[test]
fn remove_drops_only_valid_indices() {
    let mut editor = editor_with(vec![note("n1", "uno"), note("n2", "dos")]);
    editor.remove(5);
    assert_eq!(editor.notes.len(), 2);
    editor.remove(0);
    assert_eq!(editor.notes, vec![note("n2", "dos")]);
    assert!(editor.has_changes());
}

#[test]
fn blank_draft_is_not_a_note() {
    let mut editor = editor_with(Vec::new());
    editor.draft = "   ".into();
    assert_eq!(editor.draft_note(10), None);
    assert!(!editor.has_changes());
}

#[test]
fn draft_note_is_trimmed_and_stamped() {
    let mut editor = editor_with(Vec::new());
    editor.draft = "  paciente estable \n".into();
    let built = editor.draft_note(1_700_000_000_000).unwrap();
    assert_eq!(built.note, "paciente estable");
    assert_eq!(built.created_at, 1_700_000_000_000);
    assert_eq!(built.id, None);
}
