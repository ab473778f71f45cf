//! Session-notes editor state.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use crate::net::types::{SessionNote, SessionRecord};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotesEditor {
    pub loading: bool,
    pub session: Option<SessionRecord>,
    /// Notes that will be kept on the next save.
    pub notes: Vec<SessionNote>,
    pub draft: String,
    pub error: Option<String>,
    pub busy: bool,
}

impl NotesEditor {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Adopt a freshly fetched session, discarding local edits.
    pub fn reconcile(&mut self, session: Option<SessionRecord>) {
        self.notes = session.as_ref().map(|s| s.notes.clone()).unwrap_or_default();
        self.session = session;
        self.draft.clear();
        self.loading = false;
        self.busy = false;
        self.error = None;
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.busy = false;
        self.error = Some(message.into());
    }

    /// Drop a note locally; takes effect on the next save.
    pub fn remove(&mut self, index: usize) {
        if index < self.notes.len() {
            self.notes.remove(index);
        }
    }

    /// Note built from the draft, or `None` when the draft is blank.
    pub fn draft_note(&self, now_millis: i64) -> Option<SessionNote> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        Some(SessionNote { id: None, note: text.to_owned(), created_at: now_millis })
    }

    /// Whether saving would change anything on the server.
    pub fn has_changes(&self) -> bool {
        let stored = self.session.as_ref().map_or(0, |s| s.notes.len());
        !self.draft.trim().is_empty() || self.notes.len() != stored
    }
}
