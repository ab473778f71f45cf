//! Page-scoped list state shared by every CRUD view.
//!
//! DESIGN
//! ======
//! A view holds one `RwSignal<ListState<T>>` for the lifetime of its mount.
//! Writes never touch `items` until the server has acknowledged them; on
//! failure the list is kept as-is and the error is surfaced next to the form.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

/// Entities addressable by their server-assigned id.
pub trait Keyed {
    fn key(&self) -> &str;
    fn set_key(&mut self, id: String);
}

/// Stamp the id the server returned for a create; `None` keeps the current one.
pub fn with_assigned_id<T: Keyed>(mut item: T, id: Option<String>) -> T {
    if let Some(id) = id {
        item.set_key(id);
    }
    item
}

/// A write the server accepted, kept locally when the follow-up fetch fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocalWrite<T> {
    Created(T),
    Updated(T),
}

/// Which modal form is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode<T> {
    #[default]
    Closed,
    Create,
    Edit(T),
}

impl<T> FormMode<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState<T> {
    pub loading: bool,
    pub items: Vec<T>,
    pub error: Option<String>,
    pub form: FormMode<T>,
    /// Candidate shown in the delete confirmation modal.
    pub pending_delete: Option<T>,
    /// A write request is in flight.
    pub busy: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            loading: true,
            items: Vec::new(),
            error: None,
            form: FormMode::Closed,
            pending_delete: None,
            busy: false,
        }
    }
}

impl<T: Keyed + Clone> ListState<T> {
    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn open_create(&mut self) {
        self.form = FormMode::Create;
        self.error = None;
    }

    pub fn open_edit(&mut self, item: T) {
        self.form = FormMode::Edit(item);
        self.error = None;
    }

    pub fn close_form(&mut self) {
        self.form = FormMode::Closed;
        self.error = None;
    }

    /// Mark a write as started. Returns `false` when one is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    pub fn created(&mut self, item: T) {
        self.items.push(item);
        self.finish_write();
    }

    /// Replace the item with the same key; append when none matches.
    pub fn updated(&mut self, item: T) {
        match self.items.iter_mut().find(|existing| existing.key() == item.key()) {
            Some(slot) => *slot = item,
            None => self.items.push(item),
        }
        self.finish_write();
    }

    pub fn removed(&mut self, id: &str) {
        self.items.retain(|item| item.key() != id);
        self.pending_delete = None;
        self.busy = false;
        self.error = None;
    }

    /// Replace the list with a fresh fetch after a write.
    pub fn reconcile(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.finish_write();
    }

    /// A write was rejected: list and open modals stay as they were.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.error = Some(message.into());
    }

    /// Apply an acknowledged write without a fresh list and mark the list stale.
    pub fn kept_local(&mut self, write: LocalWrite<T>, stale: impl Into<String>) {
        match write {
            LocalWrite::Created(item) => self.created(item),
            LocalWrite::Updated(item) => self.updated(item),
        }
        self.error = Some(stale.into());
    }

    pub fn request_delete(&mut self, item: T) {
        self.pending_delete = Some(item);
        self.error = None;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.error = None;
    }

    /// Items are shown but the last refresh failed and no modal owns the error.
    pub fn is_stale(&self) -> bool {
        self.error.is_some() && !self.items.is_empty() && !self.form.is_open() && self.pending_delete.is_none()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    fn finish_write(&mut self) {
        self.form = FormMode::Closed;
        self.busy = false;
        self.error = None;
    }
}
