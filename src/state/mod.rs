//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` and `ui` are provided app-wide through context; `list` and
//! `notes` are held per page for the lifetime of a mount.

pub mod list;
pub mod notes;
pub mod session;
pub mod ui;
