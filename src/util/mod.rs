//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure functions for routing, validation, dates and paging live here so
//! they can be unit-tested without a browser; `dark_mode` is the one module
//! that touches browser storage.

pub mod dark_mode;
pub mod dates;
pub mod forms;
pub mod pagination;
pub mod payment_return;
pub mod routes;
