//! Reusable UI components shared by the pages.

pub mod app_shell;
pub mod breadcrumb;
pub mod field;
pub mod loader;
pub mod modal;
