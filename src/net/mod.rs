//! Networking modules for the practice REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs credentialed HTTP calls, `error` classifies their failures,
//! and `types` defines the wire schema shared by every view.

pub mod api;
pub mod error;
pub mod types;
