//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public pages (`sign_in`, `sign_up`, `public_profile`, `payment_return`)
//! render without a session; everything else is mounted inside the
//! authenticated shell.

pub mod billing;
pub mod calendar;
pub mod common;
pub mod dashboard;
pub mod not_found;
pub mod patient_detail;
pub mod patients;
pub mod payment_return;
pub mod profile_settings;
pub mod public_profile;
pub mod resources;
pub mod session_detail;
pub mod sign_in;
pub mod sign_up;
pub mod wait_list;
