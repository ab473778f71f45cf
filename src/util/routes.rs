//! Route paths and the public-path allow-list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session gate consults `is_public_path` before forcing a sign-in
//! redirect; pages use the path builders for in-app links.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/auth/signin";
pub const SIGN_UP_PATH: &str = "/auth/signup";
pub const PUBLIC_PROFILE_PATH: &str = "/p";
pub const PAYMENT_RETURN_PATH: &str = "/p/payment";
pub const PATIENTS_PATH: &str = "/patients";
pub const CALENDAR_PATH: &str = "/calendar";
pub const RESOURCES_PATH: &str = "/resources";
pub const BILLING_PATH: &str = "/billing";
pub const WAIT_LIST_PATH: &str = "/waitlist";
pub const PROFILE_PATH: &str = "/profile";

/// Whether `path` may be shown without an authenticated session.
///
/// Matching is by whole segments: `/p` and `/p/payment` are public while
/// `/patients` is not. Query strings and fragments are ignored.
pub fn is_public_path(path: &str) -> bool {
    let path = strip_suffixes(path);
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    path == SIGN_IN_PATH || path == SIGN_UP_PATH || is_under(path, PUBLIC_PROFILE_PATH)
}

fn strip_suffixes(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

pub fn patient_detail_path(patient_id: &str) -> String {
    format!("{PATIENTS_PATH}/{patient_id}")
}

pub fn session_detail_path(patient_id: &str, session_id: &str) -> String {
    format!("{PATIENTS_PATH}/{patient_id}/{session_id}")
}
