//! Form validation shared by the auth pages and the CRUD modals.
//!
//! Validators are pure: they take the raw field values and return either the
//! cleaned values or the message to show next to the form.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::error::ApiError;
use crate::net::types::ContactMessage;

pub const ALL_FIELDS_REQUIRED: &str = "Todos los campos son obligatorios";
const AUTH_UNKNOWN_ERROR: &str = "Error desconocido en la autenticación.";
const CONNECTION_ERROR: &str = "Error de conexión. Intenta de nuevo más tarde.";

/// Loose address check: some non-space text, `@`, more text, `.`, more text.
pub fn is_valid_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            c == '@'
                && at > 0
                && token[at + 1..]
                    .char_indices()
                    .any(|(dot, d)| d == '.' && dot > 0 && at + 1 + dot + 1 < token.len())
        })
    })
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

// =============================================================
// Sign in / sign up
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl SignInErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_sign_in(email: &str, password: &str) -> SignInErrors {
    SignInErrors {
        email: (!is_valid_email(email)).then_some("Please enter a valid email address"),
        password: password.is_empty().then_some("Password is required"),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl SignUpErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

pub fn validate_sign_up(form: &SignUpForm) -> SignUpErrors {
    SignUpErrors {
        name: blank(&form.name).then_some("Name is required"),
        email: (!is_valid_email(&form.email)).then_some("Valid email is required"),
        password: form.password.is_empty().then_some("Password is required"),
        confirm_password: (form.password != form.confirm_password).then_some("Passwords must match"),
    }
}

/// Message for a rejected sign-in or sign-up: the server's own text when it
/// sent one, otherwise a generic line.
pub fn auth_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Transport(_) | ApiError::Unavailable => CONNECTION_ERROR.to_owned(),
        other => other.user_message(AUTH_UNKNOWN_ERROR),
    }
}

// =============================================================
// CRUD forms
// =============================================================

/// Every listed field must hold non-blank text.
///
/// # Errors
///
/// Returns [`ALL_FIELDS_REQUIRED`] when any field is blank.
pub fn require_all(fields: &[&str]) -> Result<(), &'static str> {
    if fields.iter().any(|f| blank(f)) {
        return Err(ALL_FIELDS_REQUIRED);
    }
    Ok(())
}

/// Contact form on the public profile.
///
/// # Errors
///
/// Returns the first problem found, in field order.
pub fn validate_contact(message: &ContactMessage) -> Result<(), &'static str> {
    if blank(&message.name) {
        return Err("Ingresá tu nombre");
    }
    if !is_valid_email(&message.email) {
        return Err("Ingresá un email válido");
    }
    if blank(&message.message) {
        return Err("Escribí un mensaje");
    }
    Ok(())
}

/// Upper-cased extension of an uploaded file name; empty when there is none.
pub fn file_kind(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_uppercase(),
        _ => String::new(),
    }
}
