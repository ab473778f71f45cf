//! Session gate: one authentication check per page load.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component owns a `SessionGate` and an `RwSignal<SessionState>`
//! and provides both through context. The gate component takes the single
//! `SessionCheckTicket`, awaits `/check-auth`, and resolves the ticket into a
//! `GateDecision` that tells it which status to settle on and whether to
//! redirect.
//!
//! STATE MACHINE
//! =============
//! `Unknown -> Authenticated | Unauthenticated`. Both outcomes are terminal
//! for the lifetime of the loaded page.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::error::ApiError;
use crate::net::types::CheckAuthResponse;
use crate::util::routes::{SIGN_IN_PATH, is_public_path};

/// Tri-state authentication status for the current page load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Reactive session state held in context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
}

impl SessionState {
    pub fn is_settled(&self) -> bool {
        self.status != SessionStatus::Unknown
    }

    /// Move out of `Unknown`. Returns `false` and leaves the state untouched
    /// when already settled or when asked to settle on `Unknown`.
    pub fn settle(&mut self, status: SessionStatus) -> bool {
        if self.is_settled() || status == SessionStatus::Unknown {
            return false;
        }
        self.status = status;
        true
    }
}

/// Fire-once latch guarding the session check.
#[derive(Clone, Debug, Default)]
pub struct SessionGate {
    latch: Arc<AtomicBool>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the single check ticket. The latch is set before returning,
    /// so every later call (including from clones) yields `None`.
    pub fn begin_check(&self) -> Option<SessionCheckTicket> {
        if self.latch.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(SessionCheckTicket { _private: () })
    }

    pub fn check_started(&self) -> bool {
        self.latch.load(Ordering::Acquire)
    }
}

/// Proof that this caller owns the session check.
#[derive(Debug)]
pub struct SessionCheckTicket {
    _private: (),
}

/// What the gate does once the check completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateDecision {
    pub status: SessionStatus,
    pub redirect: Option<&'static str>,
}

impl SessionCheckTicket {
    /// Consume the ticket with the check outcome observed at `path`.
    ///
    /// Anything other than a successful response with `authenticated: true`
    /// fails closed to `Unauthenticated`.
    pub fn resolve(self, outcome: Result<CheckAuthResponse, ApiError>, path: &str) -> GateDecision {
        let status = match outcome {
            Ok(CheckAuthResponse { authenticated: true }) => SessionStatus::Authenticated,
            Ok(_) => SessionStatus::Unauthenticated,
            Err(e) => {
                log::warn!("session check failed: {e}");
                SessionStatus::Unauthenticated
            }
        };
        let redirect = (status == SessionStatus::Unauthenticated && !is_public_path(path)).then_some(SIGN_IN_PATH);
        GateDecision { status, redirect }
    }
}
