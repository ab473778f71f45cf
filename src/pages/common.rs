//! Fetch-and-record helpers shared by the CRUD pages.

#[cfg(test)]
#[path = "common_test.rs"]
mod common_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::list::{Keyed, ListState, LocalWrite};

pub fn load_error(what: &str) -> String {
    format!("Error al obtener {what}")
}

pub fn write_error(action: &str, what: &str) -> String {
    format!("Error al {action} {what}")
}

/// Await a list fetch and record it as the initial load.
pub async fn load_list<T, F>(state: RwSignal<ListState<T>>, fetch: F, what: &str)
where
    T: Keyed + Clone + Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    match fetch.await {
        Ok(items) => state.update(|s| s.loaded(items)),
        Err(e) => {
            log::error!("loading {what} failed: {e}");
            state.update(|s| s.load_failed(load_error(what)));
        }
    }
}

/// Record the outcome of a re-fetch that followed an accepted write.
///
/// A failed re-fetch keeps `write` locally: creates append and updates
/// replace by key. The list is flagged so the user knows it may be stale.
pub fn settle_refetch<T>(
    state: &mut ListState<T>,
    fetched: Result<Vec<T>, ApiError>,
    write: LocalWrite<T>,
    what: &str,
) where
    T: Keyed + Clone,
{
    match fetched {
        Ok(items) => state.reconcile(items),
        Err(e) => {
            log::warn!("re-fetch of {what} after write failed, keeping local copy: {e}");
            state.kept_local(write, load_error(what));
        }
    }
}

/// Await a re-fetch after a write and reconcile the list with it.
pub async fn reconcile_list<T, F>(state: RwSignal<ListState<T>>, fetch: F, write: LocalWrite<T>, what: &str)
where
    T: Keyed + Clone + Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    let fetched = fetch.await;
    state.update(|s| settle_refetch(s, fetched, write, what));
}
