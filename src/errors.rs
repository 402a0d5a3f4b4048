//! Shared error funnel.
//!
//! Every thunk routes its failures here. Nothing is retried and nothing
//! is swallowed: the error is logged and surfaced on the app slice for
//! whatever front end is watching the store.

use crate::api::ApiError;
use crate::app::{AppAction, RequestStatus};
use crate::store::Store;

/// Log `error` and surface it on the app slice.
pub fn report_error(error: &ApiError, store: &Store) {
    tracing::error!(%error, "request failed");

    store.dispatch(AppAction::SetError(Some(error.user_message())));
    store.dispatch(AppAction::SetStatus(RequestStatus::Failed));
}
