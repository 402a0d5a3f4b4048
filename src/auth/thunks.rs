//! Session thunks.

use crate::api::{ApiClient, LoginRequest};
use crate::app::{AppAction, RequestStatus};
use crate::errors::report_error;
use crate::store::Store;

use super::action::AuthAction;

/// Authenticate and store the resulting profile.
pub async fn login(api: &ApiClient, store: &Store, email: &str, password: &str, remember_me: bool) {
    store.dispatch(AppAction::SetStatus(RequestStatus::Loading));

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
        remember_me,
    };

    match api.login(&request).await {
        Ok(profile) => {
            store.dispatch(AuthAction::SetProfile(profile));
            store.dispatch(AuthAction::SetLoggedIn(true));
            store.dispatch(AppAction::SetStatus(RequestStatus::Succeeded));
        }
        Err(err) => report_error(&err, store),
    }
}

/// Probe the current session.
///
/// A failure here is the normal "not logged in" answer during startup,
/// so it is not routed to the error handler; the app is only marked
/// initialized.
pub async fn fetch_me(api: &ApiClient, store: &Store) {
    match api.me().await {
        Ok(profile) => {
            store.dispatch(AuthAction::SetProfile(profile));
            store.dispatch(AuthAction::SetLoggedIn(true));
        }
        Err(err) => {
            tracing::debug!(%err, "session probe failed");
        }
    }
    store.dispatch(AppAction::SetInitialized);
}

/// Drop the session, local profile included.
pub async fn logout(api: &ApiClient, store: &Store) {
    store.dispatch(AppAction::SetStatus(RequestStatus::Loading));

    match api.logout().await {
        Ok(()) => {
            store.dispatch(AuthAction::ClearProfile);
            store.dispatch(AppAction::SetStatus(RequestStatus::Succeeded));
        }
        Err(err) => report_error(&err, store),
    }
}
