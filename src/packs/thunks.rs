//! Async operations for the packs slice.
//!
//! Each thunk reads the state it needs, issues exactly one HTTP call,
//! and dispatches follow-up actions. Mutations never touch the slice
//! directly; they refetch the current page instead. There is no retry,
//! no cancellation, and no de-duplication — overlapping calls race and
//! the last response to apply wins.

use crate::api::{ApiClient, GetPacksRequest, NewPack};
use crate::app::{AppAction, RequestStatus};
use crate::domain::Pack;
use crate::errors::report_error;
use crate::store::Store;

use super::action::PacksAction;
use super::state::PackOwnership;

/// Fetch the current page of packs and apply it to the slice.
///
/// Pagination and the ownership filter come from the state tree: `All`
/// sends an empty `user_id`, `My` sends the signed-in profile's id.
pub async fn fetch_packs(api: &ApiClient, store: &Store) {
    let state = store.state();

    let user_id = match state.packs.sort_by_all_my {
        PackOwnership::All => String::new(),
        PackOwnership::My => state.auth.user_id(),
    };

    let request = GetPacksRequest {
        page: Some(state.packs.page),
        page_count: Some(state.packs.page_count),
        user_id: Some(user_id),
        ..GetPacksRequest::default()
    };

    store.dispatch(AppAction::SetStatus(RequestStatus::Loading));

    match api.get_packs(&request).await {
        Ok(fetched) => {
            store.dispatch(PacksAction::SetPacks(fetched));
            store.dispatch(AppAction::SetStatus(RequestStatus::Succeeded));
        }
        Err(err) => report_error(&err, store),
    }
}

/// Create a pack, then refetch the current page.
pub async fn add_pack(api: &ApiClient, store: &Store, pack: &NewPack) {
    store.dispatch(AppAction::SetStatus(RequestStatus::Loading));

    match api.add_pack(pack).await {
        Ok(()) => fetch_packs(api, store).await,
        Err(err) => report_error(&err, store),
    }
}

/// Update a pack, then refetch the current page.
pub async fn update_pack(api: &ApiClient, store: &Store, pack: &Pack) {
    store.dispatch(AppAction::SetStatus(RequestStatus::Loading));

    match api.update_pack(pack).await {
        Ok(()) => fetch_packs(api, store).await,
        Err(err) => report_error(&err, store),
    }
}

/// Delete a pack, then refetch the current page.
pub async fn delete_pack(api: &ApiClient, store: &Store, id: &str) {
    store.dispatch(AppAction::SetStatus(RequestStatus::Loading));

    match api.delete_pack(id).await {
        Ok(()) => fetch_packs(api, store).await,
        Err(err) => report_error(&err, store),
    }
}
