//! Async operations for the cards slice. Same discipline as packs:
//! one HTTP call per thunk, refetch after mutation, failures funneled
//! to the shared error handler.

use crate::api::{ApiClient, GetCardsRequest, NewCard};
use crate::app::{AppAction, RequestStatus};
use crate::domain::Card;
use crate::errors::report_error;
use crate::store::Store;

use super::action::CardsAction;

/// Fetch the current page of `pack_id`'s cards.
pub async fn fetch_cards(api: &ApiClient, store: &Store, pack_id: &str) {
    let cards = store.state().cards;

    let request = GetCardsRequest {
        cards_pack_id: pack_id.to_string(),
        page: Some(cards.page),
        page_count: Some(cards.page_count),
        ..GetCardsRequest::default()
    };

    store.dispatch(AppAction::SetStatus(RequestStatus::Loading));

    match api.get_cards(&request).await {
        Ok(fetched) => {
            store.dispatch(CardsAction::SetCards(fetched));
            store.dispatch(AppAction::SetStatus(RequestStatus::Succeeded));
        }
        Err(err) => report_error(&err, store),
    }
}

/// Create a card, then refetch its pack's page.
pub async fn add_card(api: &ApiClient, store: &Store, card: &NewCard) {
    store.dispatch(AppAction::SetStatus(RequestStatus::Loading));

    match api.add_card(card).await {
        Ok(()) => fetch_cards(api, store, &card.cards_pack_id).await,
        Err(err) => report_error(&err, store),
    }
}

/// Update a card, then refetch its pack's page.
pub async fn update_card(api: &ApiClient, store: &Store, card: &Card) {
    store.dispatch(AppAction::SetStatus(RequestStatus::Loading));

    match api.update_card(card).await {
        Ok(()) => fetch_cards(api, store, &card.cards_pack_id).await,
        Err(err) => report_error(&err, store),
    }
}

/// Delete a card, then refetch `pack_id`'s page.
pub async fn delete_card(api: &ApiClient, store: &Store, pack_id: &str, id: &str) {
    store.dispatch(AppAction::SetStatus(RequestStatus::Loading));

    match api.delete_card(id).await {
        Ok(()) => fetch_cards(api, store, pack_id).await,
        Err(err) => report_error(&err, store),
    }
}
