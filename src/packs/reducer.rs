//! Reducer for the packs slice.

use crate::store::Reducer;

use super::action::PacksAction;
use super::state::PacksState;

/// Pure state transitions for the packs slice. Last write wins per
/// field; there is no error path and no terminal state.
pub struct PacksReducer;

impl Reducer for PacksReducer {
    type State = PacksState;
    type Action = PacksAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            PacksAction::SetPacks(fetched) => PacksState {
                card_packs: Some(fetched.card_packs),
                page: fetched.page,
                page_count: fetched.page_count,
                card_packs_total_count: fetched.card_packs_total_count,
                max_cards_count: fetched.max_cards_count,
                min_cards_count: fetched.min_cards_count,
                ..state
            },
            PacksAction::SetPage(page) => PacksState { page, ..state },
            PacksAction::SetPageCount(page_count) => PacksState { page_count, ..state },
            PacksAction::SetSortByAllMy(sort_by_all_my) => PacksState {
                sort_by_all_my,
                ..state
            },
        }
    }
}
