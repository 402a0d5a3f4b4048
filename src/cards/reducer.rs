use crate::store::Reducer;

use super::action::CardsAction;
use super::state::CardsState;

pub struct CardsReducer;

impl Reducer for CardsReducer {
    type State = CardsState;
    type Action = CardsAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CardsAction::SetCards(fetched) => CardsState {
                cards: fetched.cards,
                page: fetched.page,
                page_count: fetched.page_count,
                cards_total_count: fetched.cards_total_count,
                max_grade: fetched.max_grade,
                min_grade: fetched.min_grade,
                pack_user_id: fetched.pack_user_id,
            },
            CardsAction::SetPage(page) => CardsState { page, ..state },
            CardsAction::SetPageCount(page_count) => CardsState { page_count, ..state },
        }
    }
}
