use crate::store::Reducer;

use super::action::AppAction;
use super::state::AppState;

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AppAction::SetStatus(status) => AppState { status, ..state },
            AppAction::SetError(error) => AppState { error, ..state },
            AppAction::SetInitialized => AppState {
                is_initialized: true,
                ..state
            },
        }
    }
}
