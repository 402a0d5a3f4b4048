use crate::store::Reducer;

use super::action::AuthAction;
use super::state::AuthState;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AuthAction::SetProfile(profile) => AuthState {
                profile: Some(profile),
                ..state
            },
            AuthAction::SetLoggedIn(is_logged_in) => AuthState {
                is_logged_in,
                ..state
            },
            AuthAction::ClearProfile => AuthState {
                profile: None,
                is_logged_in: false,
            },
        }
    }
}
