//! Root state tree and root action union.

use crate::app::{AppAction, AppReducer, AppState};
use crate::auth::{AuthAction, AuthReducer, AuthState};
use crate::cards::{CardsAction, CardsReducer, CardsState};
use crate::packs::{PacksAction, PacksReducer, PacksState};

use super::reducer::Reducer;

/// The whole application state, one slice per feature.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub app: AppState,
    pub auth: AuthState,
    pub packs: PacksState,
    pub cards: CardsState,
}

/// Union of every slice's actions.
///
/// Matched exhaustively: an action always belongs to exactly one slice,
/// and reducing it leaves every other slice untouched.
#[derive(Debug, Clone)]
pub enum Action {
    App(AppAction),
    Auth(AuthAction),
    Packs(PacksAction),
    Cards(CardsAction),
}

impl From<AppAction> for Action {
    fn from(action: AppAction) -> Self {
        Action::App(action)
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<PacksAction> for Action {
    fn from(action: PacksAction) -> Self {
        Action::Packs(action)
    }
}

impl From<CardsAction> for Action {
    fn from(action: CardsAction) -> Self {
        Action::Cards(action)
    }
}

/// Delegate an action to the reducer owning its slice.
pub(super) fn reduce(state: RootState, action: Action) -> RootState {
    match action {
        Action::App(action) => RootState {
            app: AppReducer::reduce(state.app, action),
            ..state
        },
        Action::Auth(action) => RootState {
            auth: AuthReducer::reduce(state.auth, action),
            ..state
        },
        Action::Packs(action) => RootState {
            packs: PacksReducer::reduce(state.packs, action),
            ..state
        },
        Action::Cards(action) => RootState {
            cards: CardsReducer::reduce(state.cards, action),
            ..state
        },
    }
}
