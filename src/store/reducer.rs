//! Reducer trait.

use super::action::SliceAction;
use super::state::SliceState;

/// Reducer transforms one slice of state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure, total function: (State, Action) -> State.
pub trait Reducer {
    /// The slice this reducer owns.
    type State: SliceState;

    /// The actions this reducer handles.
    type Action: SliceAction;

    /// Process an action and return the new slice state.
    ///
    /// No side effects; every HTTP call and file write happens around
    /// the dispatch, never inside it.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
