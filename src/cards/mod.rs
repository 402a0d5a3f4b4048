//! Cards slice: the cached page of one pack's cards.

mod action;
mod reducer;
mod state;
mod thunks;

pub use action::CardsAction;
pub use reducer::CardsReducer;
pub use state::CardsState;
pub use thunks::{add_card, delete_card, fetch_cards, update_card};
