//! Packs slice: the cached page of packs, its pagination and ownership
//! filter, the thunks that drive it, and the (inert) filters panel.

mod action;
pub mod filters;
mod reducer;
mod state;
mod thunks;

pub use action::PacksAction;
pub use reducer::PacksReducer;
pub use state::{PackOwnership, PacksState};
pub use thunks::{add_pack, delete_pack, fetch_packs, update_pack};
