//! Application state container.
//!
//! Unidirectional data flow over a single state tree:
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                │
//!    └────────── (thunks) ────────────┘
//! ```
//!
//! - **State**: one [`RootState`] tree, split into per-feature slices
//! - **Action**: tagged union of per-slice action enums
//! - **Reducer**: pure function transforming one slice
//! - **Store**: the only mutation entry point; notifies subscribers
//!   synchronously after every dispatch

mod action;
pub mod persist;
mod reducer;
mod root;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use action::SliceAction;
pub use reducer::Reducer;
pub use root::{Action, RootState};
pub use state::SliceState;
pub use store::Store;
