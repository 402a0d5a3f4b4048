//! Base trait for dispatched actions.

/// Marker trait for per-slice action enums.
///
/// Actions represent:
/// - fetched data being applied (API responses)
/// - pagination and filter changes
/// - auth/session transitions
///
/// Actions are processed by reducers to produce new states.
pub trait SliceAction: Send + 'static {}
