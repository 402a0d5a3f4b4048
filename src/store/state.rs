//! Base trait for slice state.

/// Marker trait for slice state objects.
///
/// Slice states should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
/// - Constructible from a fixed initial constant (Default)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}
