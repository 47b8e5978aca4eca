//! Base trait for store slices.

/// Marker trait for state slices.
///
/// Slices should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (one concern per slice)
/// - Comparable (PartialEq so the render pass can detect changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
