//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned to build new ones, compared to detect changes, and
/// start from `Default`. Exactly one variant is active at a time.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
