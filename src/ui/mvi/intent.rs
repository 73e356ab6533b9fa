//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (fetch requests, opening or closing the overlay)
/// - System events (fetch results arriving from the network task)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
