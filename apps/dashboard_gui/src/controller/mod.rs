//! Controller layer: UI events, the session that owns the store, and action orchestration.

pub mod events;
pub mod orchestration;
pub mod session;
