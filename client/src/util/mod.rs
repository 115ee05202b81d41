//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! mail hand-off encoding) from controllers and renderers.

pub mod mailto;
pub mod preference;
pub mod schedule;
