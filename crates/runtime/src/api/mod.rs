//! Public API surface for runtime consumers.
//!
//! Re-exports the handle, error types, phase model and provider trait that
//! clients interact with.
pub mod errors;
pub mod handle;
pub mod phase;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use handle::SessionHandle;
pub use phase::TurnPhase;
pub use providers::{ActionProvider, WaitActionProvider};
