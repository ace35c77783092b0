//! Foundation module - Shared domain primitives.
//!
//! Value objects, error types and the state machine trait used across the
//! credential and payment domains.

mod errors;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
