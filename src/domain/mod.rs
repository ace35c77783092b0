//! Domain layer - pure types and rules, no I/O.

pub mod credentials;
pub mod foundation;
pub mod payment;
pub mod webhook;
