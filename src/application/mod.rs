//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write the credential file and the ledger; query handlers
//! only read.

pub mod handlers;
