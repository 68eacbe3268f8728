//! Domain model for the demo application.
//!
//! # Responsibility
//! - Define the `Event` record the range field binds to.
//!
//! # Invariants
//! - Every record is identified by a stable `EventId`.
//! - Write paths validate records before persistence.

pub mod event;
