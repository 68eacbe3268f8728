//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the record-store contract the form binder saves into.
//! - Isolate SQL details from the form/service orchestration.
//!
//! # Invariants
//! - Repository writes enforce `Event::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   storage transport errors.

pub mod event_repo;
