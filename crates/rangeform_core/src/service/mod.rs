//! Use-case services for the demo application.
//!
//! # Responsibility
//! - Orchestrate form binding and repository calls into create/update
//!   entry points.
//! - Keep the presentation collaborator decoupled from storage details.

pub mod event_service;
