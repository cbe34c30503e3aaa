//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern, providing
//! concrete implementations of the domain port traits:
//!
//! - **rest**: reqwest-backed transport and the generic resource client for
//!   the console API's status-in-body envelope.
//! - **notify**: tracing-backed notifier for screens that only log.
//!
//! Adapters are thin translators between domain types and wire
//! representations. They contain no business logic.

pub mod notify;
pub mod rest;
