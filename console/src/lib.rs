//! Admin console list-management core.
//!
//! Every screen of the coaching admin console manages one tabular resource
//! the same way: fetch the full list, filter and paginate it client side,
//! and apply mutations through the REST API before patching the local view.
//! This crate implements that cycle once as [`domain::ListController`] and
//! binds it to each concrete resource in [`screens`].
//!
//! Rendering, routing, and dialog chrome live outside this crate and are
//! reached through the ports in [`domain::ports`].

pub mod config;
pub mod domain;
pub mod models;
pub mod outbound;
pub mod screens;
