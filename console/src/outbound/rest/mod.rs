//! Reqwest-backed REST adapter for the console API.
//!
//! The API speaks a status-in-body convention: every endpoint answers
//! `{ "status": bool, "data": ..., "message": ... }` and `status: true`
//! means success regardless of the HTTP status code. That convention is the
//! contract across every endpoint, so the transport never judges responses
//! by their HTTP status and the envelope decoder is the single authority on
//! success and failure.

mod client;
mod envelope;
mod transport;

pub use client::{FormPayload, ListMethod, RestResourceClient, Routes};
pub use envelope::{decode_ack, decode_mutation, decode_rows, Envelope};
pub use transport::RestTransport;
