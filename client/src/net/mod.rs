//! Networking modules for the backend JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds requests and interprets responses, `transport` performs the
//! HTTP exchange, and `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;
