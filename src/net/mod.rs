//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema plus the
//! pure classification of auth responses into success or [`crate::AuthError`].

pub mod api;
pub mod types;
