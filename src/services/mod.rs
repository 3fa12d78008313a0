//! Collaborators the auth forms drive on success.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session cache, router, and notification service belong to the wider
//! application. Each is a small trait so the forms can be exercised against
//! in-memory implementations.

pub mod navigation;
pub mod notify;
pub mod session;
