//! Form-local state modules.
//!
//! DESIGN
//! ======
//! State is plain data updated through pure functions. `pages` owns the
//! shared handles and decides when a transition happens.

pub mod form;
pub mod submission;
