//! Index derivation over the validated record set.
//!
//! # Responsibility
//! - Assign every record to exactly one output category.
//! - Resolve one contact email per author identity.
//!
//! # Invariants
//! - Both derivations run before any output is written; they never mutate the
//!   record set.

pub mod authors;
pub mod classify;
