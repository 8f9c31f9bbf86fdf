//! psychosuite-core
//!
//! Pure domain types and id generation. No storage or AWS dependency —
//! this is the shared vocabulary of the PsychoSuite system.

pub mod id;
pub mod models;
