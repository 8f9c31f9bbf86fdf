//! psychosuite-app library root.
//!
//! Application state, navigation, screen view models, and the command
//! layer. Exposed as a library so integration tests can drive the whole
//! flow without the terminal front end.

pub mod commands;
pub mod config;
pub mod error;
pub mod nav;
pub mod state;
pub mod view;
