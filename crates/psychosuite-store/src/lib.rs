//! psychosuite-store
//!
//! Local persistence. A small JSON key-value store on disk, a typed
//! database layer over it for clients and results, and full-database
//! backup export/import.

pub mod backup;
pub mod db;
pub mod error;
pub mod kv;
