//! psychosuite-report
//!
//! Plain-text report generation from stored results: the multi-result
//! assessment protocol and the single-result detail report, both rendered
//! through embedded Tera templates.

pub mod detail;
pub mod error;
pub mod protocol;
pub mod render;
