pub mod client;
pub mod result;

pub use client::Client;
pub use result::TestResult;
