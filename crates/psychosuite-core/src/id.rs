//! Opaque record ids.
//!
//! Ids are timestamp-derived decimal strings (millisecond precision),
//! matching the format already present in legacy persisted data. Callers
//! pass the clock reading in so id generation stays deterministic in tests.

use jiff::Timestamp;

/// Derive a fresh record id from a clock reading.
pub fn fresh_id(now: Timestamp) -> String {
    now.as_millisecond().to_string()
}
