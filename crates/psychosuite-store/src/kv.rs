//! JSON documents keyed by name under a data directory.
//!
//! Reads absorb corruption: a missing or malformed document yields the
//! caller-supplied default (with a warning log) rather than an error, so a
//! damaged file can never lock the user out of the application.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::StoreError;

pub struct KvStore {
    root: PathBuf,
}

impl KvStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.display().to_string(),
            source,
        })?;
        Ok(KvStore { root })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read the document at `key`, or the default when it is missing or
    /// does not parse.
    pub fn read_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return default,
            Err(e) => {
                warn!(key, path = %path.display(), error = %e, "read failed; using default");
                return default;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, path = %path.display(), error = %e, "malformed document; using default");
                default
            }
        }
    }

    /// Write a document at `key` as pretty JSON.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path(key);
        let body = serde_json::to_vec_pretty(value)?;
        write_atomic(&path, &body)
    }
}

static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Write via a sibling temp file and rename, so a crash mid-write leaves
/// the previous document intact. The temp name carries the pid and a
/// sequence number: two writers must never rename the same temp file.
fn write_atomic(path: &Path, body: &[u8]) -> Result<(), StoreError> {
    let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
    let tmp = path.with_extension(format!("json.tmp.{}.{seq}", std::process::id()));
    let io_err = |source| StoreError::Io {
        path: path.display().to_string(),
        source,
    };
    fs::write(&tmp, body).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}
