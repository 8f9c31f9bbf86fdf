//! Typed database layer over the key-value store.
//!
//! Clients and results live in two JSON documents. No delete operation
//! exists for either collection; clients are only added or edited, results
//! only added or augmented with an interpretation. Every mutation is a
//! whole-document read-modify-write, and the interpretation task writes
//! from a background thread, so mutations serialize behind one lock held
//! across both halves.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::info;

use psychosuite_core::models::{Client, TestResult};

use crate::error::StoreError;
use crate::kv::KvStore;

pub const CLIENTS_KEY: &str = "clients";
pub const RESULTS_KEY: &str = "results";

pub struct Database {
    kv: KvStore,
    write_lock: Mutex<()>,
}

impl Database {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Ok(Database {
            kv: KvStore::open(root)?,
            write_lock: Mutex::new(()),
        })
    }

    // A poisoned lock only means another writer panicked mid-mutation;
    // the document on disk is still the last fully renamed one.
    fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // ── Clients ──────────────────────────────────────────────────────────

    pub fn clients(&self) -> Vec<Client> {
        self.kv.read_or(CLIENTS_KEY, Vec::new())
    }

    pub fn client(&self, id: &str) -> Result<Client, StoreError> {
        self.clients()
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::ClientNotFound(id.to_string()))
    }

    pub fn add_client(&self, client: Client) -> Result<(), StoreError> {
        let _guard = self.write_guard();
        let mut clients = self.clients();
        info!(client_id = %client.id, "adding client");
        clients.push(client);
        self.kv.write(CLIENTS_KEY, &clients)
    }

    /// Replace an existing client record wholesale (edit).
    pub fn update_client(&self, client: Client) -> Result<(), StoreError> {
        let _guard = self.write_guard();
        let mut clients = self.clients();
        let slot = clients
            .iter_mut()
            .find(|c| c.id == client.id)
            .ok_or_else(|| StoreError::ClientNotFound(client.id.clone()))?;
        *slot = client;
        self.kv.write(CLIENTS_KEY, &clients)
    }

    // ── Results ──────────────────────────────────────────────────────────

    pub fn results(&self) -> Vec<TestResult> {
        self.kv.read_or(RESULTS_KEY, Vec::new())
    }

    pub fn result(&self, id: &str) -> Result<TestResult, StoreError> {
        self.results()
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::ResultNotFound(id.to_string()))
    }

    /// All results for one client, newest first.
    pub fn client_results(&self, client_id: &str) -> Vec<TestResult> {
        let mut results: Vec<TestResult> = self
            .results()
            .into_iter()
            .filter(|r| r.client_id == client_id)
            .collect();
        results.sort_by(|a, b| b.administered_at.cmp(&a.administered_at));
        results
    }

    pub fn add_result(&self, result: TestResult) -> Result<(), StoreError> {
        let _guard = self.write_guard();
        let mut results = self.results();
        info!(result_id = %result.id, test_id = %result.test_id, "adding result");
        results.push(result);
        self.kv.write(RESULTS_KEY, &results)
    }

    /// Attach (or overwrite) the interpretation text on a stored result.
    pub fn set_interpretation(&self, result_id: &str, text: &str) -> Result<(), StoreError> {
        let _guard = self.write_guard();
        let mut results = self.results();
        let slot = results
            .iter_mut()
            .find(|r| r.id == result_id)
            .ok_or_else(|| StoreError::ResultNotFound(result_id.to_string()))?;
        slot.interpretation = Some(text.to_string());
        self.kv.write(RESULTS_KEY, &results)
    }

    /// Replace the entire store. Used by backup import, after the caller
    /// has confirmed the overwrite.
    pub fn replace_all(
        &self,
        clients: Vec<Client>,
        results: Vec<TestResult>,
    ) -> Result<(), StoreError> {
        let _guard = self.write_guard();
        info!(
            clients = clients.len(),
            results = results.len(),
            "replacing entire store"
        );
        self.kv.write(CLIENTS_KEY, &clients)?;
        self.kv.write(RESULTS_KEY, &results)
    }
}
