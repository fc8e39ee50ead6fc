//! In-memory storage implementation for testing

use std::sync::{Arc, RwLock};

use crate::traits::LedgerStorage;
use crate::types::LedgerResult;

#[derive(Debug, Default)]
struct Inner {
    payload: Option<String>,
    writes: usize,
}

/// In-memory storage implementation for testing and demos.
///
/// Clones share the same underlying blob, so a handle kept by a test still
/// observes everything a ledger constructed from another clone persists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    /// Create a new, empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a blob, as if a previous session had written it.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        let store = Self::new();
        store.inner.write().unwrap().payload = Some(payload.into());
        store
    }

    /// Current blob contents, if any.
    pub fn payload(&self) -> Option<String> {
        self.inner.read().unwrap().payload.clone()
    }

    /// How many times the blob has been rewritten.
    pub fn write_count(&self) -> usize {
        self.inner.read().unwrap().writes
    }

    /// Drop the blob and reset the write counter (useful between test cases).
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.payload = None;
        inner.writes = 0;
    }
}

impl LedgerStorage for MemoryStore {
    fn read(&self) -> LedgerResult<Option<String>> {
        Ok(self.inner.read().unwrap().payload.clone())
    }

    fn write(&mut self, payload: &str) -> LedgerResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.payload = Some(payload.to_string());
        inner.writes += 1;
        Ok(())
    }
}
