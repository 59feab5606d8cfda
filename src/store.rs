use crate::dac_err::{DacError, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// Storage of raw batch bytes, keyed by the hex data hash.
pub trait BatchStore: Send + Sync {
    fn store(&self, id: &str, data: &[u8]) -> Result<()>;

    /// Returns `NotFound` for an unknown id.
    fn fetch(&self, id: &str) -> Result<Vec<u8>>;
}

/// A process local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    batches: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        let batches = self
            .batches
            .read()
            .map_err(|e| DacError::Storage(e.to_string()))?;
        Ok(batches.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl BatchStore for MemoryStore {
    fn store(&self, id: &str, data: &[u8]) -> Result<()> {
        let mut batches = self
            .batches
            .write()
            .map_err(|e| DacError::Storage(e.to_string()))?;
        batches.insert(id.to_owned(), data.to_vec());
        Ok(())
    }

    fn fetch(&self, id: &str) -> Result<Vec<u8>> {
        let batches = self
            .batches
            .read()
            .map_err(|e| DacError::Storage(e.to_string()))?;
        batches
            .get(id)
            .cloned()
            .ok_or_else(|| DacError::NotFound(id.to_owned()))
    }
}
