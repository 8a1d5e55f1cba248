use std::sync::Mutex;

use crate::models::CycleRecord;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record store lock poisoned")]
    Poisoned,
    #[error("record store backend error: {0}")]
    Backend(String),
}

/// Load/save contract of whatever keeps the user's records.
///
/// `load` returns an owned snapshot; computations never see later writes.
pub trait RecordStore {
    fn load(&self) -> Result<Vec<CycleRecord>, StoreError>;
    fn save(&self, records: &[CycleRecord]) -> Result<(), StoreError>;
}

/// Records held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<CycleRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<CycleRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Vec<CycleRecord>, StoreError> {
        let records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }

    fn save(&self, records: &[CycleRecord]) -> Result<(), StoreError> {
        let mut stored = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        *stored = records.to_vec();
        Ok(())
    }
}
