use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::modules::check_ins::core::date_range::DateRange;
use crate::modules::check_ins::core::shift_entry::{NewShiftEntry, ShiftEntry, ShiftKey};
use crate::shared::infrastructure::entry_store::{EntryStore, EntryStoreError};

#[derive(Default)]
pub struct InMemoryEntryStore {
    rows: RwLock<BTreeMap<ShiftKey, ShiftEntry>>,
    is_offline: bool,
    delay_insert_ms: AtomicU64,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_insert_ms(&self, ms: u64) {
        self.delay_insert_ms.store(ms, Ordering::Relaxed);
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }

    fn ensure_online(&self) -> Result<(), EntryStoreError> {
        if self.is_offline {
            return Err(EntryStoreError::Unavailable("Entry store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn insert(&self, entry: NewShiftEntry) -> Result<ShiftEntry, EntryStoreError> {
        self.ensure_online()?;
        let delay = self.delay_insert_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let key = entry.key();
        let mut rows = self.rows.write().await;
        if rows.contains_key(&key) {
            return Err(EntryStoreError::Duplicate(key));
        }
        let stored = ShiftEntry::record(entry, Utc::now());
        rows.insert(key, stored.clone());
        Ok(stored)
    }

    async fn contains(&self, key: &ShiftKey) -> Result<bool, EntryStoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.contains_key(key))
    }

    async fn list(&self, range: DateRange) -> Result<Vec<ShiftEntry>, EntryStoreError> {
        self.ensure_online()?;
        let rows = self.rows.read().await;
        let mut entries: Vec<ShiftEntry> = rows
            .values()
            .filter(|entry| range.contains(entry.date))
            .cloned()
            .collect();
        entries.sort_by(|a, b| {
            (a.date, &a.employee_id, a.shift).cmp(&(b.date, &b.employee_id, b.shift))
        });
        Ok(entries)
    }
}
