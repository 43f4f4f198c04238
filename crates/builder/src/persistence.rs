//! Draft persistence contract. Keyed, last-write-wins, no transactions.
//! The in-memory implementation backs development and tests; production
//! swaps in a real store behind the same trait.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde_json::Value;

/// A saved draft snapshot.
#[derive(Debug, Clone)]
pub struct DraftRecord {
    pub client_id: String,
    pub data: Value,
    pub saved_at: DateTime<Utc>,
}

/// Keyed draft storage the autosave path writes through.
pub trait DraftStore: Send + Sync {
    fn save(&self, draft_id: &str, client_id: &str, data: Value);
    fn get(&self, draft_id: &str) -> Option<DraftRecord>;
}

/// DashMap-backed in-memory draft store.
#[derive(Default)]
pub struct MemoryDraftStore {
    drafts: DashMap<String, DraftRecord>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn save(&self, draft_id: &str, client_id: &str, data: Value) {
        self.drafts.insert(
            draft_id.to_string(),
            DraftRecord {
                client_id: client_id.to_string(),
                data,
                saved_at: Utc::now(),
            },
        );
    }

    fn get(&self, draft_id: &str) -> Option<DraftRecord> {
        self.drafts.get(draft_id).map(|r| r.clone())
    }
}
