use super::{now_millis, EntryId, JoinOutcome, WaitlistEntry, WaitlistStore};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    entries: Vec<WaitlistEntry>,
}

/// In-process waitlist store.
///
/// The duplicate check and the insert happen under one lock, so concurrent
/// joins with the same email cannot both succeed.
#[derive(Debug, Clone, Default)]
pub struct MemoryWaitlist {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryWaitlist {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("Waitlist store lock poisoned"))
    }
}

#[async_trait]
impl WaitlistStore for MemoryWaitlist {
    async fn join(&self, email: &str) -> Result<JoinOutcome> {
        let mut inner = self.lock()?;

        if inner.entries.iter().any(|e| e.email == email) {
            return Ok(JoinOutcome::AlreadyExists);
        }

        inner.next_id += 1;
        let entry = WaitlistEntry {
            id: EntryId::new(inner.next_id),
            email: email.to_string(),
            created_at: now_millis(),
        };
        inner.entries.push(entry);

        Ok(JoinOutcome::Joined)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.lock()?.entries.len() as u64)
    }

    async fn list_all(&self) -> Result<Vec<WaitlistEntry>> {
        let mut entries = self.lock()?.entries.clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(entries)
    }

    async fn remove(&self, id: EntryId) -> Result<()> {
        self.lock()?.entries.retain(|e| e.id != id);
        Ok(())
    }
}
