use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::errors::{CoreError, EntityKind};
use crate::models::category::Category;
use crate::models::deal::Deal;
use crate::models::platform::Platform;

/// A record kept in a [`MemoryStore`].
pub trait Record: Clone + Send + Sync {
    const KIND: EntityKind;

    fn id(&self) -> &str;
}

impl Record for Deal {
    const KIND: EntityKind = EntityKind::Deal;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Category {
    const KIND: EntityKind = EntityKind::Category;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Platform {
    const KIND: EntityKind = EntityKind::Platform;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Hands out ids from the wall clock in milliseconds.
///
/// Two calls inside the same millisecond would collide, so the counter never
/// repeats: it takes `max(now, last + 1)`.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Acquire);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return candidate.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Suspend the caller for the simulated round trip.
pub async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Insertion-ordered in-memory table shared by the repositories.
///
/// The lock is only held for the copy or the mutation itself, never across
/// the simulated delay, so a read observes the store as of when it resolves.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
    ids: IdGenerator,
}

impl<T: Record> MemoryStore<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            records: RwLock::new(seed),
            ids: IdGenerator::new(),
        }
    }

    pub async fn snapshot(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Result<T, CoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(T::KIND, id))
    }

    /// Append a record built around a freshly assigned id.
    pub async fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(String) -> T,
    {
        let record = build(self.ids.next_id());
        self.records.write().await.push(record.clone());
        record
    }

    /// Mutate the record in place and return a copy of the result.
    pub async fn modify<F>(&self, id: &str, change: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| CoreError::not_found(T::KIND, id))?;
        change(record);
        Ok(record.clone())
    }

    pub async fn remove(&self, id: &str) -> Result<T, CoreError> {
        let mut records = self.records.write().await;
        let idx = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| CoreError::not_found(T::KIND, id))?;
        Ok(records.remove(idx))
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
