//! Waitlist store: one collection of entries keyed by unique email.
//!
//! The store contract is deliberately small: `join`, `count`, `list_all` and
//! `remove`. A duplicate email is a normal outcome of `join`, reported as
//! [`JoinOutcome::AlreadyExists`]; only transport/backing-store failures are
//! errors. Nothing is cached and nothing is retried.
//!
//! Two backends implement [`WaitlistStore`]:
//!
//! - [`PgWaitlist`]: PostgreSQL through a `sqlx` connection pool
//! - [`MemoryWaitlist`]: in-process, for local runs and tests

mod memory;
mod postgres;

pub use memory::MemoryWaitlist;
pub use postgres::PgWaitlist;

use crate::config::{Backend, Config};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

/// Opaque identifier assigned by the store when an entry is created.
///
/// Serialized as a string so callers never rely on its numeric form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct EntryId(i64);

impl EntryId {
    pub(crate) fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub(crate) fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(EntryId)
    }
}

impl From<EntryId> for String {
    fn from(id: EntryId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for EntryId {
    type Error = std::num::ParseIntError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// One person's interest, keyed by email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: EntryId,
    pub email: String,
    /// Milliseconds since the Unix epoch, set by the store at insertion
    pub created_at: i64,
}

/// Result of a `join` call.
///
/// Serializes to `{"success":true}` or
/// `{"success":false,"reason":"already_exists"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    AlreadyExists,
}

impl JoinOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, JoinOutcome::Joined)
    }

    /// Machine-readable failure reason, `None` on success
    pub fn reason(self) -> Option<&'static str> {
        match self {
            JoinOutcome::Joined => None,
            JoinOutcome::AlreadyExists => Some("already_exists"),
        }
    }
}

impl Serialize for JoinOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let fields = if self.is_success() { 1 } else { 2 };
        let mut state = serializer.serialize_struct("JoinOutcome", fields)?;
        state.serialize_field("success", &self.is_success())?;
        if let Some(reason) = self.reason() {
            state.serialize_field("reason", reason)?;
        }
        state.end()
    }
}

/// Data-access contract for the waitlist collection
#[async_trait]
pub trait WaitlistStore: Send + Sync {
    /// Add `email` unless an entry with exactly the same email exists.
    ///
    /// The store does no syntax validation; callers validate first.
    async fn join(&self, email: &str) -> Result<JoinOutcome>;

    /// Number of entries currently stored
    async fn count(&self) -> Result<u64>;

    /// All entries, most recent first
    async fn list_all(&self) -> Result<Vec<WaitlistEntry>>;

    /// Delete an entry; absent ids are not an error
    async fn remove(&self, id: EntryId) -> Result<()>;
}

/// Open the store selected by `config`.
///
/// Returns `None` when the PostgreSQL backend has no `DATABASE_URL`; the
/// server then runs in degraded mode with writes disabled.
pub async fn open_store(config: &Config) -> Result<Option<Arc<dyn WaitlistStore>>> {
    match (config.backend, config.database_url.as_deref()) {
        (Backend::Memory, _) => {
            warn!("Using in-memory waitlist store, entries are lost on restart");
            Ok(Some(Arc::new(MemoryWaitlist::new())))
        }
        (Backend::Postgres, Some(url)) => Ok(Some(Arc::new(PgWaitlist::connect(url).await?))),
        (Backend::Postgres, None) => {
            warn!("DATABASE_URL not set, waitlist is read-only and empty");
            Ok(None)
        }
    }
}

/// Current time in milliseconds since the Unix epoch
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_outcome_success_serialization() {
        let json = serde_json::to_string(&JoinOutcome::Joined).expect("Should serialize");
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_join_outcome_already_exists_serialization() {
        let json = serde_json::to_string(&JoinOutcome::AlreadyExists).expect("Should serialize");
        assert_eq!(json, r#"{"success":false,"reason":"already_exists"}"#);
    }

    #[test]
    fn test_entry_serializes_camel_case_with_string_id() {
        let entry = WaitlistEntry {
            id: EntryId::new(42),
            email: "a@x.com".to_string(),
            created_at: 1_700_000_000_000,
        };
        let value = serde_json::to_value(&entry).expect("Should serialize");

        assert_eq!(value["id"], "42");
        assert_eq!(value["email"], "a@x.com");
        assert_eq!(value["createdAt"], 1_700_000_000_000i64);
    }

    #[test]
    fn test_entry_id_parsing() {
        assert_eq!("17".parse::<EntryId>().unwrap(), EntryId::new(17));
        assert_eq!(" 17 ".parse::<EntryId>().unwrap(), EntryId::new(17));
        assert!("abc".parse::<EntryId>().is_err());
        assert!("".parse::<EntryId>().is_err());
    }

    fn config(backend: Backend, database_url: Option<&str>) -> Config {
        Config {
            backend,
            database_url: database_url.map(str::to_string),
            admin_password: None,
            port: 8080,
        }
    }

    #[tokio::test]
    async fn test_open_store_memory_backend() {
        let store = open_store(&config(Backend::Memory, None))
            .await
            .expect("Should open")
            .expect("Should be ready");

        assert!(store.join("a@x.com").await.unwrap().is_success());
    }

    #[tokio::test]
    async fn test_open_store_without_database_url_is_degraded() {
        let store = open_store(&config(Backend::Postgres, None))
            .await
            .expect("Should not fail");

        assert!(store.is_none());
    }

    #[test]
    fn test_entry_id_deserializes_from_string() {
        let id: EntryId = serde_json::from_str(r#""9""#).expect("Should deserialize");
        assert_eq!(id.get(), 9);
    }
}
