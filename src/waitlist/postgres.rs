use super::{now_millis, EntryId, JoinOutcome, WaitlistEntry, WaitlistStore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// PostgreSQL-backed waitlist store.
///
/// The unique index on `email` backs the duplicate check, so two concurrent
/// joins with the same address resolve to one insert and one `AlreadyExists`.
#[derive(Debug, Clone)]
pub struct PgWaitlist {
    pool: PgPool,
}

impl PgWaitlist {
    /// Connect to the database and create the waitlist table if needed
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        let store = Self { pool };
        store.init_schema().await?;

        info!("Connected to PostgreSQL waitlist store");
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS waitlist (
                id BIGSERIAL PRIMARY KEY,
                email TEXT NOT NULL,
                created_at BIGINT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create waitlist table")?;

        sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS waitlist_by_email ON waitlist (email)")
            .execute(&self.pool)
            .await
            .context("Failed to create waitlist email index")?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS waitlist_by_created_at ON waitlist (created_at DESC)",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create waitlist created_at index")?;

        Ok(())
    }
}

#[async_trait]
impl WaitlistStore for PgWaitlist {
    async fn join(&self, email: &str) -> Result<JoinOutcome> {
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM waitlist WHERE email = $1 LIMIT 1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to look up waitlist entry")?;

        if existing.is_some() {
            return Ok(JoinOutcome::AlreadyExists);
        }

        // A concurrent join may have inserted since the lookup
        let inserted: Option<i64> = sqlx::query_scalar(
            "INSERT INTO waitlist (email, created_at) VALUES ($1, $2)
             ON CONFLICT (email) DO NOTHING
             RETURNING id",
        )
        .bind(email)
        .bind(now_millis())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to insert waitlist entry")?;

        match inserted {
            Some(id) => {
                info!("New waitlist entry: {}", id);
                Ok(JoinOutcome::Joined)
            }
            None => Ok(JoinOutcome::AlreadyExists),
        }
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM waitlist")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count waitlist entries")?;

        Ok(count.max(0) as u64)
    }

    async fn list_all(&self) -> Result<Vec<WaitlistEntry>> {
        let rows: Vec<(i64, String, i64)> = sqlx::query_as(
            "SELECT id, email, created_at FROM waitlist ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list waitlist entries")?;

        Ok(rows
            .into_iter()
            .map(|(id, email, created_at)| WaitlistEntry {
                id: EntryId::new(id),
                email,
                created_at,
            })
            .collect())
    }

    async fn remove(&self, id: EntryId) -> Result<()> {
        let result = sqlx::query("DELETE FROM waitlist WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .context("Failed to remove waitlist entry")?;

        if result.rows_affected() > 0 {
            info!("Removed waitlist entry: {}", id);
        }
        Ok(())
    }
}
