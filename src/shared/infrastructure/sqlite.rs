// SQLite backend for check-ins and month locks.
//
// Purpose
// - Durable storage that survives process restarts.
//
// Responsibilities
// - Own the schema and create it on connect.
// - Delegate uniqueness to UNIQUE(date, shift, employee_id). A racing second
//   insert surfaces as a unique violation and maps to EntryStoreError::Duplicate.
// - Store dates as day numbers counted from 0001-01-01 so that range scans
//   and ordering stay numeric for every year chrono can represent.
// - Map every other driver failure to an unavailable error.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

use crate::modules::check_ins::core::date_range::DateRange;
use crate::modules::check_ins::core::points::Points;
use crate::modules::check_ins::core::shift_entry::{NewShiftEntry, ShiftEntry, ShiftKey};
use crate::modules::check_ins::core::year_month::YearMonth;
use crate::shared::infrastructure::entry_store::{EntryStore, EntryStoreError};
use crate::shared::infrastructure::month_locks::{MonthLockError, MonthLockStore};

const SCHEMA: [&str; 2] = [
    "CREATE TABLE IF NOT EXISTS shift_entries (
        entry_id TEXT PRIMARY KEY NOT NULL,
        date INTEGER NOT NULL,
        shift TEXT NOT NULL,
        employee_id TEXT NOT NULL,
        group_name TEXT NOT NULL,
        points REAL NOT NULL CHECK (points >= 0),
        memo TEXT,
        recorded_at TEXT NOT NULL,
        UNIQUE(date, shift, employee_id)
    )",
    "CREATE TABLE IF NOT EXISTS month_locks (
        year_month TEXT PRIMARY KEY NOT NULL
    )",
];

#[derive(Debug, sqlx::FromRow)]
struct ShiftEntryRow {
    entry_id: String,
    date: i32,
    shift: String,
    employee_id: String,
    group_name: String,
    points: f64,
    memo: Option<String>,
    recorded_at: DateTime<Utc>,
}

fn day_number(date: NaiveDate) -> i32 {
    date.num_days_from_ce()
}

impl TryFrom<ShiftEntryRow> for ShiftEntry {
    type Error = EntryStoreError;

    fn try_from(row: ShiftEntryRow) -> Result<Self, Self::Error> {
        let corrupt = |what: String| EntryStoreError::Unavailable(format!("corrupt row: {what}"));
        Ok(ShiftEntry {
            entry_id: Uuid::parse_str(&row.entry_id).map_err(|e| corrupt(e.to_string()))?,
            employee_id: row.employee_id,
            group: row.group_name,
            date: NaiveDate::from_num_days_from_ce_opt(row.date)
                .ok_or_else(|| corrupt(format!("day number {} out of range", row.date)))?,
            shift: row.shift.parse().map_err(|e| corrupt(format!("{e}")))?,
            points: Points::new(row.points).map_err(|e| corrupt(e.to_string()))?,
            memo: row.memo,
            recorded_at: row.recorded_at,
        })
    }
}

impl From<sqlx::Error> for EntryStoreError {
    fn from(err: sqlx::Error) -> Self {
        EntryStoreError::Unavailable(err.to_string())
    }
}

impl From<sqlx::Error> for MonthLockError {
    fn from(err: sqlx::Error) -> Self {
        MonthLockError::Unavailable(err.to_string())
    }
}

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (or creates) the database file, creating its parent directory if needed.
    pub async fn open(path: &Path) -> Result<Self, EntryStoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                EntryStoreError::Unavailable(format!("{}: {e}", parent.display()))
            })?;
        }
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Full)
            .busy_timeout(Duration::from_secs(5));
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Self::with_pool(pool).await
    }

    /// Private in-memory database. One connection, since every SQLite memory
    /// connection is its own database.
    pub async fn in_memory() -> Result<Self, EntryStoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, EntryStoreError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&pool).await?;
        }
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl EntryStore for SqliteStore {
    async fn insert(&self, entry: NewShiftEntry) -> Result<ShiftEntry, EntryStoreError> {
        let key = entry.key();
        let stored = ShiftEntry::record(entry, Utc::now());
        let result = sqlx::query(
            "INSERT INTO shift_entries
                (entry_id, date, shift, employee_id, group_name, points, memo, recorded_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(stored.entry_id.to_string())
        .bind(day_number(stored.date))
        .bind(stored.shift.as_str())
        .bind(&stored.employee_id)
        .bind(&stored.group)
        .bind(stored.points.value())
        .bind(stored.memo.as_deref())
        .bind(stored.recorded_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(stored),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(EntryStoreError::Duplicate(key))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn contains(&self, key: &ShiftKey) -> Result<bool, EntryStoreError> {
        let row = sqlx::query(
            "SELECT 1 FROM shift_entries WHERE date = ? AND shift = ? AND employee_id = ?",
        )
        .bind(day_number(key.date))
        .bind(key.shift.as_str())
        .bind(&key.employee_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }

    async fn list(&self, range: DateRange) -> Result<Vec<ShiftEntry>, EntryStoreError> {
        let rows = sqlx::query_as::<_, ShiftEntryRow>(
            "SELECT entry_id, date, shift, employee_id, group_name, points, memo, recorded_at
             FROM shift_entries
             WHERE date >= ? AND date < ?
             ORDER BY date, employee_id, shift",
        )
        .bind(day_number(range.start()))
        .bind(day_number(range.end()))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(ShiftEntry::try_from).collect()
    }
}

#[async_trait]
impl MonthLockStore for SqliteStore {
    async fn lock(&self, month: YearMonth) -> Result<(), MonthLockError> {
        sqlx::query("INSERT OR IGNORE INTO month_locks (year_month) VALUES (?)")
            .bind(month.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn unlock(&self, month: YearMonth) -> Result<(), MonthLockError> {
        sqlx::query("DELETE FROM month_locks WHERE year_month = ?")
            .bind(month.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn is_locked(&self, month: YearMonth) -> Result<bool, MonthLockError> {
        let row = sqlx::query("SELECT 1 FROM month_locks WHERE year_month = ?")
            .bind(month.to_string())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}
