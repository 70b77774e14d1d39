use super::db::Db;
use crate::libs::history::{Entry, Origin, Signal};
use crate::libs::task::TaskKind;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};

const SCHEMA_HISTORY: &str = "CREATE TABLE IF NOT EXISTS history (
    id INTEGER PRIMARY KEY,
    task_id TEXT NOT NULL,
    date DATE NOT NULL,
    value REAL NOT NULL,
    origin TEXT NOT NULL DEFAULT 'remote',
    direction INTEGER NOT NULL DEFAULT 0,
    UNIQUE (task_id, date),
    FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
)";
const UPSERT_ENTRY: &str = "INSERT INTO history (task_id, date, value, origin, direction) VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT(task_id, date) DO UPDATE SET
        value = excluded.value,
        origin = excluded.origin,
        direction = excluded.direction";
const SELECT_FOR_TASK: &str = "SELECT date, value, origin, direction FROM history WHERE task_id = ?1 ORDER BY date ASC";
const COUNT_ENTRIES: &str = "SELECT COUNT(*) FROM history";
const COUNT_FOR_TASK: &str = "SELECT COUNT(*) FROM history WHERE task_id = ?1";

/// One stored history row, including the trend against the previous date.
#[derive(Debug, Clone)]
pub struct HistoryRow {
    pub date: NaiveDate,
    pub value: f64,
    pub origin: Origin,
    pub direction: i32,
}

pub struct Histories {
    pub conn: Connection,
}

impl Histories {
    pub fn new() -> Result<Histories> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_HISTORY, [])?;

        Ok(Histories { conn: db.conn })
    }

    /// Fetch a task's stored history as entries, sorted by date ascending.
    pub fn fetch_for_task(&mut self, task_id: &str, kind: &TaskKind) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(SELECT_FOR_TASK)?;
        let entry_iter = stmt.query_map(params![task_id], |row| {
            Ok((row.get::<_, NaiveDate>(0)?, row.get::<_, f64>(1)?, row.get::<_, String>(2)?))
        })?;

        let mut entries = Vec::new();
        for entry_result in entry_iter {
            let (date, value, origin) = entry_result?;
            entries.push(Entry::new(date, Signal::from_value(kind, value), Origin::parse(&origin)));
        }
        Ok(entries)
    }

    /// Fetch a task's stored history rows, sorted by date ascending.
    pub fn fetch_rows(&mut self, task_id: &str) -> Result<Vec<HistoryRow>> {
        let mut stmt = self.conn.prepare(SELECT_FOR_TASK)?;
        let row_iter = stmt.query_map(params![task_id], |row| {
            Ok(HistoryRow {
                date: row.get(0)?,
                value: row.get(1)?,
                origin: Origin::parse(&row.get::<_, String>(2)?),
                direction: row.get(3)?,
            })
        })?;

        let mut rows = Vec::new();
        for row_result in row_iter {
            rows.push(row_result?);
        }
        Ok(rows)
    }

    /// Write a merged history back to storage in one transaction.
    ///
    /// Every entry is inserted or updated in place, rows are never deleted,
    /// so dates the remote service has stopped reporting survive. The trend
    /// direction is recomputed across the full date-ascending sequence.
    pub fn upsert_merged(&mut self, task_id: &str, entries: &[Entry]) -> Result<()> {
        let tx = self.conn.transaction()?;

        let mut previous: Option<f64> = None;
        for entry in entries {
            let value = entry.signal.value();
            let direction = match previous {
                Some(prev) if value > prev => 1,
                Some(prev) if value < prev => -1,
                _ => 0,
            };
            tx.execute(UPSERT_ENTRY, params![task_id, entry.date, value, entry.origin.as_str(), direction])?;
            previous = Some(value);
        }

        tx.commit()?;
        Ok(())
    }

    /// Count all stored history entries
    pub fn count(&mut self) -> Result<i64> {
        let count = self.conn.query_row(COUNT_ENTRIES, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Count stored history entries for one task
    pub fn count_for_task(&mut self, task_id: &str) -> Result<i64> {
        let count = self.conn.query_row(COUNT_FOR_TASK, params![task_id], |row| row.get(0))?;
        Ok(count)
    }
}
