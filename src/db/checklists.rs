use super::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

const SCHEMA_CHECKLIST: &str = "CREATE TABLE IF NOT EXISTS checklist (
    id INTEGER PRIMARY KEY,
    task_id TEXT NOT NULL,
    name TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    position INTEGER NOT NULL,
    FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
)";
const INSERT_ITEM: &str = "INSERT INTO checklist (task_id, name, completed, position) VALUES (?1, ?2, ?3, ?4)";
const SELECT_FOR_TASK: &str = "SELECT name, completed, position FROM checklist WHERE task_id = ?1 ORDER BY position";
const DELETE_FOR_TASK: &str = "DELETE FROM checklist WHERE task_id = ?1";
const COUNT_ITEMS: &str = "SELECT COUNT(*) FROM checklist";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub name: String,
    pub completed: bool,
    pub position: i32,
}

pub struct Checklists {
    pub conn: Connection,
}

impl Checklists {
    pub fn new() -> Result<Checklists> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_CHECKLIST, [])?;

        Ok(Checklists { conn: db.conn })
    }

    /// Replace a task's checklist with the remote state in one transaction.
    ///
    /// Checklist items carry no identity of their own, so the stored rows
    /// mirror the latest remote payload rather than being merged.
    pub fn replace_for_task(&mut self, task_id: &str, items: &[ChecklistItem]) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute(DELETE_FOR_TASK, params![task_id])?;
        for item in items {
            tx.execute(INSERT_ITEM, params![task_id, item.name, item.completed, item.position])?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Fetch a task's checklist in remote order
    pub fn fetch_for_task(&mut self, task_id: &str) -> Result<Vec<ChecklistItem>> {
        let mut stmt = self.conn.prepare(SELECT_FOR_TASK)?;
        let item_iter = stmt.query_map(params![task_id], |row| {
            Ok(ChecklistItem {
                name: row.get(0)?,
                completed: row.get(1)?,
                position: row.get(2)?,
            })
        })?;

        let mut items = Vec::new();
        for item_result in item_iter {
            items.push(item_result?);
        }
        Ok(items)
    }

    /// Count all stored checklist items
    pub fn count(&mut self) -> Result<i64> {
        let count = self.conn.query_row(COUNT_ITEMS, [], |row| row.get(0))?;
        Ok(count)
    }
}
