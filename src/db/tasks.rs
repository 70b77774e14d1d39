use super::db::Db;
use crate::libs::task::{Task, TaskFilter, TaskKind};
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id TEXT NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    kind TEXT NOT NULL,
    created_at TIMESTAMP,
    completed_at TIMESTAMP,
    last_synced TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const UPSERT_TASK: &str = "INSERT INTO tasks (id, name, kind, created_at, completed_at) VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        kind = excluded.kind,
        created_at = excluded.created_at,
        completed_at = excluded.completed_at,
        last_synced = CURRENT_TIMESTAMP";
const SELECT_TASKS: &str = "SELECT id, name, kind, created_at, completed_at, last_synced FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_NAME: &str = "WHERE name = ?1";
const WHERE_KIND: &str = "WHERE kind = ?1";
const ORDER_BY_NAME: &str = "ORDER BY name";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Insert a task or refresh the stored row, bumping its sync timestamp.
    ///
    /// Identifiers are stored exactly as the remote service reports them.
    pub fn upsert(&mut self, task: &Task) -> Result<()> {
        self.conn.execute(
            UPSERT_TASK,
            params![task.id, task.name, task.kind.as_str(), task.created_at, task.completed_at],
        )?;

        Ok(())
    }

    /// Fetch stored tasks, optionally narrowed to one kind.
    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (mut stmt, params) = match filter {
            TaskFilter::All => (self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_NAME))?, vec![]),
            TaskFilter::Kind(kind) => (
                self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_KIND, ORDER_BY_NAME))?,
                vec![kind.as_str().to_string()],
            ),
        };

        let task_iter = stmt.query_map(params_from_iter(params.iter()), |row| {
            Ok(Task {
                id: row.get(0)?,
                name: row.get(1)?,
                kind: TaskKind::parse(&row.get::<_, String>(2)?),
                created_at: row.get(3)?,
                completed_at: row.get(4)?,
                last_synced: row.get(5)?,
            })
        })?;
        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    /// Get a task by its remote identifier
    pub fn get_by_id(&mut self, id: &str) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    kind: TaskKind::parse(&row.get::<_, String>(2)?),
                    created_at: row.get(3)?,
                    completed_at: row.get(4)?,
                    last_synced: row.get(5)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Get a task by its exact name
    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_NAME), params![name], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    kind: TaskKind::parse(&row.get::<_, String>(2)?),
                    created_at: row.get(3)?,
                    completed_at: row.get(4)?,
                    last_synced: row.get(5)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Find a task by identifier first, then by exact name
    pub fn find(&mut self, query: &str) -> Result<Option<Task>> {
        if let Some(task) = self.get_by_id(query)? {
            return Ok(Some(task));
        }
        self.get_by_name(query)
    }

    /// Count stored tasks
    pub fn count(&mut self) -> Result<i64> {
        let count = self.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;
        Ok(count)
    }
}
