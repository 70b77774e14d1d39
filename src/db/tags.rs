use crate::db::db::Db;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const SCHEMA_TAGS: &str = "CREATE TABLE IF NOT EXISTS tags (
    id TEXT NOT NULL PRIMARY KEY,
    name TEXT NOT NULL
)";
const SCHEMA_TASK_TAGS: &str = "CREATE TABLE IF NOT EXISTS task_tags (
    task_id TEXT NOT NULL,
    tag_id TEXT NOT NULL,
    PRIMARY KEY (task_id, tag_id),
    FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE,
    FOREIGN KEY (tag_id) REFERENCES tags(id) ON DELETE CASCADE
)";
const INSERT_TAG: &str = "INSERT INTO tags (id, name) VALUES (?1, ?2)";
const RENAME_TAG: &str = "UPDATE tags SET name = ?2 WHERE id = ?1";
const SELECT_ALL_TAGS: &str = "SELECT id, name FROM tags ORDER BY name";
const SELECT_TAG_BY_ID: &str = "SELECT id, name FROM tags WHERE id = ?1";
const SELECT_TAGS_BY_TASK: &str = "
    SELECT t.id, t.name FROM tags t
    JOIN task_tags tt ON t.id = tt.tag_id
    WHERE tt.task_id = ?1
    ORDER BY t.name
";
const COUNT_TAGS: &str = "SELECT COUNT(*) FROM tags";
const INSERT_TASK_TAG: &str = "INSERT OR IGNORE INTO task_tags (task_id, tag_id) SELECT ?1, id FROM tags WHERE id = ?2";
const DELETE_ALL_TASK_TAGS: &str = "DELETE FROM task_tags WHERE task_id = ?1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// What an upsert did to a stored tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSync {
    Inserted,
    Renamed,
    Unchanged,
}

pub struct Tags {
    conn: Connection,
}

impl Tags {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        // Ensure tables exist (migration v1 creates them, but we ensure here too)
        db.conn.execute(SCHEMA_TAGS, [])?;
        db.conn.execute(SCHEMA_TASK_TAGS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Insert a tag or rename the stored one to match the remote name.
    ///
    /// Missing and empty remote names never rename an existing tag; for a
    /// new tag they are stored as an empty name rather than rejected.
    pub fn upsert(&mut self, id: &str, name: Option<&str>) -> Result<TagSync> {
        match self.get_by_id(id)? {
            None => {
                self.conn.execute(INSERT_TAG, params![id, name.unwrap_or("")])?;
                Ok(TagSync::Inserted)
            }
            Some(existing) => match name {
                Some(new_name) if !new_name.is_empty() && new_name != existing.name => {
                    self.conn.execute(RENAME_TAG, params![id, new_name])?;
                    Ok(TagSync::Renamed)
                }
                _ => Ok(TagSync::Unchanged),
            },
        }
    }

    /// Get all tags
    pub fn list(&mut self) -> Result<Vec<Tag>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TAGS)?;
        let tag_iter = stmt.query_map([], |row| {
            Ok(Tag {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut tags = Vec::new();
        for tag in tag_iter {
            tags.push(tag?);
        }
        Ok(tags)
    }

    /// Get a tag by ID
    pub fn get_by_id(&mut self, id: &str) -> Result<Option<Tag>> {
        self.conn
            .query_row(SELECT_TAG_BY_ID, params![id], |row| {
                Ok(Tag {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Get tags linked to a specific task
    pub fn get_task_tags(&mut self, task_id: &str) -> Result<Vec<Tag>> {
        let mut stmt = self.conn.prepare(SELECT_TAGS_BY_TASK)?;
        let tag_iter = stmt.query_map(params![task_id], |row| {
            Ok(Tag {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut tags = Vec::new();
        for tag in tag_iter {
            tags.push(tag?);
        }
        Ok(tags)
    }

    /// Set tag links for a task (replaces existing links)
    ///
    /// Links referencing tags that are not stored are skipped, the remote
    /// task list may mention tags the tag listing no longer returns.
    pub fn set_task_tags(&mut self, task_id: &str, tag_ids: &[String]) -> Result<()> {
        self.conn.execute(DELETE_ALL_TASK_TAGS, params![task_id])?;

        for tag_id in tag_ids {
            let inserted = self.conn.execute(INSERT_TASK_TAG, params![task_id, tag_id])?;
            if inserted == 0 {
                msg_debug!(format!("Tag {} is not stored, link skipped", tag_id));
            }
        }
        Ok(())
    }

    /// Count stored tags
    pub fn count(&mut self) -> Result<i64> {
        let count = self.conn.query_row(COUNT_TAGS, [], |row| row.get(0))?;
        Ok(count)
    }
}
