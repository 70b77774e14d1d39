use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "habsync.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database and brings the schema up to date.
    pub fn new() -> Result<Db> {
        let mut conn = Self::new_without_migrations()?;
        super::migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the database without running pending migrations.
    pub fn new_without_migrations() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;

        Ok(conn)
    }
}
